// ============================================================================
// Regressor : moindres carrés ordinaires
// ============================================================================
// slope     = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)
// intercept = (ΣyΣx² − ΣxΣxy) / (nΣx² − (Σx)²)
// ============================================================================

use tracing::{debug, instrument};

use crate::error::{Result, WeatherError};
use crate::models::{PredictedPoint, RegressionModel};

/// Ajuste une droite sur des points (année, valeur)
#[instrument(skip(points), fields(points = points.len()))]
pub fn fit(points: &[(i32, f64)]) -> Result<RegressionModel> {
    if points.len() < 2 {
        return Err(WeatherError::InsufficientData {
            found: points.len(),
        });
    }

    let n = points.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_x2) = points.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sx2), &(x, y)| {
            let x = x as f64;
            (sx + x, sy + y, sxy + x * y, sx2 + x * x)
        },
    );

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(WeatherError::DegenerateFit);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y * sum_x2 - sum_x * sum_xy) / denominator;

    debug!(slope, intercept, "Regression fitted");
    Ok(RegressionModel::new(slope, intercept))
}

/// Nombre maximum d'années prédites en une fois
pub const MAX_HORIZON: u32 = 1000;

/// Vérifie l'horizon de prévision : 1 ..= MAX_HORIZON
pub fn check_horizon(horizon: u32) -> Result<()> {
    if horizon == 0 || horizon > MAX_HORIZON {
        return Err(WeatherError::InvalidHorizon { horizon });
    }
    Ok(())
}

/// Prédit `horizon` années consécutives après `last_year`
///
/// Échoue avec InvalidHorizon si l'horizon est hors limites ou si la
/// dernière année prédite ne tient pas dans un i32.
pub fn predict_years(
    model: &RegressionModel,
    last_year: i32,
    horizon: u32,
) -> Result<Vec<PredictedPoint>> {
    check_horizon(horizon)?;
    let offset = i32::try_from(horizon).map_err(|_| WeatherError::InvalidHorizon { horizon })?;
    let final_year = last_year
        .checked_add(offset)
        .ok_or(WeatherError::InvalidHorizon { horizon })?;

    Ok((last_year + 1..=final_year)
        .map(|year| PredictedPoint {
            year,
            value: model.predict(year),
        })
        .collect())
}
