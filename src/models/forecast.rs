// ============================================================================
// Régression linéaire : RegressionModel, PredictedPoint
// ============================================================================

use serde::{Deserialize, Serialize};

/// Droite Y = slope * X + intercept
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionModel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Valeur prédite pour une année
    pub fn predict(&self, year: i32) -> f64 {
        self.slope * year as f64 + self.intercept
    }

    /// Équation lisible ("Y = 2 * X + -3990")
    pub fn equation(&self) -> String {
        format!("Y = {} * X + {}", self.slope, self.intercept)
    }
}

/// Valeur extrapolée pour une année future
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictedPoint {
    pub year: i32,
    pub value: f64,
}
