// ============================================================================
// Nuage de points - historique + prévision
// ============================================================================
// Chaque point devient une seule ligne par ARRONDI (pas troncature), bornée
// à [0, height - 1]. Les points observés et prédits ont des glyphes
// distincts pour que la partie extrapolée se repère au premier coup d'œil.
// ============================================================================

use crossterm::style::Color;

use crate::config::ChartConfig;
use crate::error::Result;
use crate::models::PredictedPoint;
use crate::ui::canvas::{fixed_width, paint, y_label, DisplayWindow, ValueScale, Y_AXIS_BAR};
use crate::ui::TextChart;

const GLYPH_OBSERVED: char = '*';
const GLYPH_PREDICTED: char = '+';

const OBSERVED_COLOR: Color = Color::Blue;
const PREDICTED_COLOR: Color = Color::Green;

/// Origine d'un point du nuage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Observed,
    Predicted,
}

/// Point à dessiner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub year: i32,
    pub value: f64,
    pub kind: PointKind,
}

impl PointKind {
    fn glyph(&self) -> char {
        match self {
            PointKind::Observed => GLYPH_OBSERVED,
            PointKind::Predicted => GLYPH_PREDICTED,
        }
    }

    fn color(&self) -> Color {
        match self {
            PointKind::Observed => OBSERVED_COLOR,
            PointKind::Predicted => PREDICTED_COLOR,
        }
    }
}

/// Concatène points observés et prédits, dans cet ordre
pub fn scatter_points(observed: &[(i32, f64)], predicted: &[PredictedPoint]) -> Vec<ScatterPoint> {
    observed
        .iter()
        .map(|&(year, value)| ScatterPoint {
            year,
            value,
            kind: PointKind::Observed,
        })
        .chain(predicted.iter().map(|p| ScatterPoint {
            year: p.year,
            value: p.value,
            kind: PointKind::Predicted,
        }))
        .collect()
}

/// Dessine le nuage de points
///
/// La grille a `height` lignes numérotées de height - 1 à 0 ;
/// scale = (height - 1) / plage, de sorte que le max tombe sur la ligne du haut.
pub fn render_scatter(points: &[ScatterPoint], config: &ChartConfig) -> Result<TextChart> {
    config.validate()?;
    let top = config.height - 1;
    let scale = ValueScale::from_values(points.iter().map(|p| p.value), top)?;
    let rows: Vec<usize> = points.iter().map(|p| scale.round_level(p.value)).collect();

    let width = config.scatter_column_width;
    let blank = " ".repeat(width);

    let mut lines = Vec::with_capacity(top + 2);
    for row in (0..=top).rev() {
        let mut line = format!(
            "{} {}",
            y_label(scale.label_by_scale(row), config.label_width),
            Y_AXIS_BAR
        );
        for (point, point_row) in points.iter().zip(&rows) {
            if *point_row == row {
                let cell = fixed_width(&point.kind.glyph().to_string(), width);
                line.push_str(&paint(cell, point.kind.color(), config.color));
            } else {
                line.push_str(&blank);
            }
        }
        lines.push(line);
    }

    // Axe X : deux derniers chiffres de l'année
    let mut x_axis = " ".repeat(config.label_width + 2);
    for point in points {
        let short = format!("{:02}", point.year.rem_euclid(100));
        x_axis.push_str(&fixed_width(&short, width));
    }
    lines.push(x_axis);

    // Pas de plafond pour ce graphique
    let window = DisplayWindow::new(points.len(), points.len());
    Ok(TextChart { lines, window })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WeatherError;

    fn config(height: usize) -> ChartConfig {
        ChartConfig {
            height,
            ..ChartConfig::plain()
        }
    }

    #[test]
    fn test_scatter_points_order() {
        let points = scatter_points(
            &[(2000, 10.0), (2001, 12.0)],
            &[PredictedPoint {
                year: 2002,
                value: 14.0,
            }],
        );
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].kind, PointKind::Observed);
        assert_eq!(points[2].kind, PointKind::Predicted);
    }

    #[test]
    fn test_render_scatter() {
        let points = scatter_points(
            &[(2000, 10.0), (2001, 12.0)],
            &[PredictedPoint {
                year: 2002,
                value: 14.0,
            }],
        );
        // height 5 → lignes 4..0, scale = 4 / 4 = 1
        let chart = render_scatter(&points, &config(5)).unwrap();

        assert_eq!(chart.lines.len(), 6);
        assert_eq!(chart.lines[0], format!("  14.0 ┃{}{}{}", "   ", "   ", "+  "));
        assert_eq!(chart.lines[2], format!("  12.0 ┃{}{}{}", "   ", "*  ", "   "));
        assert_eq!(chart.lines[4], format!("  10.0 ┃{}{}{}", "*  ", "   ", "   "));
        assert_eq!(chart.lines[5], format!("{}00 01 02 ", " ".repeat(8)));
    }

    #[test]
    fn test_render_scatter_flat() {
        let points = scatter_points(&[(2000, 1.0), (2001, 1.0)], &[]);
        let err = render_scatter(&points, &config(20)).unwrap_err();
        assert!(matches!(err, WeatherError::DegenerateRange { .. }));
    }
}
