// ============================================================================
// Histogramme vertical - une barre par année
// ============================================================================
// barHeight = floor((valeur - min) * scale)
// Une cellule est pleine si row <= barHeight - 1 : la ligne de base (0)
// est pleine dès que barHeight >= 1, la barre du minimum reste vide.
// ============================================================================

use crate::config::ChartConfig;
use crate::error::Result;
use crate::models::HistogramPoint;
use crate::ui::canvas::{centered, right_width, y_label, DisplayWindow, ValueScale, Y_AXIS_BAR};
use crate::ui::TextChart;

const GLYPH_BAR: char = '█';

/// Dessine l'histogramme vertical des points annuels
pub fn render_histogram(points: &[HistogramPoint], config: &ChartConfig) -> Result<TextChart> {
    config.validate()?;
    let window = DisplayWindow::new(points.len(), config.max_display);
    let visible = &points[..window.shown];

    let scale = ValueScale::from_values(visible.iter().map(|p| p.value), config.height)?;
    let bar_heights: Vec<i64> = visible.iter().map(|p| scale.floor_level(p.value)).collect();

    let width = config.histogram_column_width;
    let filled = centered(GLYPH_BAR, width);
    let empty = " ".repeat(width);

    let mut lines = Vec::with_capacity(config.height + 2);
    for row in (0..=config.height).rev() {
        // Label calculé par la plage (et non par l'échelle) : l'arrondi
        // à une décimale peut différer sur certaines lignes
        let mut line = format!(
            "{} {} ",
            y_label(scale.label_by_range(row), config.label_width),
            Y_AXIS_BAR
        );
        for bar_height in &bar_heights {
            if (row as i64) <= bar_height - 1 {
                line.push_str(&filled);
            } else {
                line.push_str(&empty);
            }
        }
        lines.push(line);
    }

    // Axe X : années alignées à droite dans chaque colonne
    let mut x_axis = " ".repeat(config.label_width + 3);
    for point in visible {
        x_axis.push_str(&right_width(&point.year.to_string(), width));
    }
    lines.push(x_axis);

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
    fn test_render_histogram_bars() {
        let points = vec![
            HistogramPoint::new(2000, 0.0),
            HistogramPoint::new(2001, 4.0),
            HistogramPoint::new(2002, 2.0),
        ];
        let chart = render_histogram(&points, &config(4)).unwrap();

        // 5 lignes (4 → 0) + axe X
        assert_eq!(chart.lines.len(), 6);
        let bar = "  █  ";
        let gap = "     ";
        assert_eq!(chart.lines[0], format!("   4.0 ┃ {}{}{}", gap, gap, gap));
        assert_eq!(chart.lines[1], format!("   3.0 ┃ {}{}{}", gap, bar, gap));
        assert_eq!(chart.lines[3], format!("   1.0 ┃ {}{}{}", gap, bar, bar));
        assert_eq!(chart.lines[4], format!("   0.0 ┃ {}{}{}", gap, bar, bar));
        assert_eq!(chart.lines[5], format!("{} 2000 2001 2002", " ".repeat(9)));
    }

    #[test]
    fn test_render_histogram_flat() {
        let points = vec![HistogramPoint::new(2000, 3.0), HistogramPoint::new(2001, 3.0)];
        let err = render_histogram(&points, &config(20)).unwrap_err();
        assert!(matches!(err, WeatherError::DegenerateRange { .. }));
    }

    #[test]
    fn test_render_histogram_under_count() {
        let points: Vec<HistogramPoint> = (0..10)
            .map(|i| HistogramPoint::new(2000 + i, i as f64))
            .collect();
        let chart = render_histogram(&points, &config(20)).unwrap();

        assert_eq!(chart.window.shown, 10);
        assert!(chart.window.notice("GB").is_some());
    }
}
