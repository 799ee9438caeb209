// ============================================================================
// Liste des chandelles - vue tabulaire
// ============================================================================

use crate::models::CandleSeries;
use crate::ui::canvas::DisplayWindow;
use crate::ui::TextChart;

/// En-tête des colonnes (séparées par des tabulations)
pub const LIST_HEADER: &str = "Date\tOpen\tHigh\tLow\tClose";

/// Liste les chandelles, 3 décimales, plafonnée à `max_display` lignes
pub fn render_candle_list(series: &CandleSeries, max_display: usize) -> TextChart {
    let window = DisplayWindow::new(series.len(), max_display);

    let mut lines = Vec::with_capacity(window.shown + 2);
    lines.push(format!("Candle data : {}", series.code));
    lines.push(LIST_HEADER.to_string());

    lines.extend(series.candles[..window.shown].iter().map(|c| {
        format!(
            "{}\t{:.3}\t{:.3}\t{:.3}\t{:.3}",
            c.year_label(),
            c.open,
            c.high,
            c.low,
            c.close
        )
    }));

    TextChart { lines, window }
}
