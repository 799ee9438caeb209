// ============================================================================
// HistogramBinner : une valeur par année
// ============================================================================
// Mêmes règles de résolution de colonne et de filtrage que l'Aggregator,
// mais on conserve toutes les mesures de l'année avant de les réduire
// (moyenne, max ou min).
// ============================================================================

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::analysis::aggregator::for_each_reading;
use crate::error::{Result, WeatherError};
use crate::models::{HistogramPoint, StatMode, Table};

/// Réduit chaque année à une valeur, par année croissante
///
/// CONCEPT RUST : BTreeMap
/// - Clés triées à l'insertion : l'itération est déjà chronologique
#[instrument(skip(table), fields(rows = table.len()))]
pub fn bin_by_year(table: &Table, code: &str, mode: StatMode) -> Result<Vec<HistogramPoint>> {
    let index = table.resolve_column(code)?;

    let mut readings: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    let tally = for_each_reading(table, index, |year, value| {
        readings.entry(year).or_default().push(value);
    });

    let points: Vec<HistogramPoint> = readings
        .iter()
        .filter_map(|(year, values)| mode.reduce(values).map(|v| HistogramPoint::new(*year, v)))
        .collect();

    debug!(years = points.len(), skipped = tally.total(), mode = mode.label(), "Binned readings by year");

    if points.is_empty() {
        return Err(WeatherError::NoDataForColumn {
            code: code.to_string(),
        });
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(
            vec!["date".into(), "GB_temperature".into()],
            vec![
                vec!["2001-01".into(), "5".into()],
                vec!["2000-01".into(), "10".into()],
                vec!["2000-02".into(), "20".into()],
                vec!["2000-03".into(), "bad".into()],
            ],
        )
    }

    #[test]
    fn test_bin_average() {
        let points = bin_by_year(&table(), "GB", StatMode::Average).unwrap();
        assert_eq!(
            points,
            vec![HistogramPoint::new(2000, 15.0), HistogramPoint::new(2001, 5.0)]
        );
    }

    #[test]
    fn test_bin_max_min() {
        let max = bin_by_year(&table(), "GB", StatMode::Max).unwrap();
        assert_eq!(max[0].value, 20.0);

        let min = bin_by_year(&table(), "GB", StatMode::Min).unwrap();
        assert_eq!(min[0].value, 10.0);
        assert_eq!(min[1].value, 5.0);
    }

    #[test]
    fn test_bin_errors_are_distinct() {
        let err = bin_by_year(&table(), "FR", StatMode::Average).unwrap_err();
        assert!(matches!(err, WeatherError::ColumnNotFound { .. }));

        let empty = Table::new(
            vec!["date".into(), "GB_temperature".into()],
            vec![vec!["2000".into(), "".into()]],
        );
        let err = bin_by_year(&empty, "GB", StatMode::Average).unwrap_err();
        assert!(matches!(err, WeatherError::NoDataForColumn { .. }));
    }
}
