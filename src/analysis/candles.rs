// ============================================================================
// CandlestickBuilder : statistiques annuelles → chandelles
// ============================================================================
// - Années triées par ordre croissant, années sans mesure ignorées
// - close = moyenne, high / low = extrêmes de l'année
// - open = close de la chandelle RETENUE précédente (pas de l'année civile
//   précédente si celle-ci a été ignorée) ; la première chandelle a
//   open = close
//
// CONCEPT : Fold explicite
// - L'accumulateur transporte le close précédent (Option<f64>)
// - La règle de chaînage tient en une ligne et se teste isolément
// ============================================================================

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::analysis::aggregator::aggregate_by_year;
use crate::error::{Result, WeatherError};
use crate::models::{Candle, CandleSeries, Table, YearStat};

/// Open d'une chandelle à partir du close précédent
pub fn chained_open(previous_close: Option<f64>, close: f64) -> f64 {
    previous_close.unwrap_or(close)
}

/// Construit les chandelles, triées par année croissante
pub fn build_candles(stats: &HashMap<i32, YearStat>) -> Vec<Candle> {
    let mut years: Vec<(i32, &YearStat)> = stats.iter().map(|(year, stat)| (*year, stat)).collect();
    years.sort_unstable_by_key(|(year, _)| *year);

    let (candles, _) = years
        .into_iter()
        .filter_map(|(year, stat)| stat.mean().map(|mean| (year, stat, mean)))
        .fold(
            (Vec::with_capacity(stats.len()), None),
            |(mut candles, previous_close): (Vec<Candle>, Option<f64>), (year, stat, close)| {
                let open = chained_open(previous_close, close);
                candles.push(Candle::new(format!("{:04}", year), open, stat.high, stat.low, close));
                (candles, Some(close))
            },
        );

    candles
}

/// Calcule la série de chandelles d'un code pays depuis les données brutes
///
/// Échoue avec NoDataForColumn si la colonne existe mais qu'aucune année
/// ne survit au filtrage.
#[instrument(skip(table))]
pub fn compute_candle_series(table: &Table, code: &str) -> Result<CandleSeries> {
    let stats = aggregate_by_year(table, code)?;
    let candles = build_candles(&stats);

    if candles.is_empty() {
        return Err(WeatherError::NoDataForColumn {
            code: code.to_string(),
        });
    }

    debug!(candles = candles.len(), "Candle series computed");
    Ok(CandleSeries::new(code, candles))
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(values: &[f64]) -> YearStat {
        let mut stat = YearStat::default();
        for v in values {
            stat.push(*v);
        }
        stat
    }

    #[test]
    fn test_chained_open() {
        assert_eq!(chained_open(None, 12.0), 12.0);
        assert_eq!(chained_open(Some(9.0), 12.0), 9.0);
    }

    #[test]
    fn test_build_candles_sorted_and_chained() {
        let mut stats = HashMap::new();
        stats.insert(2002, stat(&[14.0]));
        stats.insert(2000, stat(&[10.0, 20.0]));
        stats.insert(2001, stat(&[15.0, 11.0]));

        let candles = build_candles(&stats);
        let years: Vec<&str> = candles.iter().map(|c| c.date.as_str()).collect();
        assert_eq!(years, vec!["2000", "2001", "2002"]);

        // Première chandelle : open = close
        assert_eq!(candles[0].open, 15.0);
        assert_eq!(candles[0].close, 15.0);
        assert_eq!(candles[0].high, 20.0);
        assert_eq!(candles[0].low, 10.0);

        // Chaînage
        assert_eq!(candles[1].open, 15.0);
        assert_eq!(candles[1].close, 13.0);
        assert_eq!(candles[2].open, 13.0);
        assert_eq!(candles[2].close, 14.0);
    }

    #[test]
    fn test_empty_year_is_skipped_and_chain_uses_retained() {
        let mut stats = HashMap::new();
        stats.insert(2000, stat(&[10.0]));
        stats.insert(2001, YearStat::default()); // aucune mesure
        stats.insert(2002, stat(&[30.0]));

        let candles = build_candles(&stats);
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1].date, "2002");
        // open vient de 2000, la dernière chandelle retenue
        assert_eq!(candles[1].open, 10.0);
    }

    #[test]
    fn test_compute_candle_series_end_to_end() {
        let table = Table::new(
            vec!["date".into(), "GB_temperature".into()],
            vec![
                vec!["2000".into(), "10".into()],
                vec!["2000".into(), "20".into()],
                vec!["2001".into(), "15".into()],
            ],
        );
        let series = compute_candle_series(&table, "GB").unwrap();

        assert_eq!(series.code, "GB");
        assert_eq!(series.candles[0], Candle::new("2000", 15.0, 20.0, 10.0, 15.0));
        assert_eq!(series.candles[1], Candle::new("2001", 15.0, 15.0, 15.0, 15.0));
    }

    #[test]
    fn test_compute_candle_series_no_data() {
        let table = Table::new(
            vec!["date".into(), "GB_temperature".into()],
            vec![vec!["2000".into(), "n/a".into()]],
        );
        let err = compute_candle_series(&table, "GB").unwrap_err();
        assert!(matches!(err, WeatherError::NoDataForColumn { .. }));
    }
}
