//! Tests de bout en bout : fichier CSV → App::execute → lignes rendues

use std::io::Write;

use lazyweather::app::{App, Command, Outcome};
use lazyweather::config::ChartConfig;
use lazyweather::models::{Candle, HistogramPoint, StatMode};
use lazyweather::source::read_table;
use lazyweather::WeatherError;
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn app_from(content: &str) -> App {
    let file = write_csv(content);
    let table = read_table(file.path()).unwrap();
    App::new(table, ChartConfig::plain())
}

#[test]
fn test_candles_from_file() {
    let app = app_from("date,GB_temperature\n2000,10\n2000,20\n2001,15\n");

    let outcome = app
        .execute(&Command::ListCandles { code: "GB".into() }, None)
        .unwrap();
    let series = outcome.candles().unwrap();

    assert_eq!(series.candles[0], Candle::new("2000", 15.0, 20.0, 10.0, 15.0));
    assert_eq!(series.candles[1], Candle::new("2001", 15.0, 15.0, 15.0, 15.0));
}

#[test]
fn test_list_then_plot_reuses_series() {
    let app = app_from(
        "utc_timestamp,GB_temperature\n\
         1980-01-01T00:00:00Z,1.5\n\
         1980-07-01T00:00:00Z,18.0\n\
         1981-01-01T00:00:00Z,2.0\n\
         1981-07-01T00:00:00Z,21.0\n\
         1982-01-01T00:00:00Z,0.5\n",
    );

    let listed = app
        .execute(&Command::ListCandles { code: "GB".into() }, None)
        .unwrap();
    let last = listed.candles().cloned();

    let plotted = app
        .execute(&Command::PlotCandles { code: "GB".into() }, last.as_ref())
        .unwrap();
    match &plotted {
        Outcome::CandleChart { reused, chart, .. } => {
            assert!(*reused);
            // height + 1 lignes de grille + l'axe X
            assert_eq!(chart.lines.len(), 22);
            assert!(chart.lines.last().unwrap().contains("1980 1981 1982"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    // Moins de 40 années : avertissement explicite
    let lines = plotted.lines();
    assert!(lines.last().unwrap().contains("seulement 3"));
}

#[test]
fn test_histogram_average_from_file() {
    let app = app_from("date,GB_temperature\n2000,10\n2000,20\n2001,5\n");

    let outcome = app
        .execute(
            &Command::Histogram {
                code: "GB".into(),
                mode: StatMode::Average,
            },
            None,
        )
        .unwrap();

    match outcome {
        Outcome::Histogram { points, .. } => {
            assert_eq!(
                points,
                vec![HistogramPoint::new(2000, 15.0), HistogramPoint::new(2001, 5.0)]
            );
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_forecast_from_file() {
    let app = app_from("date,GB_temperature\n2000,10\n2001,12\n2002,14\n");

    let outcome = app
        .execute(
            &Command::Forecast {
                code: "GB".into(),
                horizon: 1,
            },
            None,
        )
        .unwrap();

    match &outcome {
        Outcome::Forecast {
            model, predicted, ..
        } => {
            assert!((model.slope - 2.0).abs() < 1e-9);
            assert!((model.intercept + 3990.0).abs() < 1e-6);
            assert_eq!(predicted.len(), 1);
            assert_eq!(predicted[0].year, 2003);
            assert!((predicted[0].value - 16.0).abs() < 1e-6);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(outcome.lines().contains(&"2003\t16.000".to_string()));
}

#[test]
fn test_errors_do_not_stop_later_commands() {
    let app = app_from("date,GB_temperature,FR_temperature\n2000,10,3\n2001,11,n/a\n");

    let err = app
        .execute(&Command::ListCandles { code: "XX".into() }, None)
        .unwrap_err();
    assert!(matches!(err, WeatherError::ColumnNotFound { .. }));

    // Une seule année valide pour FR : régression impossible
    let err = app
        .execute(
            &Command::Forecast {
                code: "FR".into(),
                horizon: 3,
            },
            None,
        )
        .unwrap_err();
    assert!(matches!(err, WeatherError::InsufficientData { found: 1 }));

    // La commande suivante fonctionne normalement
    assert!(app
        .execute(&Command::ListCandles { code: "GB".into() }, None)
        .is_ok());
}

#[test]
fn test_display_cap_never_pads() {
    let mut csv = String::from("date,GB_temperature\n");
    for year in 2000..2010 {
        csv.push_str(&format!("{},{}\n", year, year - 1990));
    }
    let app = app_from(&csv);

    let outcome = app
        .execute(&Command::PlotCandles { code: "GB".into() }, None)
        .unwrap();
    match outcome {
        Outcome::CandleChart { chart, .. } => {
            assert_eq!(chart.window.shown, 10);
            assert_eq!(chart.window.requested, 40);
            let notice = chart.window.notice("GB").unwrap();
            assert!(notice.contains("10"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}
