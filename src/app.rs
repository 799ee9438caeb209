// ============================================================================
// Structure : App
// ============================================================================
// Dispatch des commandes de l'utilisateur vers le pipeline d'analyse
//
// PATTERN : Command
// - Command : une requête typée (ce que l'utilisateur veut)
// - App::execute : une fonction pure par type de requête
// - Outcome : résultat structuré + lignes prêtes à afficher
//
// Le cœur ne lit jamais l'entrée standard : c'est main.rs qui construit les
// commandes. La dernière série de chandelles calculée n'est pas un état
// global : elle est renvoyée dans l'Outcome et l'appelant la repasse en
// argument à la commande suivante.
// ============================================================================

use tracing::{debug, info, instrument};

use crate::analysis::{bin_by_year, check_horizon, compute_candle_series, fit, predict_years};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::models::{CandleSeries, HistogramPoint, PredictedPoint, RegressionModel, StatMode, Table};
use crate::ui::{
    help::help_lines, render_candle_list, render_candlestick_chart, render_histogram,
    render_scatter, scatter_points, TextChart,
};

// ============================================================================
// Enum : Command
// ============================================================================

/// Requête de l'utilisateur
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Texte d'aide
    Help,

    /// Calcule les chandelles et les liste
    ListCandles { code: String },

    /// Trace les chandelles (réutilise la dernière série si même code)
    PlotCandles { code: String },

    /// Histogramme annuel selon un mode statistique
    Histogram { code: String, mode: StatMode },

    /// Régression + prévision sur `horizon` années
    Forecast { code: String, horizon: u32 },
}

// ============================================================================
// Enum : Outcome
// ============================================================================

/// Résultat d'une commande
#[derive(Debug, Clone)]
pub enum Outcome {
    Help {
        lines: Vec<String>,
    },

    CandleList {
        series: CandleSeries,
        view: TextChart,
    },

    CandleChart {
        series: CandleSeries,
        chart: TextChart,
        /// true si la série vient de la commande précédente
        reused: bool,
    },

    Histogram {
        code: String,
        mode: StatMode,
        points: Vec<HistogramPoint>,
        chart: TextChart,
    },

    Forecast {
        series: CandleSeries,
        model: RegressionModel,
        observed: Vec<(i32, f64)>,
        predicted: Vec<PredictedPoint>,
        chart: TextChart,
    },
}

impl Outcome {
    /// Série de chandelles produite, à repasser à la commande suivante
    pub fn candles(&self) -> Option<&CandleSeries> {
        match self {
            Outcome::CandleList { series, .. }
            | Outcome::CandleChart { series, .. }
            | Outcome::Forecast { series, .. } => Some(series),
            Outcome::Help { .. } | Outcome::Histogram { .. } => None,
        }
    }

    /// Toutes les lignes à afficher (titres, graphique, avertissements)
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        match self {
            Outcome::Help { lines } => out.extend(lines.iter().cloned()),

            Outcome::CandleList { series, view } => {
                out.extend(view.lines.iter().cloned());
                out.extend(view.window.notice(&series.code));
            }

            Outcome::CandleChart { series, chart, .. } => {
                out.push(String::new());
                out.push(format!(
                    "=== Text-based Candlestick Chart {} (up to {} candles) ===",
                    series.code, chart.window.requested
                ));
                out.extend(chart.lines.iter().cloned());
                out.extend(chart.window.notice(&series.code));
            }

            Outcome::Histogram { code, mode, chart, .. } => {
                out.push(String::new());
                out.push(format!("===== Yearly {} Temp for {} =====", mode.label(), code));
                out.push(String::new());
                out.extend(chart.lines.iter().cloned());
                out.extend(chart.window.notice(code));
            }

            Outcome::Forecast {
                model,
                predicted,
                chart,
                ..
            } => {
                out.push(String::new());
                out.push("=== Linear Regression ===".to_string());
                out.push(format!("Equation: {}", model.equation()));
                out.push(String::new());
                out.push("=== Predicted Temperatures ===".to_string());
                out.push("Year\tPredicted Temperature".to_string());
                out.extend(predicted.iter().map(|p| format!("{}\t{:.3}", p.year, p.value)));
                out.push(String::new());
                out.push("=== Temperature Prediction Plot ===".to_string());
                out.push(String::new());
                out.extend(chart.lines.iter().cloned());
            }
        }
        out
    }
}

// ============================================================================
// Structure : App
// ============================================================================

/// Jeu de données (chargé une fois, immuable) + configuration de rendu
pub struct App {
    table: Table,
    config: ChartConfig,
}

impl App {
    /// Crée une App avec un jeu de données préchargé
    pub fn new(table: Table, config: ChartConfig) -> Self {
        Self { table, config }
    }

    /// Exécute une commande
    ///
    /// CONCEPT RUST : Option<&T> en paramètre
    /// - `last` emprunte la série précédente sans en prendre possession
    /// - Aucune mutation cachée : tout ce qui change est dans l'Outcome
    #[instrument(skip(self, last), fields(has_last = last.is_some()))]
    pub fn execute(&self, command: &Command, last: Option<&CandleSeries>) -> Result<Outcome> {
        let outcome = match command {
            Command::Help => Outcome::Help {
                lines: help_lines(),
            },

            Command::ListCandles { code } => {
                let series = compute_candle_series(&self.table, code)?;
                let view = render_candle_list(&series, self.config.max_display);
                Outcome::CandleList { series, view }
            }

            Command::PlotCandles { code } => {
                let (series, reused) = self.candles_for(code, last)?;
                let chart = render_candlestick_chart(&series.candles, &self.config)?;
                Outcome::CandleChart {
                    series,
                    chart,
                    reused,
                }
            }

            Command::Histogram { code, mode } => {
                let points = bin_by_year(&self.table, code, *mode)?;
                let chart = render_histogram(&points, &self.config)?;
                Outcome::Histogram {
                    code: code.clone(),
                    mode: *mode,
                    points,
                    chart,
                }
            }

            Command::Forecast { code, horizon } => {
                check_horizon(*horizon)?;

                let (series, _) = self.candles_for(code, last)?;
                let observed = series.yearly_means();
                let model = fit(&observed)?;

                // fit() garantit au moins 2 points
                let last_year = observed.last().map(|(year, _)| *year).unwrap_or_default();
                let predicted = predict_years(&model, last_year, *horizon)?;

                let points = scatter_points(&observed, &predicted);
                let chart = render_scatter(&points, &self.config)?;
                Outcome::Forecast {
                    series,
                    model,
                    observed,
                    predicted,
                    chart,
                }
            }
        };

        info!(command = ?command, "Command executed");
        Ok(outcome)
    }

    /// Série de chandelles pour un code : réutilise `last` si le code correspond
    fn candles_for(&self, code: &str, last: Option<&CandleSeries>) -> Result<(CandleSeries, bool)> {
        match last {
            Some(series) if series.code == code && !series.is_empty() => {
                debug!(code, "Reusing last computed candle series");
                Ok((series.clone(), true))
            }
            _ => Ok((compute_candle_series(&self.table, code)?, false)),
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
