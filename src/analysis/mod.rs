// ============================================================================
// Module : analysis
// ============================================================================
// Calculs purs sur le jeu de données : aucune entrée/sortie ici
//
// Flux :
// - lignes → aggregator → candles        (graphique en chandeliers)
// - lignes → histogram                   (histogramme vertical)
// - candles → regression                 (prévision)
// ============================================================================

pub mod aggregator; // Regroupement par année (somme, nombre, extrêmes)
pub mod candles;    // Chandelles annuelles chaînées
pub mod histogram;  // Une valeur réduite par année
pub mod regression; // Moindres carrés et extrapolation

pub use aggregator::{aggregate_by_year, RowSkip};
pub use candles::{build_candles, compute_candle_series};
pub use histogram::bin_by_year;
pub use regression::{check_horizon, fit, predict_years, MAX_HORIZON};
