// ============================================================================
// Module : models
// ============================================================================
// Ce module contient toutes les structures de données de l'application
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module publique (accessible depuis l'extérieur)
// - Sans "pub", le module serait privé au crate
// ============================================================================

pub mod table;    // Fichier brut : en-tête + lignes
pub mod stats;    // Accumulateurs annuels et points d'histogramme
pub mod candle;   // Chandelles annuelles
pub mod forecast; // Droite de régression et prédictions

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use lazyweather::models::candle::Candle;
// On peut faire : use lazyweather::models::Candle;
pub use candle::{Candle, CandleSeries};
pub use forecast::{PredictedPoint, RegressionModel};
pub use stats::{HistogramPoint, StatMode, YearStat};
pub use table::{Row, Table, COLUMN_SUFFIX};
