// ============================================================================
// LazyWeather - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod error;     // Erreurs typées
pub mod config;    // Dimensions des graphiques
pub mod models;    // Structures de données
pub mod source;    // Lecture du fichier de données
pub mod analysis;  // Agrégation, chandelles, histogramme, régression
pub mod ui;        // Rendu texte
pub mod app;       // Dispatch des commandes

pub use error::{Result, WeatherError};
