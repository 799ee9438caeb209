// ============================================================================
// Module : ui
// ============================================================================
// Rendu texte : chaque fonction produit des lignes, jamais d'affichage direct
// ============================================================================

pub mod canvas;           // Échelle commune, labels, plafond d'affichage
pub mod candlestick_text; // Graphique en chandeliers
pub mod histogram_text;   // Histogramme vertical
pub mod scatter_text;     // Nuage de points (régression)
pub mod candle_list;      // Liste tabulaire des chandelles
pub mod help;             // Texte d'aide et menu
pub mod events;           // Saisies du menu

use canvas::DisplayWindow;

// Re-exports pour simplifier les imports
pub use candle_list::render_candle_list;
pub use candlestick_text::render_candlestick_chart;
pub use histogram_text::render_histogram;
pub use scatter_text::{render_scatter, scatter_points};

/// Lignes rendues + nombre d'éléments affichés / disponibles
#[derive(Debug, Clone, PartialEq)]
pub struct TextChart {
    /// Lignes, de haut en bas
    pub lines: Vec<String>,
    pub window: DisplayWindow,
}
