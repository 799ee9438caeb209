// ============================================================================
// Configuration : ChartConfig
// ============================================================================
// Dimensions des graphiques texte et plafond d'affichage
//
// CONCEPT RUST : #[serde(default = "...")]
// - Chaque champ absent du fichier JSON prend sa valeur par défaut
// - Un fichier partiel ({"height": 30}) reste valide
// ============================================================================

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, WeatherError};

/// Hauteur minimale : le min et le max doivent tomber sur deux lignes distinctes
pub const MIN_HEIGHT: usize = 2;

/// Paramètres de rendu des graphiques
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Hauteur du canevas en lignes (sans compter l'axe X)
    #[serde(default = "default_height")]
    pub height: usize,

    /// Largeur d'une colonne de chandelier
    #[serde(default = "default_wide_column")]
    pub candle_column_width: usize,

    /// Largeur d'une colonne d'histogramme
    #[serde(default = "default_wide_column")]
    pub histogram_column_width: usize,

    /// Largeur d'une colonne du nuage de points (régression)
    #[serde(default = "default_scatter_column")]
    pub scatter_column_width: usize,

    /// Largeur des labels de l'axe Y
    #[serde(default = "default_label_width")]
    pub label_width: usize,

    /// Nombre maximum d'années affichées (chandeliers, histogramme, liste)
    #[serde(default = "default_max_display")]
    pub max_display: usize,

    /// Active les couleurs ANSI
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_height() -> usize {
    20
}

fn default_wide_column() -> usize {
    5
}

fn default_scatter_column() -> usize {
    3
}

fn default_label_width() -> usize {
    6
}

fn default_max_display() -> usize {
    40
}

fn default_true() -> bool {
    true
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            candle_column_width: default_wide_column(),
            histogram_column_width: default_wide_column(),
            scatter_column_width: default_scatter_column(),
            label_width: default_label_width(),
            max_display: default_max_display(),
            color: default_true(),
        }
    }
}

impl ChartConfig {
    /// Charge la configuration depuis un fichier JSON
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading chart configuration");

        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse la configuration depuis une chaîne JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Vérifie les dimensions (à rappeler après toute surcharge)
    pub fn validate(&self) -> Result<()> {
        if self.height < MIN_HEIGHT {
            return Err(WeatherError::InvalidHeight {
                height: self.height,
            });
        }
        Ok(())
    }

    /// Variante sans couleurs (sortie stable pour les tests et les pipes)
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
