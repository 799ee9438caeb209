// ============================================================================
// Canvas - Mise à l'échelle commune des graphiques texte
// ============================================================================
// Tous les graphiques (chandeliers, histogramme, nuage de points) partagent :
// - la conversion valeur → numéro de ligne
// - les labels de l'axe Y (1 décimale, alignés à droite)
// - les colonnes de largeur fixe pour l'axe X
// - la politique de plafond d'affichage (DisplayWindow)
// ============================================================================

use crossterm::style::{Color, Stylize};

use crate::error::{Result, WeatherError};

/// Séparateur entre l'axe Y et la grille
pub const Y_AXIS_BAR: &str = "┃";

// ============================================================================
// ValueScale
// ============================================================================

/// Échelle verticale : valeur ↔ ligne du canevas
///
/// CONCEPT : Single source of truth
/// - Les cellules et les labels de l'axe Y utilisent la même échelle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    /// Valeur minimale affichée (ligne 0)
    pub min: f64,
    /// Valeur maximale affichée
    pub max: f64,
    /// Lignes par unité de valeur
    pub scale: f64,
    /// Nombre de pas entre min et max (ligne du haut)
    pub steps: usize,
}

impl ValueScale {
    /// Calcule l'échelle depuis les valeurs affichées
    ///
    /// Échoue avec EmptyInput (aucune valeur) ou DegenerateRange
    /// (série plate, division impossible).
    pub fn from_values(values: impl IntoIterator<Item = f64>, steps: usize) -> Result<Self> {
        let (min, max, seen) = values.into_iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, false),
            |(min, max, _), v| (min.min(v), max.max(v), true),
        );

        if !seen {
            return Err(WeatherError::EmptyInput);
        }

        let range = max - min;
        if range.is_nan() || range <= 0.0 {
            return Err(WeatherError::DegenerateRange { value: min });
        }

        Ok(Self {
            min,
            max,
            scale: steps as f64 / range,
            steps,
        })
    }

    /// Écart entre max et min
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Ligne par troncature vers le bas : floor((v - min) * scale)
    pub fn floor_level(&self, value: f64) -> i64 {
        ((value - self.min) * self.scale).floor() as i64
    }

    /// Ligne par arrondi, bornée à [0, steps]
    pub fn round_level(&self, value: f64) -> usize {
        let level = ((value - self.min) * self.scale).round();
        level.clamp(0.0, self.steps as f64) as usize
    }

    /// Label d'une ligne : min + row / scale
    pub fn label_by_scale(&self, row: usize) -> f64 {
        self.min + row as f64 / self.scale
    }

    /// Label d'une ligne : min + range * row / steps
    pub fn label_by_range(&self, row: usize) -> f64 {
        self.min + self.range() * row as f64 / self.steps as f64
    }
}

// ============================================================================
// DisplayWindow
// ============================================================================

/// Résultat de la politique de plafond d'affichage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindow {
    /// Éléments réellement affichés
    pub shown: usize,
    /// Éléments disponibles
    pub total: usize,
    /// Plafond demandé
    pub requested: usize,
}

impl DisplayWindow {
    /// Tronque `total` éléments au plafond `requested`, sans jamais compléter
    pub fn new(total: usize, requested: usize) -> Self {
        Self {
            shown: total.min(requested),
            total,
            requested,
        }
    }

    /// Vrai si des éléments ont été coupés
    pub fn is_truncated(&self) -> bool {
        self.shown < self.total
    }

    /// Vrai si moins d'éléments que demandé sont disponibles
    pub fn is_under_count(&self) -> bool {
        self.shown < self.requested
    }

    /// Message à afficher sous le graphique, s'il y a lieu
    pub fn notice(&self, code: &str) -> Option<String> {
        if self.is_under_count() {
            Some(format!(
                "Attention : seulement {} années de données disponibles pour {} ({} demandées).",
                self.shown, code, self.requested
            ))
        } else if self.is_truncated() {
            Some(format!(
                "{} années affichées sur {} disponibles pour {}.",
                self.shown, self.total, code
            ))
        } else {
            None
        }
    }
}

// ============================================================================
// Helpers de formatage
// ============================================================================

/// Label de l'axe Y, 1 décimale, aligné à droite
pub fn y_label(value: f64, width: usize) -> String {
    format!("{:>width$.1}", value, width = width)
}

/// Texte aligné à gauche sur une largeur fixe (complété ou tronqué)
pub fn fixed_width(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

/// Texte aligné à droite sur une largeur fixe (complété ou tronqué)
pub fn right_width(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:>width$}", truncated, width = width)
}

/// Glyphe centré dans une colonne ("  █  " pour une largeur de 5)
pub fn centered(glyph: char, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let left = (width - 1) / 2;
    let right = width - 1 - left;
    format!("{}{}{}", " ".repeat(left), glyph, " ".repeat(right))
}

/// Colorise une cellule si les couleurs sont actives
pub fn paint(cell: String, color: Color, enabled: bool) -> String {
    if enabled {
        cell.with(color).to_string()
    } else {
        cell
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_from_values() {
        let scale = ValueScale::from_values([10.0, 20.0, 15.0], 20).unwrap();
        assert_eq!(scale.min, 10.0);
        assert_eq!(scale.max, 20.0);
        assert_eq!(scale.scale, 2.0);
        assert_eq!(scale.floor_level(20.0), 20);
        assert_eq!(scale.floor_level(15.2), 10);
        assert_eq!(scale.label_by_scale(20), 20.0);
        assert_eq!(scale.label_by_range(10), 15.0);
    }

    #[test]
    fn test_scale_empty_input() {
        let err = ValueScale::from_values(Vec::<f64>::new(), 20).unwrap_err();
        assert!(matches!(err, WeatherError::EmptyInput));
    }

    #[test]
    fn test_scale_flat_series() {
        // Deux points identiques : pas de division par zéro
        let err = ValueScale::from_values([7.5, 7.5], 20).unwrap_err();
        assert!(matches!(err, WeatherError::DegenerateRange { .. }));
    }

    #[test]
    fn test_round_level_clamped() {
        let scale = ValueScale::from_values([0.0, 19.0], 19).unwrap();
        assert_eq!(scale.round_level(0.4), 0);
        assert_eq!(scale.round_level(0.6), 1);
        assert_eq!(scale.round_level(19.0), 19);
        assert_eq!(scale.round_level(-5.0), 0);
        assert_eq!(scale.round_level(50.0), 19);
    }

    #[test]
    fn test_display_window_under_count() {
        let window = DisplayWindow::new(10, 40);
        assert_eq!(window.shown, 10);
        assert!(window.is_under_count());
        assert!(!window.is_truncated());

        let notice = window.notice("GB").unwrap();
        assert!(notice.contains("seulement 10"));
    }

    #[test]
    fn test_display_window_truncated() {
        let window = DisplayWindow::new(55, 40);
        assert_eq!(window.shown, 40);
        assert!(window.is_truncated());
        assert_eq!(
            window.notice("GB").unwrap(),
            "40 années affichées sur 55 disponibles pour GB."
        );
        assert!(DisplayWindow::new(40, 40).notice("GB").is_none());
    }

    #[test]
    fn test_formatting_helpers() {
        assert_eq!(y_label(12.345, 6), "  12.3");
        assert_eq!(fixed_width("2000", 5), "2000 ");
        assert_eq!(fixed_width("200000", 5), "20000");
        assert_eq!(right_width("2000", 5), " 2000");
        assert_eq!(centered('^', 5), "  ^  ");
        assert_eq!(centered('*', 1), "*");
        assert_eq!(paint("x".to_string(), Color::Green, false), "x");
    }
}
