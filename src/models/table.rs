// ============================================================================
// Structure : Table
// ============================================================================
// Contenu brut du fichier de données : une ligne d'en-tête + les lignes
//
// - Colonne 0 : horodatage dont les 4 premiers caractères sont l'année
// - Autres colonnes : mesures nommées "<CODE>_temperature"
// ============================================================================

use crate::error::{Result, WeatherError};

/// Suffixe des colonnes de mesure dans l'en-tête
pub const COLUMN_SUFFIX: &str = "_temperature";

/// Une ligne du fichier : champs texte ordonnés
pub type Row = Vec<String>;

/// Jeu de données chargé une fois au démarrage, immuable ensuite
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Noms des colonnes
    pub header: Vec<String>,

    /// Lignes de données (en-tête exclu)
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// Construit une table depuis des lignes brutes (la première est l'en-tête)
    ///
    /// Retourne None si aucune ligne n'est fournie.
    pub fn from_lines(mut lines: Vec<Row>) -> Option<Self> {
        if lines.is_empty() {
            return None;
        }
        let header = lines.remove(0);
        Some(Self::new(header, lines))
    }

    /// Nombre de lignes de données
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Résout un code pays vers l'index de sa colonne
    ///
    /// Correspondance exacte sur "<code>_temperature", sans repli.
    pub fn resolve_column(&self, code: &str) -> Result<usize> {
        let target = format!("{}{}", code, COLUMN_SUFFIX);
        self.header
            .iter()
            .position(|name| *name == target)
            .ok_or_else(|| WeatherError::ColumnNotFound {
                code: code.to_string(),
                available: self.available_codes(),
            })
    }

    /// Liste les codes pays présents dans l'en-tête (horodatage exclu)
    pub fn available_codes(&self) -> Vec<String> {
        self.header
            .iter()
            .skip(1)
            .filter_map(|name| name.strip_suffix(COLUMN_SUFFIX))
            .map(str::to_string)
            .collect()
    }
}
