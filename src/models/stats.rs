// ============================================================================
// Statistiques annuelles : YearStat, StatMode, HistogramPoint
// ============================================================================

use serde::{Deserialize, Serialize};

/// Accumulateur annuel : somme, nombre, extrêmes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearStat {
    pub sum: f64,
    pub count: u32,
    pub high: f64,
    pub low: f64,
}

impl Default for YearStat {
    fn default() -> Self {
        Self {
            sum: 0.0,
            count: 0,
            high: f64::NEG_INFINITY,
            low: f64::INFINITY,
        }
    }
}

impl YearStat {
    /// Ajoute une mesure
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
        self.high = self.high.max(value);
        self.low = self.low.min(value);
    }

    /// Moyenne de l'année (None si aucune mesure)
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Mode de réduction d'une année vers une valeur unique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatMode {
    /// Moyenne arithmétique
    #[default]
    Average,
    /// Mesure maximale
    Max,
    /// Mesure minimale
    Min,
}

impl StatMode {
    /// Sélecteur numérique du menu (1 = moyenne, 2 = max, 3 = min)
    pub fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            1 => Some(StatMode::Average),
            2 => Some(StatMode::Max),
            3 => Some(StatMode::Min),
            _ => None,
        }
    }

    /// Label pour l'affichage
    pub fn label(&self) -> &'static str {
        match self {
            StatMode::Average => "Average",
            StatMode::Max => "Max",
            StatMode::Min => "Min",
        }
    }

    /// Réduit une liste de mesures (None si la liste est vide)
    pub fn reduce(&self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        match self {
            StatMode::Average => Some(values.iter().sum::<f64>() / values.len() as f64),
            StatMode::Max => values.iter().copied().reduce(f64::max),
            StatMode::Min => values.iter().copied().reduce(f64::min),
        }
    }
}

/// Une barre d'histogramme : (année, valeur réduite)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramPoint {
    pub year: i32,
    pub value: f64,
}

impl HistogramPoint {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}
