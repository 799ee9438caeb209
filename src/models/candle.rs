// ============================================================================
// Structure : Candle (Open, High, Low, Close)
// ============================================================================
// Représente les statistiques d'une année sous forme de chandelle
//
// ATTENTION : les données n'ont qu'une seule colonne de mesure par pays.
// - close : moyenne de l'année
// - high / low : extrêmes de l'année
// - open : close de la chandelle retenue précédente (continuité synthétique
//   entre moyennes annuelles, pas une "ouverture" réelle)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Une chandelle annuelle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Année au format "YYYY"
    pub date: String,

    /// Close de la chandelle précédente (ou son propre close pour la première)
    pub open: f64,

    /// Mesure la plus haute de l'année
    pub high: f64,

    /// Mesure la plus basse de l'année
    pub low: f64,

    /// Moyenne de l'année
    pub close: f64,
}

impl Candle {
    /// Constructeur : crée une nouvelle chandelle
    pub fn new(date: impl Into<String>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date: date.into(),
            open,
            high,
            low,
            close,
        }
    }

    /// Année numérique, si le label commence par 4 chiffres
    pub fn year(&self) -> Option<i32> {
        self.date.get(..4)?.parse().ok()
    }

    /// Label d'année sur 4 caractères ("----" si le label est trop court)
    pub fn year_label(&self) -> &str {
        self.date.get(..4).unwrap_or("----")
    }

    /// Chandelle haussière : la moyenne n'a pas baissé
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

/// Série de chandelles pour un code pays, triée par année croissante
///
/// CONCEPT : Résultat explicite
/// - La dernière série calculée est renvoyée à l'appelant
/// - L'appelant la repasse à la commande suivante (pas d'état global)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    /// Code pays (ex: "GB")
    pub code: String,

    /// Chandelles, sans doublon d'année
    pub candles: Vec<Candle>,
}

impl CandleSeries {
    pub fn new(code: impl Into<String>, candles: Vec<Candle>) -> Self {
        Self {
            code: code.into(),
            candles,
        }
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Points (année, moyenne) pour la régression
    ///
    /// Les chandelles dont le label n'est pas une année sont ignorées.
    pub fn yearly_means(&self) -> Vec<(i32, f64)> {
        self.candles
            .iter()
            .filter_map(|c| c.year().map(|year| (year, c.close)))
            .collect()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_bullish() {
        let candle = Candle::new("2001", 10.0, 14.0, 8.0, 12.0);
        assert!(candle.is_bullish());
    }

    #[test]
    fn test_candle_flat_is_bullish() {
        // close == open compte comme haussier
        let candle = Candle::new("2000", 15.0, 20.0, 10.0, 15.0);
        assert!(candle.is_bullish());
    }

    #[test]
    fn test_candle_bearish() {
        let candle = Candle::new("2002", 12.0, 13.0, 9.0, 10.0);
        assert!(!candle.is_bullish());
    }

    #[test]
    fn test_year_label() {
        assert_eq!(Candle::new("2003", 0.0, 0.0, 0.0, 0.0).year(), Some(2003));
        assert_eq!(Candle::new("20", 0.0, 0.0, 0.0, 0.0).year(), None);
        assert_eq!(Candle::new("20", 0.0, 0.0, 0.0, 0.0).year_label(), "----");
    }

    #[test]
    fn test_series_yearly_means() {
        let series = CandleSeries::new(
            "GB",
            vec![
                Candle::new("2000", 15.0, 20.0, 10.0, 15.0),
                Candle::new("2001", 15.0, 25.0, 5.0, 14.0),
            ],
        );
        assert_eq!(series.len(), 2);
        assert_eq!(series.yearly_means(), vec![(2000, 15.0), (2001, 14.0)]);
    }

    #[test]
    fn test_empty_series() {
        let series = CandleSeries::new("GB", vec![]);
        assert!(series.is_empty());
        assert!(series.yearly_means().is_empty());
    }
}
