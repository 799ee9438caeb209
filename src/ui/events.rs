// ============================================================================
// Gestion des saisies du menu
// ============================================================================
// Convertit les lignes tapées par l'utilisateur en choix typés
//
// CONCEPTS RUST :
// 1. Enums avec variants : représenter les options du menu
// 2. Option : une saisie invalide n'est pas une erreur fatale
// 3. str::trim / parse : lecture tolérante des nombres
// ============================================================================

use crate::models::StatMode;

// ============================================================================
// Enum MenuEvent
// ============================================================================

/// Option choisie dans le menu principal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// 1 : afficher l'aide
    Help,
    /// 2 : calculer et lister les chandelles
    ListCandles,
    /// 3 : tracer les chandelles
    PlotCandles,
    /// 4 : histogramme annuel
    Histogram,
    /// 5 : prévision par régression
    Forecast,
    /// 0 : quitter
    Exit,
}

impl MenuEvent {
    pub const ALL: [MenuEvent; 6] = [
        MenuEvent::Exit,
        MenuEvent::Help,
        MenuEvent::ListCandles,
        MenuEvent::PlotCandles,
        MenuEvent::Histogram,
        MenuEvent::Forecast,
    ];

    /// Numéro affiché dans le menu
    pub fn selector(&self) -> u8 {
        match self {
            MenuEvent::Exit => 0,
            MenuEvent::Help => 1,
            MenuEvent::ListCandles => 2,
            MenuEvent::PlotCandles => 3,
            MenuEvent::Histogram => 4,
            MenuEvent::Forecast => 5,
        }
    }
}

/// Lit l'option du menu ("0" à "5")
///
/// Retourne None si la saisie n'est pas un numéro d'option connu.
pub fn parse_menu_event(input: &str) -> Option<MenuEvent> {
    let selector = input.trim().parse::<u8>().ok()?;
    MenuEvent::ALL
        .into_iter()
        .find(|event| event.selector() == selector)
}

/// Lit le mode statistique (1, 2, 3), moyenne par défaut si invalide
pub fn parse_stat_mode(input: &str) -> StatMode {
    input
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(StatMode::from_selector)
        .unwrap_or_default()
}

/// Lit le nombre d'années à prédire (entier strictement positif)
pub fn parse_horizon(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|h| *h > 0)
}

/// Lit un code pays (non vide, espaces retirés)
pub fn parse_region_code(input: &str) -> Option<String> {
    let code = input.trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
