// ============================================================================
// Candlestick Chart - Rendu texte ligne par ligne
// ============================================================================
// Dessine les chandelles annuelles sur une grille de caractères fixe
//
// ALGORITHME :
// - Rendu vertical : ligne par ligne de haut en bas (height → 0)
// - Chaque chandelle devient 4 niveaux entiers (high, low, open, close)
//   via floor((v - min) * scale)
// - Chaque cellule tombe dans exactement une zone : vide, pointe de mèche,
//   corps, tige de mèche
//
// CARACTÈRES :
//   ^  Pointe haute           v  Pointe basse
//   █  Corps haussier         ▒  Corps baissier
//   │  Tige de mèche
// ============================================================================

use crossterm::style::Color;

use crate::config::ChartConfig;
use crate::error::Result;
use crate::models::Candle;
use crate::ui::canvas::{centered, fixed_width, paint, y_label, DisplayWindow, ValueScale, Y_AXIS_BAR};
use crate::ui::TextChart;

// ============================================================================
// Constantes
// ============================================================================

const GLYPH_VOID: char = ' ';
const GLYPH_WICK_TOP: char = '^';
const GLYPH_WICK_BOTTOM: char = 'v';
const GLYPH_BODY_BULLISH: char = '█';
const GLYPH_BODY_BEARISH: char = '▒';
const GLYPH_WICK: char = '│';

/// Couleurs pour chandeliers haussiers et baissiers
const BULLISH_COLOR: Color = Color::Green;
const BEARISH_COLOR: Color = Color::Red;

// ============================================================================
// Classification des cellules
// ============================================================================

/// État d'une cellule de la grille
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleCell {
    /// Hors de [low, high], ou trou dû aux arrondis
    Void,
    /// Ligne du plus haut
    WickTop,
    /// Ligne du plus bas
    WickBottom,
    /// Entre open et close (inclus)
    Body { bullish: bool },
    /// Entre une pointe et le corps
    Wick,
}

impl CandleCell {
    fn glyph(&self) -> char {
        match self {
            CandleCell::Void => GLYPH_VOID,
            CandleCell::WickTop => GLYPH_WICK_TOP,
            CandleCell::WickBottom => GLYPH_WICK_BOTTOM,
            CandleCell::Body { bullish: true } => GLYPH_BODY_BULLISH,
            CandleCell::Body { bullish: false } => GLYPH_BODY_BEARISH,
            CandleCell::Wick => GLYPH_WICK,
        }
    }
}

/// Niveaux entiers d'une chandelle sur la grille
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandleLevels {
    pub high: i64,
    pub low: i64,
    pub box_top: i64,
    pub box_bottom: i64,
    pub bullish: bool,
}

impl CandleLevels {
    pub fn new(candle: &Candle, scale: &ValueScale) -> Self {
        let open = scale.floor_level(candle.open);
        let close = scale.floor_level(candle.close);
        Self {
            high: scale.floor_level(candle.high),
            low: scale.floor_level(candle.low),
            box_top: open.max(close),
            box_bottom: open.min(close),
            bullish: candle.is_bullish(),
        }
    }

    /// Classe la cellule de la ligne `row`
    ///
    /// L'ordre des tests compte : les pointes priment sur le corps.
    pub fn classify(&self, row: i64) -> CandleCell {
        if row > self.high || row < self.low {
            return CandleCell::Void;
        }

        let in_body = row <= self.box_top && row >= self.box_bottom;
        let in_wick = (row <= self.high && row >= self.box_top)
            || (row <= self.box_bottom && row >= self.low);

        if row == self.high {
            CandleCell::WickTop
        } else if row == self.low {
            CandleCell::WickBottom
        } else if in_body {
            CandleCell::Body {
                bullish: self.bullish,
            }
        } else if in_wick {
            CandleCell::Wick
        } else {
            CandleCell::Void
        }
    }
}

// ============================================================================
// Structure principale
// ============================================================================

/// Renderer de chandeliers en mode texte
pub struct CandlestickRenderer<'a> {
    candles: &'a [Candle],
    config: &'a ChartConfig,
}

impl<'a> CandlestickRenderer<'a> {
    pub fn new(candles: &'a [Candle], config: &'a ChartConfig) -> Self {
        Self { candles, config }
    }

    /// Sélectionne les chandeliers affichés (les N premiers)
    fn visible_candles(&self) -> (&'a [Candle], DisplayWindow) {
        let window = DisplayWindow::new(self.candles.len(), self.config.max_display);
        (&self.candles[..window.shown], window)
    }

    /// Rend une ligne de l'axe Y avec la valeur
    fn render_y_axis(&self, scale: &ValueScale, row: usize) -> String {
        format!(
            "{} {} ",
            y_label(scale.label_by_scale(row), self.config.label_width),
            Y_AXIS_BAR
        )
    }

    /// Génère toutes les lignes du graphique (grille + axe X)
    ///
    /// Le min et le max sont pris sur les chandeliers affichés seulement.
    pub fn render_lines(&self) -> Result<TextChart> {
        self.config.validate()?;
        let (visible, window) = self.visible_candles();
        let scale = ValueScale::from_values(
            visible.iter().flat_map(|c| [c.low, c.high]),
            self.config.height,
        )?;

        let levels: Vec<CandleLevels> = visible.iter().map(|c| CandleLevels::new(c, &scale)).collect();
        let width = self.config.candle_column_width;

        let mut lines = Vec::with_capacity(self.config.height + 2);

        // Parcourt de haut en bas (reversed)
        for row in (0..=self.config.height).rev() {
            let mut line = self.render_y_axis(&scale, row);
            for level in &levels {
                let cell = level.classify(row as i64);
                let text = centered(cell.glyph(), width);
                line.push_str(&match cell {
                    CandleCell::Body { bullish } => {
                        let color = if bullish { BULLISH_COLOR } else { BEARISH_COLOR };
                        paint(text, color, self.config.color)
                    }
                    _ => text,
                });
            }
            lines.push(line);
        }

        lines.push(self.render_x_axis(visible));

        Ok(TextChart { lines, window })
    }

    /// Ligne des années, alignée sur les colonnes de la grille
    fn render_x_axis(&self, visible: &[Candle]) -> String {
        let mut line = " ".repeat(self.config.label_width + 3);
        for candle in visible {
            line.push_str(&fixed_width(candle.year_label(), self.config.candle_column_width));
        }
        line
    }
}

/// Dessine un graphique en chandeliers
pub fn render_candlestick_chart(candles: &[Candle], config: &ChartConfig) -> Result<TextChart> {
    CandlestickRenderer::new(candles, config).render_lines()
}

// ============================================================================
// Tests unitaires
// ============================================================================
