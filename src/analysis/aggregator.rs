// ============================================================================
// Aggregator : regroupement des lignes par année
// ============================================================================
// Pour une colonne donnée, calcule somme / nombre / plus haut / plus bas
// de chaque année.
//
// RÈGLES DE FILTRAGE (silencieuses, jamais fatales) :
// - ligne trop courte pour contenir la colonne → MalformedRow
// - 4 premiers caractères de l'horodatage non numériques → BadTimestamp
// - cellule non numérique (ou NaN / infinie) → BadValue
// ============================================================================

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::models::{Table, YearStat};

/// Raison pour laquelle une ligne est ignorée
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSkip {
    /// Ligne trop courte pour la colonne demandée
    MalformedRow,
    /// Horodatage trop court ou année illisible
    BadTimestamp,
    /// Valeur non numérique
    BadValue,
}

/// Compteur des lignes ignorées, par raison (pour les logs)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipTally {
    pub malformed: usize,
    pub bad_timestamp: usize,
    pub bad_value: usize,
}

impl SkipTally {
    pub fn record(&mut self, skip: RowSkip) {
        match skip {
            RowSkip::MalformedRow => self.malformed += 1,
            RowSkip::BadTimestamp => self.bad_timestamp += 1,
            RowSkip::BadValue => self.bad_value += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.malformed + self.bad_timestamp + self.bad_value
    }
}

/// Extrait l'année d'un horodatage (4 premiers caractères)
pub fn parse_year(timestamp: &str) -> Option<i32> {
    timestamp.get(..4)?.parse().ok()
}

/// Extrait (année, valeur) d'une ligne pour la colonne `index`
pub fn parse_reading(row: &[String], index: usize) -> std::result::Result<(i32, f64), RowSkip> {
    if row.len() <= index {
        return Err(RowSkip::MalformedRow);
    }

    let year = row
        .first()
        .and_then(|ts| parse_year(ts))
        .ok_or(RowSkip::BadTimestamp)?;

    let value: f64 = row[index]
        .trim()
        .parse()
        .map_err(|_| RowSkip::BadValue)?;
    if !value.is_finite() {
        return Err(RowSkip::BadValue);
    }

    Ok((year, value))
}

/// Parcourt les lignes valides d'une colonne
///
/// CONCEPT RUST : Closure FnMut
/// - `sink` reçoit chaque lecture valide
/// - Le parcours et le filtrage sont partagés entre Aggregator et HistogramBinner
pub(crate) fn for_each_reading(
    table: &Table,
    index: usize,
    mut sink: impl FnMut(i32, f64),
) -> SkipTally {
    let mut tally = SkipTally::default();
    for row in &table.rows {
        match parse_reading(row, index) {
            Ok((year, value)) => sink(year, value),
            Err(skip) => tally.record(skip),
        }
    }
    tally
}

/// Regroupe les mesures d'une colonne par année
///
/// Aucun ordre n'est garanti : c'est l'appelant qui trie.
#[instrument(skip(table), fields(rows = table.len()))]
pub fn aggregate_by_year(table: &Table, code: &str) -> Result<HashMap<i32, YearStat>> {
    let index = table.resolve_column(code)?;

    let mut stats: HashMap<i32, YearStat> = HashMap::new();
    let tally = for_each_reading(table, index, |year, value| {
        stats.entry(year).or_default().push(value);
    });

    debug!(
        column = index,
        years = stats.len(),
        skipped = tally.total(),
        malformed = tally.malformed,
        bad_timestamp = tally.bad_timestamp,
        bad_value = tally.bad_value,
        "Aggregated readings by year"
    );
    Ok(stats)
}

// ============================================================================
// Tests unitaires
// ============================================================================
