// ============================================================================
// Source : fichier délimité (CSV)
// ============================================================================
// Lit le fichier de données météo en une Table
//
// - Aucune validation structurelle : chaque ligne garde sa longueur
//   (flexible), le cœur vérifie lui-même la longueur utile
// - La première ligne devient l'en-tête
// ============================================================================

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info, instrument};

use crate::error::{Result, WeatherError};
use crate::models::{Row, Table};

/// Délimiteur par défaut
pub const DEFAULT_DELIMITER: u8 = b',';

/// Lit un fichier délimité par des virgules
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let table = read_table_from(file, DEFAULT_DELIMITER)?;

    info!(
        columns = table.header.len(),
        rows = table.len(),
        "Weather data loaded"
    );
    Ok(table)
}

/// Lit une table depuis n'importe quelle source (fichier, mémoire)
pub fn read_table_from<R: Read>(reader: R, delimiter: u8) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let mut lines: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        lines.push(record.iter().map(str::to_string).collect());
    }

    debug!(lines = lines.len(), "Tokenised input");
    Table::from_lines(lines).ok_or(WeatherError::EmptyFile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_table_from_memory() {
        let data = "utc_timestamp,AT_temperature,GB_temperature\n\
                    1980-01-01T00:00:00Z,-3.6,4.1\n\
                    1980-01-01T01:00:00Z,-3.5\n";
        let table = read_table_from(data.as_bytes(), b',').unwrap();

        assert_eq!(table.header, vec!["utc_timestamp", "AT_temperature", "GB_temperature"]);
        assert_eq!(table.len(), 2);
        // Ligne courte conservée telle quelle
        assert_eq!(table.rows[1].len(), 2);
    }

    #[test]
    fn test_read_empty_input() {
        let err = read_table_from("".as_bytes(), b',').unwrap_err();
        assert!(matches!(err, WeatherError::EmptyFile));
    }

    #[test]
    fn test_read_table_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.csv");
        std::fs::write(&path, "date,GB_temperature\n2000,10\n").unwrap();

        let table = read_table(&path).unwrap();
        assert_eq!(table.rows, vec![vec!["2000".to_string(), "10".to_string()]]);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_table("/nonexistent/weather.csv").unwrap_err();
        assert!(matches!(err, WeatherError::Io(_)));
    }
}
