// ============================================================================
// Module : source
// ============================================================================
// Chargement du jeu de données (lecture unique au démarrage)
// ============================================================================

pub mod csv_file; // Lecteur de fichiers délimités

// Re-export de la fonction principale
pub use csv_file::read_table;
