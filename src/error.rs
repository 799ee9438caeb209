// ============================================================================
// Erreurs : WeatherError
// ============================================================================
// Toutes les erreurs qu'une opération peut renvoyer à l'appelant
//
// CONCEPT RUST : thiserror
// - #[derive(Error)] génère l'implémentation de std::error::Error
// - #[error("...")] définit le message affiché (Display)
// - #[from] permet la conversion automatique avec l'opérateur ?
//
// Chaque erreur est limitée à la commande demandée : la boucle du menu
// affiche le message et continue.
// ============================================================================

use thiserror::Error;

/// Erreur d'une opération d'analyse ou de rendu
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Aucune colonne "<code>_temperature" dans l'en-tête
    #[error("Code pays \"{code}\" introuvable dans l'en-tête")]
    ColumnNotFound {
        code: String,
        /// Codes disponibles, pour que l'appelant puisse les proposer
        available: Vec<String>,
    },

    /// La colonne existe mais aucune ligne valide ne survit au filtrage
    #[error("Aucune donnée disponible pour le code pays \"{code}\"")]
    NoDataForColumn { code: String },

    /// Moins de deux points pour la régression
    #[error("Pas assez de points pour la régression : {found} (minimum 2)")]
    InsufficientData { found: usize },

    /// Toutes les abscisses sont identiques (dénominateur nul)
    #[error("Dénominateur nul : régression impossible")]
    DegenerateFit,

    /// Rien à dessiner
    #[error("Aucune donnée à tracer")]
    EmptyInput,

    /// Série plate : impossible de mettre à l'échelle
    #[error("Plage de valeurs nulle ({value}) : impossible de tracer")]
    DegenerateRange { value: f64 },

    /// Horizon de prévision nul ou trop grand
    #[error(
        "Nombre d'années à prédire invalide : {horizon} (attendu entre 1 et {})",
        crate::analysis::regression::MAX_HORIZON
    )]
    InvalidHorizon { horizon: u32 },

    /// Canevas trop petit pour placer min et max sur des lignes distinctes
    #[error(
        "Hauteur de graphique invalide : {height} (minimum {})",
        crate::config::MIN_HEIGHT
    )]
    InvalidHeight { height: usize },

    /// Fichier sans ligne d'en-tête
    #[error("Le fichier ne contient aucune ligne")]
    EmptyFile,

    #[error("Erreur d'entrée/sortie : {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de lecture CSV : {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration invalide : {0}")]
    Config(#[from] serde_json::Error),
}

/// Alias de Result pour la bibliothèque
pub type Result<T> = std::result::Result<T, WeatherError>;
