// ============================================================================
// Aide - texte statique du menu
// ============================================================================

/// Lignes du menu principal
pub const MENU_LINES: [&str; 7] = [
    "1: Aide",
    "2: Calculer les chandelles",
    "3: Tracer les chandelles",
    "4: Histogramme annuel des températures",
    "5: Prévoir les températures (régression linéaire)",
    "0: Quitter",
    "==============",
];

/// Texte d'aide détaillé
pub fn help_lines() -> Vec<String> {
    [
        "========================================",
        "                 Aide                   ",
        "========================================",
        "Analyse et visualisation de données météo en mode texte.",
        "",
        "Options disponibles :",
        "1: Aide - affiche ce message.",
        "2: Calculer les chandelles - Open, High, Low, Close par année pour un code pays.",
        "   - Close est la moyenne de l'année, High/Low ses extrêmes.",
        "   - Open reprend le Close de l'année précédente (continuité entre moyennes).",
        "",
        "3: Tracer les chandelles - graphique texte des chandelles annuelles.",
        "   - Réutilise la dernière série calculée si le code pays est le même.",
        "",
        "4: Histogramme annuel - barres verticales par année.",
        "   - Moyenne, maximum ou minimum des températures.",
        "",
        "5: Prévision - régression linéaire sur les moyennes annuelles.",
        "   - Les points observés (*) et prédits (+) sont distingués sur le graphique.",
        "",
        "0: Quitter.",
        "",
        "Les codes pays correspondent aux colonnes \"<CODE>_temperature\" (ex: GB).",
        "========================================",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_mentions_every_option() {
        let help = help_lines().join("\n");
        for option in ["1:", "2:", "3:", "4:", "5:", "0:"] {
            assert!(help.contains(option), "missing {}", option);
        }
    }
}
