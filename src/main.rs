// ============================================================================
// LazyWeather - Menu interactif
// ============================================================================
// Charge le fichier météo une fois, puis boucle sur le menu :
// lecture d'une option → Command → App::execute → affichage des lignes
//
// CONCEPTS RUST CLÉS :
// 1. clap : arguments de la ligne de commande (fichier, configuration)
// 2. anyhow : erreurs de démarrage avec contexte
// 3. tracing : logs vers fichier (stdout est réservé au menu)
// ============================================================================

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info, warn};

use lazyweather::app::{App, Command};
use lazyweather::config::ChartConfig;
use lazyweather::models::CandleSeries;
use lazyweather::source::read_table;
use lazyweather::ui::events::{
    parse_horizon, parse_menu_event, parse_region_code, parse_stat_mode, MenuEvent,
};
use lazyweather::ui::help::MENU_LINES;
use lazyweather::WeatherError;

// ============================================================================
// Arguments
// ============================================================================

/// Analyse de données météo : chandelles, histogrammes et prévisions en mode texte
#[derive(Parser, Debug)]
#[command(name = "lazyweather", version)]
struct Args {
    /// Fichier CSV (en-tête + colonnes "<CODE>_temperature")
    #[arg(short, long, default_value = "weather_data.csv")]
    file: PathBuf,

    /// Fichier de configuration JSON des graphiques
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hauteur des graphiques (lignes)
    #[arg(long)]
    height: Option<usize>,

    /// Nombre maximum d'années affichées
    #[arg(long)]
    max_display: Option<usize>,

    /// Désactive les couleurs ANSI
    #[arg(long)]
    no_color: bool,
}

impl Args {
    /// Configuration finale : fichier (ou défauts) puis surcharges CLI
    fn chart_config(&self) -> Result<ChartConfig> {
        let mut config = match &self.config {
            Some(path) => ChartConfig::load(path)
                .with_context(|| format!("Échec du chargement de {}", path.display()))?,
            None => ChartConfig::default(),
        };

        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(max_display) = self.max_display {
            config.max_display = max_display;
        }
        if self.no_color {
            config.color = false;
        }
        config.validate().context("Configuration des graphiques invalide")?;
        Ok(config)
    }
}

// ============================================================================
// Initialisation du logging
// ============================================================================
// CONCEPT : Logging dans une app interactive
// - stdout affiche le menu et les graphiques
// - On log vers un fichier à la place
// - Rotation quotidienne automatique des logs
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// Les logs sont écrits dans :
/// - Linux : ~/.local/share/lazyweather/logs/lazyweather.log
/// - Sinon, ./logs/lazyweather.log
///
/// # Utilisation
/// ```bash
/// RUST_LOG=lazyweather=trace cargo run -- --file weather_data.csv
/// ```
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = dirs::data_local_dir()
        .map(|dir| dir.join("lazyweather").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"));

    // Crée le répertoire s'il n'existe pas
    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "lazyweather.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lazyweather=debug,info".into()),
        )
        .try_init()
        .context("Échec de l'initialisation du subscriber")?;

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging().unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    info!(file = %args.file.display(), "LazyWeather starting up");
    let config = args.chart_config()?;

    println!("📊 Chargement de {}...", args.file.display());
    let table = read_table(&args.file)
        .with_context(|| format!("Impossible de lire {}", args.file.display()))?;
    println!("✅ {} lignes chargées\n", table.len());

    let app = App::new(table, config);

    let stdin = io::stdin();
    let result = run(&app, &mut stdin.lock());

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }
    result
}

// ============================================================================
// Boucle du menu
// ============================================================================

/// Exécute la boucle principale jusqu'à "0" ou fin de l'entrée
///
/// CONCEPT : Résultat explicite entre commandes
/// - `last` garde la dernière série de chandelles calculée
/// - Elle est passée en argument à App::execute, jamais stockée ailleurs
fn run(app: &App, input: &mut impl BufRead) -> Result<()> {
    let mut last: Option<CandleSeries> = None;

    loop {
        for line in MENU_LINES {
            println!("{}", line);
        }

        let Some(line) = prompt(input, "Option (0 pour quitter) : ")? else {
            break;
        };

        let Some(event) = parse_menu_event(&line) else {
            println!("Choix invalide. Entrez un numéro d'option.\n");
            continue;
        };
        debug!(?event, "Menu option selected");

        let command = match read_command(event, input)? {
            MenuStep::Run(command) => command,
            MenuStep::Skip => continue,
            MenuStep::Exit => {
                println!("Fermeture de l'application.");
                break;
            }
        };

        match app.execute(&command, last.as_ref()) {
            Ok(outcome) => {
                for line in outcome.lines() {
                    println!("{}", line);
                }
                if let Some(series) = outcome.candles() {
                    last = Some(series.clone());
                }
            }
            Err(e) => report_error(&e),
        }
        println!();
    }

    Ok(())
}

/// Étape suivante après le choix d'une option
enum MenuStep {
    Run(Command),
    Skip,
    Exit,
}

/// Complète la commande avec les saisies nécessaires (code, mode, horizon)
fn read_command(event: MenuEvent, input: &mut impl BufRead) -> Result<MenuStep> {
    let code = match event {
        MenuEvent::Exit => return Ok(MenuStep::Exit),
        MenuEvent::Help => return Ok(MenuStep::Run(Command::Help)),
        _ => {
            let raw = prompt(input, "Code pays (ex: GB) : ")?.unwrap_or_default();
            match parse_region_code(&raw) {
                Some(code) => code,
                None => {
                    println!("Erreur : le code pays ne peut pas être vide.");
                    return Ok(MenuStep::Skip);
                }
            }
        }
    };

    let command = match event {
        MenuEvent::Exit => return Ok(MenuStep::Exit),
        MenuEvent::Help => Command::Help,
        MenuEvent::ListCandles => Command::ListCandles { code },
        MenuEvent::PlotCandles => Command::PlotCandles { code },
        MenuEvent::Histogram => {
            println!("1: Température moyenne\n2: Température max\n3: Température min");
            let raw = prompt(input, ">> ")?.unwrap_or_default();
            Command::Histogram {
                code,
                mode: parse_stat_mode(&raw),
            }
        }
        MenuEvent::Forecast => {
            let raw = prompt(input, "Nombre d'années à prédire : ")?.unwrap_or_default();
            let Some(horizon) = parse_horizon(&raw) else {
                println!("Erreur : le nombre d'années doit être un entier positif.");
                return Ok(MenuStep::Skip);
            };
            Command::Forecast { code, horizon }
        }
    };
    Ok(MenuStep::Run(command))
}

/// Affiche un message et lit une ligne (None en fin d'entrée)
fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Affiche une erreur de commande ; la boucle continue
fn report_error(error: &WeatherError) {
    warn!(error = %error, "Command failed");
    println!("Erreur : {}", error);

    if let WeatherError::ColumnNotFound { available, .. } = error {
        println!("Codes pays disponibles :");
        for code in available {
            println!("- {}", code);
        }
    }
}
