mod config;
mod input;
mod render;

use config::Config;

use std::io::IsTerminal;

use calimport_core::{CalendarImporter, ConfigError, ImportConfig};
use clap::Parser;
use colored::{control::set_override, Colorize};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

const LONG_ABOUT: &str = r##"
calimport turns pasted calendar text into appointment candidates for review.

It understands Google Calendar agenda printouts (a day number, a month header,
time ranges and titles on separate lines), one-event-per-line agendas with
DD/MM/YYYY or ISO dates, and, when nothing structured is found, loose notes
that mention a date or a time.

Nothing is imported: the candidates are printed so they can be checked first.

RECOGNIZED LINES:
  12                            Day number (starts a Google Calendar day)
  Nov. 2025, Sex                Month header (Portuguese or English month)
  16:00 - 17:00                 Time range (only the start is kept)
  03/12/2025 10:00 - Sessão     Dated line with time and title
  2025-12-05                    ISO date
  Consulta Ana - 03/12/2025 às 10:00
                                Title first, then date and time

EXAMPLES:
  calimport @agenda.txt         Read a saved export
  pbpaste | calimport           Read from the clipboard (macOS)
  calimport -j @agenda.txt      Print candidates as JSON
  calimport --explain @notes    Show which rule claimed each line
  calimport --rules             List the line rules in precedence order

Documents and images (.pdf, .docx, .png, ...) are not read; open them and
paste the calendar text instead.
"##;

#[derive(Parser)]
#[command(name = "calimport")]
#[command(version)]
#[command(about = "Extract appointment candidates from pasted calendar text")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    /// Calendar text, `@path` to read a file, or `@-` for stdin.
    /// Reads piped stdin when omitted.
    input: Option<String>,

    /// Output candidates as JSON
    #[arg(long, short = 'j')]
    json: bool,

    /// List the line rules in precedence order
    #[arg(long)]
    rules: bool,

    /// Show how each line was classified instead of the candidates
    #[arg(long)]
    explain: bool,

    /// Disable colored output
    #[arg(long, short = 'C')]
    no_color: bool,

    /// Title for events without one [default: Session]
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,

    /// Start time for events without one, HH:MM [default: 09:00]
    #[arg(long, value_name = "HH:MM")]
    time: Option<String>,

    /// Session type given to every candidate [default: session]
    #[arg(long = "type", value_name = "TYPE")]
    kind: Option<String>,

    /// Date used for undated lines in free-form notes [default: today]
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<String>,

    /// Print the config file path and exit
    #[arg(long)]
    config_path: bool,

    /// Create a default config file and exit
    #[arg(long)]
    config_init: bool,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Print an error in the standard format and exit with code 1.
fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", "error".red().bold(), message);
    std::process::exit(1);
}

/// Merge CLI args over the file/env config.
fn import_config(cli: &Cli, file_config: &Config) -> Result<ImportConfig, ConfigError> {
    let (title, title_source) = match &cli.title {
        Some(title) => (title.clone(), "cli".to_string()),
        None => {
            let (value, source) = file_config.default_title();
            (value, source.to_string())
        }
    };
    let (time, time_source) = match &cli.time {
        Some(time) => (time.clone(), "cli".to_string()),
        None => {
            let (value, source) = file_config.default_time();
            (value, source.to_string())
        }
    };
    let (kind, kind_source) = match &cli.kind {
        Some(kind) => (kind.clone(), "cli".to_string()),
        None => {
            let (value, source) = file_config.default_type();
            (value, source.to_string())
        }
    };

    tracing::debug!(%title, source = %title_source, "default_title");
    tracing::debug!(%time, source = %time_source, "default_time");
    tracing::debug!(%kind, source = %kind_source, "default_type");

    let mut config = ImportConfig::default()
        .with_default_title(&title)?
        .with_default_time(&time)?
        .with_default_type(&kind)?;
    if let Some(today) = &cli.today {
        config = config.with_reference_date(today)?;
    }
    Ok(config)
}

fn read_text(cli: &Cli) -> Result<String, String> {
    match &cli.input {
        Some(input) => input::read_input(input),
        None if std::io::stdin().is_terminal() => Err(
            "No input provided. Pass calendar text, @path, or pipe text on stdin (see --help)"
                .to_string(),
        ),
        None => input::read_piped(),
    }
}

fn main() {
    let cli = Cli::parse();

    // Handle --config-path
    if cli.config_path {
        match Config::path() {
            Some(path) => println!("{}", path.display()),
            None => fail("Cannot determine config directory"),
        }
        return;
    }

    // Handle --config-init
    if cli.config_init {
        match config::init_config() {
            Ok(path) => println!("Created config file: {}", path.display()),
            Err(e) => fail(e),
        }
        return;
    }

    // Initialize tracing based on verbosity level (before config loading for logging)
    let level = match cli.verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    // Precedence: CLI args > Environment vars > Config file > Defaults
    let file_config = Config::load();
    if let Some(path) = Config::path() {
        tracing::debug!(path = %path.display(), exists = path.exists(), "config file");
    }

    if cli.no_color || file_config.no_color() || !std::io::stdout().is_terminal() {
        set_override(false);
    }

    let config = import_config(&cli, &file_config).unwrap_or_else(|e| fail(e));
    let importer = CalendarImporter::with_config(config);

    if cli.rules {
        print!("{}", render::rule_list(&importer.rule_infos()));
        return;
    }

    let text = read_text(&cli).unwrap_or_else(|e| fail(e));

    if cli.explain {
        print!("{}", render::explain(&importer.explain(&text)));
        return;
    }

    let report = importer.analyze(&text);

    if cli.json {
        match serde_json::to_string_pretty(&report.candidates) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(format!("Failed to serialize candidates: {}", e)),
        }
        return;
    }

    if report.is_empty() {
        println!("{}", render::NOTHING_DETECTED.yellow());
        return;
    }

    print!("{}", render::candidate_table(&report));
}
