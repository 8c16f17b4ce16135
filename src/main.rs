use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use jwtview::app::App;
use jwtview::config::{Config, DisplayConfig, LogConfig, ViewTab};
use jwtview::input;
use jwtview::report::render_report;
use jwtview::ui::TuiManager;

#[derive(Parser, Debug)]
#[command(version, about = "Decode and inspect JSON Web Tokens locally")]
struct Args {
    /// Token to open; `-` reads it from standard input.
    token: Option<String>,

    /// Read the token from a file instead.
    #[arg(short, long, conflicts_with = "token")]
    file: Option<PathBuf>,

    /// Print the decoded token and exit instead of opening the viewer.
    #[arg(short, long)]
    print: bool,

    /// Start in (or print) the claims table instead of raw JSON.
    #[arg(short, long)]
    table: bool,

    /// Spaces per indentation level in JSON output.
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter directives, e.g. `debug` or `jwtview=trace`.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Config {
            display: DisplayConfig {
                json_indent: args.indent,
                default_tab: if args.table {
                    ViewTab::Table
                } else {
                    ViewTab::Json
                },
                ..DisplayConfig::default()
            },
            log: LogConfig {
                file: args.log_file.clone(),
                filter: args.log_filter.clone(),
            },
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = Config::from(&args);
    jwtview::logging::init(&config.log, args.print)?;

    let token = match (&args.token, &args.file) {
        (Some(token), _) if token == "-" => Some(input::stdin::load()?),
        (Some(token), _) => Some(token.clone()),
        (None, Some(path)) => Some(input::file::load(path)?),
        (None, None) => None,
    };

    if args.print {
        return print_token(token.as_deref().unwrap_or_default(), &config.display);
    }

    let mut app = App::new(config.display);
    if let Some(token) = token {
        app.set_token(token);
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(ExitCode::SUCCESS)
}

fn print_token(
    token: &str,
    display: &DisplayConfig,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match jwtview::parse(token) {
        Ok(decoded) => {
            print!("{}", render_report(&decoded, display, display.default_tab));
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::info!(%error, "token rejected");
            eprintln!("✗ Invalid JWT: {error}");
            Ok(ExitCode::FAILURE)
        }
    }
}
