use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use showcase::core::config::{self, ThemeName};
use showcase::core::replay::replay;
use showcase::core::state::NavigationState;

#[derive(Parser)]
#[command(name = "showcase", about = "Terminal component gallery browser")]
struct Args {
    /// Catalog TOML file to browse instead of the built-in gallery
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeName>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fold a JSON Lines action log through the reducer and print the final state
    Replay {
        /// File with one JSON-encoded action per line
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("showcase: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to showcase.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("showcase.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config()?;
    let resolved = config::resolve(&file_config, args.catalog.as_deref(), args.theme);
    log::info!("Showcase starting up with {:?}", resolved);

    match args.command {
        Some(Command::Replay { file }) => {
            let reader = BufReader::new(File::open(&file)?);
            let state = replay(reader, NavigationState::new(resolved.recent_capacity))?;
            println!("{}", serde_json::to_string_pretty(&state)?);
            Ok(())
        }
        None => Ok(showcase::tui::run(resolved)?),
    }
}
