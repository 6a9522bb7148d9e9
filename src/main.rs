use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use toggles::Demo;
use toggles::core::config::{self, CliOverrides};
use toggles::core::data::Dataset;
use toggles::tui;

#[derive(Parser)]
#[command(
    name = "toggles",
    about = "Collapsible lists built with render props and a higher-order wrapper"
)]
struct Args {
    /// Which pattern to show first
    #[arg(short, long, value_enum)]
    demo: Option<Demo>,

    /// Seed for repeatable mock data
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the generated data as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Where to write the log
    #[arg(long, default_value = "toggles.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{e}; falling back to defaults");
        config::TogglesConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            demo: args.demo,
            seed: args.seed,
        },
    );
    log::info!("Toggles starting up with {:?}", resolved);

    if args.dump {
        let dataset = Dataset::generate(&resolved.data);
        let json = serde_json::to_string_pretty(&dataset).map_err(std::io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    tui::run(resolved)
}
