use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use text_merger::clipboard::ArboardClipboard;
use text_merger::core::config::{
    CliOverrides, MergerConfig, ResolvedConfig, StorageLocation, load_config, resolve,
};
use text_merger::core::form::MergerForm;
use text_merger::core::persistence::Persistence;
use text_merger::core::storage::{FileStore, KeyValueStore, MemoryStore};
use text_merger::tui;

#[derive(Parser)]
#[command(name = "text-merger", about = "Merge two texts line by line")]
struct Args {
    /// Key-value file holding both sources between runs
    #[arg(long, value_name = "PATH")]
    storage: Option<PathBuf>,

    /// Keep both sources in memory only; nothing is saved
    #[arg(long, conflicts_with = "storage")]
    ephemeral: bool,

    /// Diagnostic log file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Delete the saved sources and exit
    #[arg(long)]
    clear: bool,
}

fn init_logging(config: &ResolvedConfig) {
    // The terminal belongs to the UI, so logs only ever go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(parent) = config.log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn open_store(location: &StorageLocation) -> Box<dyn KeyValueStore> {
    match location {
        StorageLocation::File(path) => {
            info!("Using storage file {}", path.display());
            Box::new(FileStore::new(path.clone()))
        }
        StorageLocation::Memory => {
            info!("Using in-memory storage; nothing will be saved");
            Box::new(MemoryStore::new())
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Nothing can be logged until the log file is known, so loading and
    // resolving report back and get logged below
    let (config, origin, config_error) = match load_config() {
        Ok(loaded) => (loaded.config, Some(loaded.origin), None),
        Err(e) => (MergerConfig::default(), None, Some(e)),
    };
    let resolved = resolve(
        &config,
        &CliOverrides {
            storage: args.storage,
            ephemeral: args.ephemeral,
            log_file: args.log_file,
        },
    );

    init_logging(&resolved);
    info!("Text merger starting up");
    if let Some(origin) = origin {
        origin.log();
    }
    if let Some(e) = config_error {
        warn!("Ignoring config file, using defaults: {}", e);
    }
    for warning in &resolved.warnings {
        warn!("{}", warning);
    }

    let mut persistence = Persistence::new(open_store(&resolved.storage));

    if args.clear {
        persistence.clear();
        println!("Cleared saved sources.");
        return Ok(());
    }

    let form = MergerForm::open(persistence, Arc::new(ArboardClipboard::new()));
    tui::run(form)
}
