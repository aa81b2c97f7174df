use std::sync::Arc;

use anyhow::Result;
use kanbanist::boards::BoardService;
use kanbanist::config::Config;
use kanbanist::logger::Logger;
use kanbanist::storage::{BoardStorage, FileStore, KeyValueStore, MemoryStore};
use kanbanist::ui;

const USAGE: &str = "Usage: kanbanist [--generate-config [PATH]] [--memory] [--help]

Options:
  --generate-config [PATH]  Write a default config file and exit
  --memory                  Keep boards in memory only for this session
  --help                    Show this message";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    if let Some(pos) = args.iter().position(|a| a == "--generate-config") {
        let path = match args.get(pos + 1).filter(|a| !a.starts_with("--")) {
            Some(path) => path.into(),
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(path)?;
        return Ok(());
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;

    let store: Arc<dyn KeyValueStore> = if args.iter().any(|a| a == "--memory") {
        logger.log("Main: using in-memory storage".to_string());
        Arc::new(MemoryStore::new())
    } else {
        let path = config.storage.resolve_path()?;
        logger.log(format!("Main: using storage file {}", path.display()));
        Arc::new(FileStore::new(path))
    };

    let boards = BoardService::new(BoardStorage::new(store));

    // Run the TUI application
    ui::run_app(config, boards, logger).await?;

    Ok(())
}
