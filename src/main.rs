use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use roomkey::domain::ports::SessionStoragePort;
use roomkey::infrastructure::{
    AppConfig, DiscardingProfileStore, FileSessionStorage, InMemoryAuthRepository,
    MemorySessionStorage, StorageManager,
};
use roomkey::presentation::{App, Cli};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.args.config {
        Some(path) => {
            let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            StorageManager::with_dir(dir).load_config(Some(path))?
        }
        None => match StorageManager::new() {
            Ok(manager) => manager.load_config(None)?,
            Err(_) => AppConfig::default(),
        },
    };

    config.merge_with_args(&cli.args);
    Ok(config)
}

fn session_storage(config: &AppConfig) -> Arc<dyn SessionStoragePort> {
    if config.storage.ephemeral {
        return Arc::new(MemorySessionStorage::new());
    }

    if let Some(dir) = config.effective_data_dir() {
        Arc::new(FileSessionStorage::in_dir(&dir))
    } else {
        warn!("Failed to determine data directory. Session persistence disabled.");
        Arc::new(MemorySessionStorage::new())
    }
}

fn create_app(config: &AppConfig) -> App {
    let auth = InMemoryAuthRepository::seeded()
        .with_latency(config.mock.latency(), config.mock.logout_latency());
    let profile = DiscardingProfileStore::new(config.mock.latency());

    App::new(Arc::new(auth), session_storage(config), Arc::new(profile))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_logging(&config)?;

    info!(version = roomkey::VERSION, command = cli.command.name(), "Starting Roomkey");

    let app = create_app(&config);
    app.start().await;

    let mut stdout = io::stdout().lock();
    match app.run(cli.command, &mut stdout).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if App::render_form_error(&e, &mut io::stderr().lock())? => Ok(ExitCode::FAILURE),
        Err(e) => Err(e),
    }
}
