use clap::Parser;
use groupsearch_core::Config;
use groupsearch_store::SqliteGroupStore;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "groupsearch", about = "Ranked group-name search over HTTP")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/groupsearch/config.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Address to listen on, overriding `server.bind`.
    #[arg(long)]
    bind: Option<String>,
    /// SQLite database path, overriding `store.path`.
    #[arg(long)]
    database: Option<PathBuf>,
    /// JSON array of `{"name", "description"}` objects to insert before serving.
    #[arg(long)]
    seed: Option<PathBuf>,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(path) = cli.database {
        config.store.path = path;
    }

    let store = SqliteGroupStore::open(&config.store.path, config.store.pool_size)?;
    if let Some(seed) = &cli.seed {
        let groups = groupsearch::load_seed(seed)?;
        store.insert_many(&groups)?;
    }
    tracing::info!(
        path = %config.store.path.display(),
        groups = store.count()?,
        "store opened"
    );

    groupsearch::serve(&config, Arc::new(store)).await
}
