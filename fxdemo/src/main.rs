use anyhow::Context as _;
use fx_axum::start_server;
use fx_csv::CsvRatesLoader;
use fxdemo::{AppConfig, Cli, impls::DemoApp};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project.
    // Accordingly, we likely want to subscribe to these events so we can
    // write them to stdio and possibly some durable location.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI args and build the layered configuration
    let cli = Cli::import()?;
    let AppConfig { server, rates } = AppConfig::load(&cli)?;

    // An invalid rates source must fail startup rather than serve a partial
    // table.
    let table = CsvRatesLoader::new(&rates.path)
        .load()
        .with_context(|| format!("failed to load rates from {}", rates.path.display()))?;
    tracing::info!(currencies = table.len(), "loaded rate table");

    let app = DemoApp::new(table);
    start_server(server, app).await?;

    Ok(())
}
