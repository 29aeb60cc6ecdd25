use std::io;
use std::process::ExitCode;
use clap::Parser;
use tracing::{error, info};
use bookmanager::catalog::console::{terminal_width, Console};
use bookmanager::catalog::factory;
use bookmanager::core::domain::Configuration;
use bookmanager::core::library::LibraryResult;
use bookmanager::utils::logs::setup_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Configuration::parse();
    if let Err(err) = setup_tracing(&config) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "session failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Configuration) -> LibraryResult<()> {
    info!(store = %config.store, database = config.database.as_str(), "starting book manager");
    let gateway = factory::open_gateway(config).await?;
    let catalog_service = factory::create_catalog_service(gateway.as_ref());

    let stdin = io::stdin();
    let mut console = Console::new(catalog_service, stdin.lock(), io::stdout())
        .with_width(terminal_width());
    let res = console.run().await;

    if let Some(gateway) = gateway {
        gateway.close();
    }
    res
}
