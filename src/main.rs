use crate::config::AppConfig;
use crate::domain::Catalog;
use crate::router::handle;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Read configuration from the environment
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the catalog once; requests only ever borrow it
    let catalog = Catalog::builtin();
    if catalog.is_empty() {
        tracing::warn!("catalog is empty; every search will return no results");
    }
    tracing::info!(listings = catalog.len(), "catalog loaded");

    // 3️⃣ Start the server
    tracing::info!(addr = %cfg.addr, workers = cfg.max_workers, "starting server");

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &catalog) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                tracing::error!(error = %err, "request failed");
            }
            responses::error_to_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
        std::process::exit(1);
    }

    tracing::info!("Server shut down cleanly.");
}
