use anyhow::Result;

mod client;
mod config;
mod consts;
mod controllers;
mod errors;
mod util;

use controllers::export::{export_failure, EnvmanExporter};
use errors::DeployError;
use util::logs;

#[tokio::main]
async fn main() -> Result<()> {
    let exporter = EnvmanExporter::new();

    let result = match config::load(std::env::args_os()) {
        Ok(config) => controllers::deploy::run(&config, &exporter).await.map(|_| ()),
        // --help and --version
        Err(DeployError::Arguments(e)) if !e.use_stderr() => e.exit(),
        Err(e) => {
            export_failure(&exporter).await;
            Err(e)
        }
    };

    if let Err(e) = result {
        logs::fail(e);
        std::process::exit(1);
    }

    Ok(())
}
