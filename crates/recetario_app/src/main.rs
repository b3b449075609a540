mod render;
mod shell;

use clap::Parser;
use url::Url;

use recetario_engine::{ApiSettings, EngineHandle};

#[derive(Parser, Debug)]
#[command(name = "recetario", about = "Terminal client for the Recetario Fit catalog")]
struct Args {
    /// Base address of the catalog service.
    #[arg(long, env = "RECETARIO_API_BASE", default_value = "http://127.0.0.1:8000")]
    base_url: String,
    /// Log engine request traces.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    client_logging::initialize(args.verbose);

    let base_url = Url::parse(&args.base_url)?;
    let engine = EngineHandle::new(ApiSettings::new(base_url.clone()))?;
    shell::run(engine, base_url);
    Ok(())
}
