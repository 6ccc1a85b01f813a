use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output path for the ingested spot data
    #[arg(long, default_value = "data/spots.json")]
    out: PathBuf,

    /// Search radius per point, in meters
    #[arg(long, default_value_t = ingest::utils::DEFAULT_RADIUS_M)]
    radius: f64,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = ingest::run(&args.out, args.radius).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
