// src/main.rs

use brewup::errors::BrewupError;
use brewup::{cli, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        match err {
            // Move past the half-drawn spinner line.
            BrewupError::Interrupted => println!(),
            _ => eprintln!("brewup error: {err}"),
        }
        std::process::exit(err.exit_code());
    }
}

async fn run_main() -> brewup::errors::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
