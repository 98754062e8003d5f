use clap::Parser;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let batch = match args.into_batch() {
        Ok(batch) => batch,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!(
        "Starting link extraction: {} -> {}",
        batch.config().input_path.display(),
        batch.config().output_path.display()
    );

    let start_time = std::time::Instant::now();
    match batch.run().await {
        Ok(summary) => {
            ::log::info!(
                "Processed {} URLs in {:.2} seconds ({} with links, {} failed)",
                summary.rows,
                start_time.elapsed().as_secs_f64(),
                summary.rows_with_links,
                summary.failures()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Batch failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
