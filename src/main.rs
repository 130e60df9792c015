use clap::Parser;
use seo_audit::{AuditError, AuditRequest, Auditor, ReportRenderer};
use std::io;
use std::process::ExitCode;

mod args;
use args::Args;

fn setup_failed(e: AuditError) -> ExitCode {
    ::log::error!("{}", e);
    eprintln!("Error: {}", e);
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match args.config() {
        Ok(v) => v,
        Err(e) => return setup_failed(e),
    };

    let raw_input = match args.read_input() {
        Ok(v) => v,
        Err(e) => return setup_failed(e),
    };

    let auditor = match Auditor::from_config(&config) {
        Ok(v) => v,
        Err(e) => return setup_failed(e),
    };

    let request = AuditRequest::from_text(&raw_input);
    let supplied = request.supplied();
    if supplied == 0 {
        eprintln!("No URLs given. Provide one URL per line.");
        return ExitCode::SUCCESS;
    }
    eprintln!("Analyzing {} URLs... this may take a few seconds", supplied);

    let start_time = std::time::Instant::now();
    let mut renderer = ReportRenderer::new(io::stdout().lock());
    if let Err(e) = auditor.run_request(&request, &mut renderer).await {
        ::log::error!("Failed to write report: {}", e);
        return ExitCode::FAILURE;
    }

    ::log::info!(
        "Audit finished in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
    ExitCode::SUCCESS
}
