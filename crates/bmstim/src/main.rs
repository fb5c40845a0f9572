//! bmstim CLI - bit-manipulation stimuli generator

mod cli;
mod terminal;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, EXIT_FAILURE, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(cli.log_directive().parse().expect("valid log directive")),
        )
        .with_target(false)
        .init();

    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match bmstim::generate(&cli.options()) {
        Ok(report) => {
            if !cli.silent {
                terminal::success(&format!(
                    "Generated {} stimuli (seed {})",
                    report.count, report.seed
                ));
                terminal::path_output(&report.header_path);
                if report.verified {
                    terminal::dim("header read-back verified");
                }
                if let Some(outcome) = report.splice {
                    terminal::dim(&format!("check_breverse: {outcome:?}"));
                }
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            error!(error = %e, "generation failed");
            terminal::error(&e.to_string());
            EXIT_FAILURE
        }
    }
}
