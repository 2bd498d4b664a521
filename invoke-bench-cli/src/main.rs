mod cli;
mod commands;
mod config;
mod error;
mod fixtures;
mod output;
mod report;
mod suite;

use crate::{
    cli::{Args, Commands},
    commands::CommandExecutor,
    config::AppConfig,
    error::Result,
};
use clap::Parser;
#[cfg(feature = "colored-output")]
use colored::*;
use std::process;
use tracing::{Level, error, info};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

fn main() {
    let result = run();

    if let Err(e) = result {
        error!("Application error: {}", e);
        #[cfg(feature = "colored-output")]
        {
            eprintln!("{} {}", "Error:".red().bold(), e);
        }
        #[cfg(not(feature = "colored-output"))]
        {
            eprintln!("Error: {}", e);
        }
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    let config = AppConfig::load(args.config.as_deref())?;

    info!("Starting invoke-bench with config: {:?}", config);

    match args.command {
        Commands::Run {
            iterations,
            average_over,
            param,
            kind,
            output,
            output_file,
        } => {
            let bench_config = config.bench_config(iterations, average_over, param);
            let executor = CommandExecutor::new(config);
            executor.run_bench(
                bench_config,
                &kind,
                output,
                output_file.as_deref(),
                !args.quiet,
            )?;
        }

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Args::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }

        Commands::Config { show, reset } => {
            if reset {
                AppConfig::reset(args.config.as_deref())?;
                println!("✓ Configuration reset to defaults");
            } else if show {
                println!("{}", config.show()?);
            } else {
                println!(
                    "Use --show to display current configuration or --reset to reset to defaults"
                );
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_level(verbose).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
