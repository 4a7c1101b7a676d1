use std::path::PathBuf;

use clap::Parser;
use taskfan::cli::{Args, Commands, ConfigDiscovery, load_tasks, render, save_tasks};
use taskfan::engine::{DEFAULT_WORKERS, Runner, RunnerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("taskfan=info")
        .init();

    let args = Args::parse();
    let config = ConfigDiscovery::discover();

    let file = args
        .file
        .or_else(|| config.file.clone())
        .unwrap_or_else(|| PathBuf::from("./tasks.json"));

    let mut tasks = load_tasks(&file)?;

    match args.command {
        Commands::List { limit } => {
            let limit = limit.unwrap_or(tasks.len()).min(tasks.len());
            render::print_tasks(&tasks.tasks()[..limit]);
        }
        Commands::Filter { status } => {
            render::print_tasks(tasks.with_status(status.to_status()));
        }
        Commands::Process { workers, save } => {
            let workers = workers.or(config.workers).unwrap_or(DEFAULT_WORKERS);
            info!("processing tasks from {:?} with {} workers", file, workers);

            let runner = Runner::new(RunnerConfig { workers });
            runner
                .run(&mut tasks, &mut |message: String| println!("{message}"))
                .await?;

            if save {
                save_tasks(&file, &tasks)?;
                info!("saved updated task file: {:?}", file);
            }
        }
    }

    Ok(())
}
