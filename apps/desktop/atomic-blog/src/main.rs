use atomic_blog::app::BlogApp;
use atomic_blog::args::Args;
use atomic_blog::console;
use atomic_blog::error::AtomicBlogError;
use atomic_blog::logger::initialize as LoggerInitialize;

use blog_core::config::{AppConfig, default_config_dir, default_log_dir};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::io::stdout;
use std::panic::Location;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use tokio::io::{BufReader, stdin};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e.message());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AtomicBlogError> {
    let log_dir = match &args.log_dir {
        Some(dir) => dir.clone(),
        None => default_log_dir()?,
    };

    // Ensure log directory exists
    create_dir_all(&log_dir).map_err(|e| AtomicBlogError::App {
        message: format!("Failed to create log directory: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir, args.console_level())?;

    info!("Atomic Blog starting");
    info!("Log directory: {}", log_dir.display());

    let config_dir = match &args.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };

    let mut config = AppConfig::load(&config_dir)?;
    args.apply_overrides(&mut config);
    config.validate()?;

    info!(
        "Generating {} posts and an archive of {} posts",
        config.blog.initial_post_count, config.archive.size
    );
    let mut app = BlogApp::from_config(&config);

    let mut output = stdout();
    console::run(&mut app, BufReader::new(stdin()), &mut output).await?;

    info!("Atomic Blog stopped");
    Ok(())
}
