use blog_core::config::AppConfig;

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Command-line arguments for the Atomic Blog binary.
#[derive(Debug, Default, Parser)]
#[command(
    name = "atomic-blog",
    version,
    about = "The Atomic Blog: searchable generated posts with a post archive"
)]
pub struct Args {
    /// Directory holding config.json.
    #[arg(long = "config-dir", value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    /// Directory for atomic-blog.log.
    #[arg(long = "log-dir", value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Seed for reproducible generated posts.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of posts in the archive panel.
    #[arg(long = "archive-size", value_name = "N")]
    pub archive_size: Option<usize>,

    /// Echo info-level logs to stderr.
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Args {
    /// Override config values given on the command line.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(seed) = self.seed {
            config.generator.seed = Some(seed);
        }
        if let Some(size) = self.archive_size {
            config.archive.size = size;
        }
    }

    pub fn console_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        }
    }
}
