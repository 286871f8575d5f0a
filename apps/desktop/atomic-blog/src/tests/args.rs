use crate::args::Args;

use blog_core::config::AppConfig;

use clap::Parser;
use log::LevelFilter;

/// **VALUE**: Verifies command-line values override the loaded config.
///
/// **WHY THIS MATTERS**: `--seed` is how a session is made reproducible.
///
/// **BUG THIS CATCHES**: Would catch a flag that parses but is never applied.
#[test]
fn given_seed_and_archive_size_when_applying_overrides_then_config_updated() {
    // GIVEN: Parsed arguments and a default config
    let args = Args::parse_from(["atomic-blog", "--seed", "42", "--archive-size", "500", "-v"]);
    let mut config = AppConfig::default();

    // WHEN
    args.apply_overrides(&mut config);

    // THEN
    assert_eq!(config.generator.seed, Some(42));
    assert_eq!(config.archive.size, 500);
    assert_eq!(args.console_level(), LevelFilter::Info);
}

/// **VALUE**: Verifies no flags leaves the config untouched.
///
/// **BUG THIS CATCHES**: Would catch overrides clobbering config values with defaults.
#[test]
fn given_no_flags_when_applying_overrides_then_config_unchanged() {
    let args = Args::parse_from(["atomic-blog"]);
    let mut config = AppConfig::default();
    config.archive.size = 123;

    args.apply_overrides(&mut config);

    assert_eq!(config.archive.size, 123);
    assert_eq!(config.generator.seed, None);
    assert_eq!(args.console_level(), LevelFilter::Warn);
}
