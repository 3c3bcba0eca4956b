use clap::Parser;
use eat_n_split::core::config::{self, CliOverrides};
use eat_n_split::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eat-n-split", about = "Split bills with your friends")]
struct Args {
    /// Start without any friends
    #[arg(long)]
    empty: bool,

    /// Currency symbol shown in balances
    #[arg(short, long)]
    currency: Option<String>,

    /// Read settings from this file instead of ~/.eat-n-split/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger before config loading; `log::set_max_level` does the filtering
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("eat-n-split.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
    log::set_max_level(config::DEFAULT_LOG_LEVEL);

    let file_config = config::load_or_default(args.config.as_deref());
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            currency: args.currency,
            empty: args.empty,
        },
    );
    log::set_max_level(resolved.log_level);

    log::info!(
        "Eat-'n-Split starting up with {} friends",
        resolved.friends.len()
    );

    tui::run(resolved)
}
