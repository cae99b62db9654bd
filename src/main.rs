use std::path::PathBuf;

use clap::Parser;
use notes_tasks::{App, Config, logging};

#[derive(Parser, Debug)]
#[command(name = "notes-tasks", version, about = "Notes and tasks in the terminal")]
struct Cli {
    /// Config file (default: <config dir>/notes-tasks/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, overrides `[log] level` from the config
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    logging::init(&config.log)?;

    let mut app = App::new(&config)?;
    ratatui::run(|t| app.run(t))?;

    Ok(())
}
