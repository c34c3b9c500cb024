use super::args::{Cli, Commands, TodoCommand, UsersCommand};
use super::handlers;
use crate::config::{self, Config};
use crate::logging;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    let config = Config::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), "loaded config");

    match command {
        Commands::Todo { command } => match command {
            TodoCommand::Run { script, view } => {
                handlers::todo_run::handle(&config, &script, view, cli.format)
            }
            TodoCommand::Check { script } => {
                handlers::todo_check::handle(&config, &script, cli.format)
            }
        },

        Commands::Users { command } => match command {
            UsersCommand::List {
                select,
                limit,
                source,
            } => handlers::users_list::handle(&config, &source, select, limit, cli.format),
            UsersCommand::Select { from, to, source } => {
                handlers::users_select::handle(&config, &source, from, to, cli.format)
            }
        },
    }
}

fn show_guidance(data_dir: &Path) {
    let config_path = data_dir.join(config::CONFIG_FILE);

    println!("todoview - derived list views from the terminal\n");

    println!("Quick commands:");
    println!("  todoview todo run <script.toml>            # Replay a script, print a page");
    println!("  todoview todo run <script.toml> --page 2   # Another page");
    println!("  todoview todo check <script.toml>          # Validate a script");
    println!("  todoview users list --select 5             # Users sorted by age");
    println!("  todoview users select --from 5 --to 9      # Rows that re-render\n");

    if config_path.exists() {
        println!("Config: {}", config_path.display());
    } else {
        println!("No config found; defaults apply ({})", config_path.display());
    }

    println!("\nFor more commands:");
    println!("  todoview --help");
}
