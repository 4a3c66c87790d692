use std::io;

use anyhow::Context;
use clap::Parser;

use amazonia_cli::{Cli, Config, commands, menu};
use amazonia_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    amazonia_observability::init(&config.log);

    tracing::debug!(file = %config.file.display(), "opening inventory");
    let mut inventory = Inventory::open(&config.file);

    let outcome = match cli.command {
        Some(command) => commands::execute(&mut inventory, command, &mut io::stdout().lock()),
        None => menu::run(&mut inventory, io::stdin().lock(), io::stdout().lock())
            .context("menu loop failed"),
    };

    // Final flush runs on every exit path, including a failed command.
    let closed = inventory
        .close()
        .with_context(|| format!("final save of {} failed", config.file.display()));

    outcome?;
    closed
}
