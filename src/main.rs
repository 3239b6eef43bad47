//! sandvox - a deterministic voxel sandbox explored through text commands.

mod commands;
mod config;
mod game;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use game::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Default WARN so diagnostics never interleave with gameplay text;
    // override via RUST_LOG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = config::config_from_args()?;
    let mut game = Game::new(&config).context("failed to create the world")?;
    info!(
        width = config.width,
        depth = config.depth,
        height = config.height,
        "session ready"
    );

    println!("Welcome to the miniature voxel sandbox! Type 'help' for instructions.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("> ");
        stdout.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }
        println!("{}", game.execute(&line));
        if matches!(
            line.trim().to_ascii_lowercase().as_str(),
            "quit" | "exit"
        ) {
            break;
        }
    }
    Ok(())
}
