//! Startup configuration for a sandbox session.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// World construction parameters, the only configuration the game takes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    /// World x extent.
    pub width: i32,
    /// World z extent.
    pub depth: i32,
    /// World y extent; must exceed 4.
    pub height: i32,
    /// World seed; a random seed is drawn at startup when unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 32,
            depth: 32,
            height: 32,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config from {}", path.display()))
    }
}

/// Build the configuration from process arguments.
pub fn config_from_args() -> Result<GameConfig> {
    config_from_iter(std::env::args().skip(1))
}

/// Build the configuration from an argument iterator.
///
/// `--config <path>` loads a JSON file first; `--width`, `--depth`,
/// `--height`, and `--seed` override individual fields. Unknown arguments
/// are ignored.
pub fn config_from_iter<I>(mut args: I) -> Result<GameConfig>
where
    I: Iterator<Item = String>,
{
    let mut config = GameConfig::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                config = GameConfig::from_file(Path::new(&path))?;
            }
            "--width" => config.width = parse_next(&mut args, "--width")?,
            "--depth" => config.depth = parse_next(&mut args, "--depth")?,
            "--height" => config.height = parse_next(&mut args, "--height")?,
            "--seed" => config.seed = Some(parse_next(&mut args, "--seed")?),
            _ => {}
        }
    }
    Ok(config)
}

fn parse_next<I, T>(args: &mut I, flag: &str) -> Result<T>
where
    I: Iterator<Item = String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = args
        .next()
        .with_context(|| format!("{flag} requires a value"))?;
    value
        .parse()
        .with_context(|| format!("invalid value for {flag}: {value}"))
}
