//! Runtime configuration resolved from the command line and environment.

use std::path::{Path, PathBuf};

use amazonia_observability::LogConfig;

use crate::args::Cli;

pub const DATA_DIR: &str = "data";
pub const FILE_NAME: &str = "inventario.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backing file of the inventory.
    pub file: PathBuf,
    pub log: LogConfig,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            file: cli.file.clone().unwrap_or_else(default_inventory_path),
            log: LogConfig {
                format: cli.log_format.into(),
                verbose: cli.verbose,
            },
        }
    }
}

/// `data/inventario.txt` next to the executable, or under the working
/// directory when the executable location is unknown.
pub fn default_inventory_path() -> PathBuf {
    let exe = std::env::current_exe().ok();
    inventory_path_in(exe.as_deref().and_then(Path::parent).unwrap_or(Path::new(".")))
}

fn inventory_path_in(base: &Path) -> PathBuf {
    base.join(DATA_DIR).join(FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use amazonia_observability::LogFormat;
    use clap::Parser;

    #[test]
    fn explicit_file_wins() {
        let cli = Cli::try_parse_from(["amazonia", "--file", "/tmp/inv.txt", "--verbose"]).unwrap();
        let config = Config::from_cli(&cli);
        assert_eq!(config.file, PathBuf::from("/tmp/inv.txt"));
        assert!(config.log.verbose);
        assert_eq!(config.log.format, LogFormat::Text);
    }

    #[test]
    fn default_path_ends_in_data_dir() {
        let path = default_inventory_path();
        assert!(path.ends_with(Path::new(DATA_DIR).join(FILE_NAME)));
        assert_eq!(
            inventory_path_in(Path::new("/opt/amazonia")),
            PathBuf::from("/opt/amazonia/data/inventario.txt")
        );
    }

    #[test]
    fn json_logs() {
        let cli = Cli::try_parse_from(["amazonia", "--file", "x", "--log-format", "json"]).unwrap();
        assert_eq!(Config::from_cli(&cli).log.format, LogFormat::Json);
    }
}
