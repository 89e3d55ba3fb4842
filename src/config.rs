use crate::extract::ScanOptions;
use crate::generate::RenameOptions;
use crate::process::ProcessOptions;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Options for filling tags from file paths.
    #[serde(default)]
    pub scanner: ScanOptions,
    /// Options for building file names from tags.
    #[serde(default)]
    pub rename: RenameOptions,
    #[serde(default)]
    pub process: ProcessOptions,

    /// Use the file checksum as comment when a file has none.
    #[serde(default)]
    pub default_comment_checksum: bool,

    // Saved masks, kept in the order given
    #[serde(default = "default_tag_masks")]
    pub tag_masks: Vec<String>,
    #[serde(default = "default_rename_masks")]
    pub rename_masks: Vec<String>,

    /// Directory for the daily log file. No file logging when unset.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_tag_masks() -> Vec<String> {
    vec![
        "%a - %b/%n - %t",
        "%a_-_%b/%n_-_%t",
        "%a - %b (%y)/%n - %a - %t",
        "%a - %b (%y) - %g/%n - %a - %t",
        "%a - %b/%n. %t",
        "%b/%n - %a - %t",
        "%n - %a - %t",
        "%n. %a - %t",
        "%n - %t",
        "%n. %t",
        "%a - %t",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_rename_masks() -> Vec<String> {
    vec![
        "%n - %a - %t",
        "%n_-_%a_-_%t",
        "%n. %a - %t",
        "%n - %t",
        "%a - %b/%n - %t",
        "%a - %b (%y)/%n - %t",
        "%a - %t",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scanner: ScanOptions::default(),
            rename: RenameOptions::default(),
            process: ProcessOptions::default(),
            default_comment_checksum: false,
            tag_masks: default_tag_masks(),
            rename_masks: default_rename_masks(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn from_path(path: &std::path::Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::from_toml(&s)
    }

    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        let cfg: Config = toml::from_str(s)?;
        Ok(cfg)
    }
}
