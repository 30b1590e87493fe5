use crate::cli::Args;
use crate::error::{Error, Result};
use crate::remap::keynames::resolve_key_code;
use crate::remap::{HeldLayer, RemapEngine, RemapTable};
use input_linux_sys::{KEY_CAPSLOCK, KEY_LEFTCTRL, KEY_RIGHTALT};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an optional JSON remap file.
pub const CONFIG_ENV: &str = "CAPSREMAP_CONFIG";
pub const DEFAULT_DELAY: Duration = Duration::from_millis(20);
pub const DEFAULT_LOG_FILTER: &str = "capsremap=info";

#[derive(Clone, Debug)]
pub struct Config {
    pub table: RemapTable,
    pub layer: Option<HeldLayer>,
    pub delay: Duration,
    pub log_filter: String,
    /// File the rules were loaded from, if any.
    pub source: Option<PathBuf>,
}

/// On-disk layout of the remap file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    remap: Option<BTreeMap<String, String>>,
    held: Option<HeldFile>,
    delay_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HeldFile {
    key: String,
    #[serde(default)]
    remap: BTreeMap<String, String>,
}

impl Config {
    /// Builds the configuration from the command line and `CAPSREMAP_CONFIG`.
    pub fn load(args: &Args) -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self::from_sources(args, path.as_deref())
    }

    pub fn from_sources(args: &Args, path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
                let mut cfg = Self::from_json(&text)
                    .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
                cfg.source = Some(path.to_path_buf());
                cfg
            }
            None => Self::default(),
        };
        if let Some(ms) = args.delay {
            cfg.delay = Duration::from_millis(ms);
        }
        Ok(cfg)
    }

    /// Parses a remap file. Errors are plain messages; callers add the path.
    pub fn from_json(text: &str) -> std::result::Result<Self, String> {
        let file: ConfigFile = serde_json::from_str(text).map_err(|e| e.to_string())?;

        let table = match file.remap {
            Some(rules) => parse_rules(&rules)?,
            None => default_table(),
        };
        let layer = file
            .held
            .map(|held| {
                Ok::<_, String>(HeldLayer {
                    key: parse_key(&held.key)?,
                    table: parse_rules(&held.remap)?,
                })
            })
            .transpose()?;

        Ok(Config {
            table,
            layer,
            delay: file.delay_ms.map_or(DEFAULT_DELAY, Duration::from_millis),
            ..Config::default()
        })
    }

    pub fn engine(&self) -> RemapEngine {
        let engine = RemapEngine::new(self.table.clone());
        match &self.layer {
            Some(layer) => engine.with_layer(layer.clone(), self.delay),
            None => engine,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            table: default_table(),
            layer: None,
            delay: DEFAULT_DELAY,
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            source: None,
        }
    }
}

/// Right Alt acts as Caps Lock, Caps Lock acts as Left Control.
pub fn default_table() -> RemapTable {
    [
        (KEY_RIGHTALT as u16, KEY_CAPSLOCK as u16),
        (KEY_CAPSLOCK as u16, KEY_LEFTCTRL as u16),
    ]
    .into_iter()
    .collect()
}

fn parse_key(name: &str) -> std::result::Result<u16, String> {
    resolve_key_code(name).ok_or_else(|| format!("unknown key `{name}`"))
}

fn parse_rules(rules: &BTreeMap<String, String>) -> std::result::Result<RemapTable, String> {
    rules
        .iter()
        .map(|(source, target)| Ok((parse_key(source)?, parse_key(target)?)))
        .collect::<std::result::Result<Vec<_>, String>>()
        .map(|pairs| pairs.into_iter().collect())
}
