// src/config.rs  --  Runtime configuration (CLI + TOML)
use crate::morse::{Codec, Timing};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The example config is embedded directly in the binary at compile time.
/// Users can write it out with:  morse-codec --write-config
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../config.toml.example");

// ── CLI ───────────────────────────────────────────────────────────────────────
#[derive(Parser, Debug)]
#[command(
    name    = "morse-codec",
    about   = "Morse code encoder / decoder",
    version,
)]
pub struct Cli {
    /// Config file path (default: ~/.config/morse-codec/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Separator between character codes (default: /)
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Character speed in WPM for --timing (default: 20)
    #[arg(long)]
    pub wpm: Option<u8>,

    /// Farnsworth effective WPM for --timing; 0 = off
    #[arg(long)]
    pub farnsworth_wpm: Option<u8>,

    /// Print the estimated airtime after each encoded line
    #[arg(long, action)]
    pub timing: bool,

    /// Accept separators containing '.' or '-'
    #[arg(long, action)]
    pub no_strict: bool,

    /// Write the built-in default config.toml to the config path and exit.
    /// Use --config <PATH> to write to a custom location.
    #[arg(long, action)]
    pub write_config: bool,

    /// Print the built-in default config.toml to stdout and exit
    #[arg(long, action)]
    pub print_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Encode text; reads stdin lines when no TEXT is given
    Encode { text: Vec<String> },
    /// Decode Morse; reads stdin lines when no CODE is given
    Decode { code: Vec<String> },
    /// Print the symbol table
    Table,
}

// ── TOML file structure ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub codec:  Option<CodecCfg>,
    pub timing: Option<TimingCfg>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecCfg {
    pub separator:        Option<String>,
    pub strict_separator: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingCfg {
    pub wpm:            Option<u8>,
    pub farnsworth_wpm: Option<u8>,
    pub show:           Option<bool>,
}

// ── Resolved / merged config ──────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub separator:        String,
    pub strict_separator: bool,
    /// Character speed for airtime estimates
    pub wpm:              u8,
    pub farnsworth_wpm:   u8,
    pub show_timing:      bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            separator:        "/".into(),
            strict_separator: true,
            wpm:              20,
            farnsworth_wpm:   0,
            show_timing:      false,
        }
    }
}

// ── Config loader ─────────────────────────────────────────────────────────────
impl AppConfig {
    /// Write the embedded default config to disk.
    /// Returns the path it was written to.
    pub fn write_default_config(cli: &Cli) -> Result<PathBuf> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating config directory {:?}", parent))?;
        }
        std::fs::write(&path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Writing config to {:?}", path))?;
        Ok(path)
    }

    pub fn load(cli: &Cli) -> Result<Self> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        let mut cfg = Self::from_file(&path)?;
        cfg.apply_cli(cli);
        log::debug!("[config] resolved {:?}", cfg);
        Ok(cfg)
    }

    /// Defaults overlaid with `path`, if it exists.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut cfg = Self::default();
        if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Reading config {:?}", path))?;
            let fc: FileConfig = toml::from_str(&raw)
                .with_context(|| format!("Parsing config {:?}", path))?;
            cfg.apply_file(&fc);
        } else {
            log::info!("[config] no config file at {}, using defaults", path.display());
        }
        Ok(cfg)
    }

    fn apply_file(&mut self, fc: &FileConfig) {
        if let Some(c) = &fc.codec {
            if let Some(v) = &c.separator        { self.separator        = v.clone(); }
            if let Some(v) = c.strict_separator  { self.strict_separator = v; }
        }
        if let Some(t) = &fc.timing {
            if let Some(v) = t.wpm            { self.wpm            = v; }
            if let Some(v) = t.farnsworth_wpm { self.farnsworth_wpm = v; }
            if let Some(v) = t.show           { self.show_timing    = v; }
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = &cli.separator     { self.separator      = v.clone(); }
        if let Some(v) = cli.wpm            { self.wpm            = v; }
        if let Some(v) = cli.farnsworth_wpm { self.farnsworth_wpm = v; }
        if cli.timing                       { self.show_timing    = true; }
        if cli.no_strict                    { self.strict_separator = false; }
    }

    pub fn codec(&self) -> Result<Codec<'static>> {
        if self.strict_separator {
            Codec::new(&self.separator)
                .with_context(|| format!("Separator {:?}", self.separator))
        } else {
            Ok(Codec::unchecked(&self.separator))
        }
    }

    pub fn timing(&self) -> Timing {
        if self.farnsworth_wpm > 0 {
            Timing::farnsworth(self.wpm, self.farnsworth_wpm)
        } else {
            Timing::from_wpm(self.wpm)
        }
    }
}

fn default_config_path() -> PathBuf {
    config_dir().join("morse-codec").join("config.toml")
}

fn config_dir() -> PathBuf {
    if let Ok(v) = std::env::var("XDG_CONFIG_HOME") { return PathBuf::from(v); }
    if let Ok(v) = std::env::var("APPDATA")          { return PathBuf::from(v); }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_default();
    PathBuf::from(home).join(".config")
}
