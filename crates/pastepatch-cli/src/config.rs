use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use pastepatch_core::TrackedRoot;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_TEMPLATE: &str = r#"# Directories that relative patch paths resolve against, in priority order.
# The first one also receives new files whose path exists under no root.
# `~` and environment variables are expanded.
roots = []

# Replaces the built-in format instructions printed by `pastepatch prompt`.
# system_prompt = "..."
"#;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    #[serde(alias = "directories")]
    pub roots: Vec<String>,
    pub system_prompt: Option<String>,
}

impl Config {
    /// A missing file is seeded from the commented template before loading.
    pub fn load(args: &Args) -> Result<Self> {
        if args.ignore_config {
            return Ok(Self::default());
        }

        let path = match &args.config {
            Some(path) => path.clone(),
            None => default_config_path()?,
        };
        if !path.exists() {
            seed_template(&path)?;
        }
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {:?}", path))?;
        toml::from_str(&text).with_context(|| format!("Invalid config file {:?}", path))
    }

    pub fn tracked_roots(&self) -> Vec<TrackedRoot> {
        expand_roots(&self.roots)
    }

    /// Roots given on the command line replace the configured ones.
    pub fn roots_for(&self, cli_roots: Option<&[String]>) -> Vec<TrackedRoot> {
        match cli_roots {
            Some(roots) => expand_roots(roots),
            None => self.tracked_roots(),
        }
    }
}

fn default_config_path() -> Result<PathBuf> {
    ProjectDirs::from("", "", "pastepatch")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or_else(|| anyhow!("No home directory; pass --config or --ignore-config"))
}

fn seed_template(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory at {:?}", parent))?;
    }
    fs::write(path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config template to {:?}", path))?;
    log::info!("Wrote config template to {:?}", path);
    Ok(())
}

fn expand_roots(roots: &[String]) -> Vec<TrackedRoot> {
    roots
        .iter()
        .map(|raw| {
            let expanded = shellexpand::full(raw)
                .map(|s| s.into_owned())
                .unwrap_or_else(|e| {
                    log::warn!("Could not expand root '{}': {}", raw, e);
                    raw.clone()
                });
            TrackedRoot::from_path(expanded)
        })
        .collect()
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the format instructions to paste into a model
    pastepatch prompt

    # Bundle files with instructions
    pastepatch bundle --context "Add input validation" src/app.py src/util.py

    # Apply a saved model response against two project roots
    pastepatch apply response.md --root ~/code/api --root ~/code/web

    # Pipe a response from the clipboard
    wl-paste | pastepatch apply

CONFIG:
    Default config location: ~/.config/pastepatch/config.toml
    Use --ignore-config to use built-in defaults instead."#)]
pub struct Args {
    #[arg(
        short,
        long,
        global = true,
        help = "Path to config file [default: ~/.config/pastepatch/config.toml]"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Use built-in defaults, ignore config file")]
    pub ignore_config: bool,

    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug)"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Apply the changes described in a model response
    Apply {
        #[arg(help = "File holding the response text [default: read stdin]")]
        patch_file: Option<PathBuf>,

        #[arg(
            short,
            long = "root",
            value_name = "DIR",
            help = "Tracked root, repeatable, first one is the default [default: from config]"
        )]
        roots: Option<Vec<String>>,
    },

    /// Print the format instructions for the model
    Prompt,

    /// Print a context bundle of instructions and file contents
    Bundle {
        #[arg(long, default_value = "", help = "Free-form instructions placed above the files")]
        context: String,

        #[arg(num_args = 0.., help = "Files to include")]
        files: Vec<PathBuf>,
    },
}
