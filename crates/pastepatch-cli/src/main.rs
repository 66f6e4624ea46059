mod config;

use anyhow::{bail, Context, Result};
use clap::Parser;
use config::{Args, Command, Config};
use pastepatch_core::{apply_patch_text, build_bundle, system_prompt, Summary};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::load(&args)?;

    match args.command {
        Command::Apply { patch_file, roots } => {
            let code = run_apply(patch_file.as_deref(), roots, &config)?;
            if code != 0 {
                process::exit(code);
            }
        }
        Command::Prompt => {
            let prompt = config.system_prompt.unwrap_or_else(system_prompt);
            println!("{}", prompt);
        }
        Command::Bundle { context, files } => {
            let files: Vec<PathBuf> = files
                .into_iter()
                .filter(|f| {
                    if f.is_dir() {
                        log::warn!("Skipping directory {:?}; list files explicitly", f);
                        false
                    } else {
                        true
                    }
                })
                .collect();
            println!("{}", build_bundle(&context, &files));
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn read_patch_text(patch_file: Option<&Path>) -> Result<String> {
    let text = if let Some(path) = patch_file {
        fs::read_to_string(path)
            .with_context(|| format!("Patch file not found at {:?}", path))?
    } else {
        if atty::is(atty::Stream::Stdin) {
            bail!("No patch file specified and no data piped from stdin.");
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read patch text from stdin")?;
        buffer
    };

    if text.trim().is_empty() {
        bail!("Empty patch content.");
    }
    Ok(text)
}

fn run_apply(patch_file: Option<&Path>, roots: Option<Vec<String>>, config: &Config) -> Result<i32> {
    let text = read_patch_text(patch_file)?;

    let roots = config.roots_for(roots.as_deref());
    if roots.is_empty() {
        log::warn!("No tracked roots; only absolute paths can be applied");
    }

    let outcomes = apply_patch_text(&text, &roots);
    if outcomes.is_empty() {
        println!("No valid patterns found in the input.");
        return Ok(0);
    }

    for outcome in &outcomes {
        println!("{}", outcome);
    }

    let summary = Summary::from_outcomes(&outcomes);
    println!("\n--- Summary ---");
    println!("Total changes:        {}", summary.total);
    println!("Successfully applied: {}", summary.succeeded);
    println!("Failed to apply:      {}", summary.failed);

    Ok(if summary.failed > 0 { 1 } else { 0 })
}
