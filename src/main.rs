// src/main.rs

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use burrow::{
    app::App,
    config::Config,
    fs::{check_storage_access, resolve_entries, Entry, StorageAccess},
    open::{Dispatcher, SystemLauncher},
    ui,
};

/// Browse storage and open files with the system viewer.
#[derive(Debug, Parser)]
#[command(name = "burrow", version)]
struct Cli {
    /// Directory to list (or, with --dispatch, the entry to open)
    path: Option<PathBuf>,

    /// Config file (default: <config dir>/burrow/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Storage root that default locations resolve against
    #[arg(long)]
    root: Option<PathBuf>,

    /// Print the sorted listing and exit
    #[arg(long, conflicts_with = "dispatch")]
    list: bool,

    /// Print how PATH would be opened and exit
    #[arg(long, requires = "path")]
    dispatch: bool,
}

impl Cli {
    /// Listing modes read the storage root; `--dispatch` only looks at PATH.
    fn needs_storage_access(&self) -> bool {
        !self.dispatch
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = !cli.list && !cli.dispatch;
    init_tracing(interactive)?;

    let config = Config::load(cli.config.as_deref())?;
    let root = cli.root.clone().unwrap_or_else(|| config.storage_root());

    if cli.dispatch {
        if let Some(path) = &cli.path {
            let entry = Entry::from_path(absolute(path)?);
            println!("{}", Dispatcher::new().dispatch(&entry));
        }
        return Ok(());
    }

    if cli.needs_storage_access() {
        if let StorageAccess::Denied { reason } = check_storage_access(&root) {
            bail!(
                "no access to storage root: {reason}\n\
                 grant read access to it, or pick another root with --root or `storage_root` in the config"
            );
        }
    }

    let start = cli.path.as_deref().map(absolute).transpose()?;

    if cli.list {
        for entry in resolve_entries(start.as_deref(), &root, &config.default_locations) {
            let suffix = if entry.is_dir { "/" } else { "" };
            println!("{}{}", entry.name, suffix);
        }
        return Ok(());
    }

    info!(root = %root.display(), start = ?start, "starting burrow");
    let app = App::new(root, config.default_locations.clone(), start);
    let launcher = SystemLauncher::from_config(&config.opener);
    ui::run(app, &launcher)
}

fn absolute(path: &std::path::Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("invalid path: {}", path.display()))
}

/// Interactive sessions own the terminal, so they log to a file in the cache
/// directory; one-shot commands log to stderr.
fn init_tracing(interactive: bool) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_env("BURROW_LOG").or_else(|_| EnvFilter::try_new("info"))?;

    if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(());
    }

    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("burrow");
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory: {}", dir.display()))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("burrow.log"))
        .context("failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_skips_storage_check() {
        let cli = Cli::try_parse_from(["burrow", "--dispatch", "/sd/doc.pdf"]).unwrap();
        assert!(!cli.needs_storage_access());
    }

    #[test]
    fn listing_modes_check_storage() {
        for args in [vec!["burrow"], vec!["burrow", "--list"], vec!["burrow", "/sd/Movies"]] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(cli.needs_storage_access());
        }
    }

    #[test]
    fn dispatch_requires_a_path() {
        assert!(Cli::try_parse_from(["burrow", "--dispatch"]).is_err());
    }
}
