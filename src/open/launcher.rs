// src/open/launcher.rs
//! Hands files to the system's external viewer.

use std::{
    process::{Command, Stdio},
    thread,
};

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::config::OpenerConfig;

/// Environment variable carrying the resolved MIME type to the opener.
pub const MIME_ENV: &str = "BURROW_MIME_TYPE";

/// Something that can show a content URI to the user.
pub trait Launcher {
    /// Open `uri`. With `new_task` the viewer is detached and this returns
    /// immediately; otherwise it blocks until the viewer exits.
    fn view(&self, uri: &str, mime_type: &str, new_task: bool) -> Result<()>;
}

/// Runs an opener command such as `xdg-open <uri>`.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    program: String,
    args: Vec<String>,
}

impl SystemLauncher {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &OpenerConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }

    fn command(&self, uri: &str, mime_type: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(uri).env(MIME_ENV, mime_type);
        cmd
    }

    /// Start `cmd` without waiting for it. A background thread waits on the
    /// child so it is reaped when it exits. Returns the child's pid.
    fn spawn_detached(&self, mut cmd: Command) -> Result<u32> {
        let mut child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to start {}", self.program))?;
        let pid = child.id();
        thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(pid)
    }
}

impl Default for SystemLauncher {
    fn default() -> Self {
        Self::from_config(&OpenerConfig::default())
    }
}

impl Launcher for SystemLauncher {
    fn view(&self, uri: &str, mime_type: &str, new_task: bool) -> Result<()> {
        info!(program = %self.program, %uri, %mime_type, new_task, "launching viewer");
        let mut cmd = self.command(uri, mime_type);

        if new_task {
            self.spawn_detached(cmd)?;
            return Ok(());
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to run {}", self.program))?;
        if !status.success() {
            bail!("{} exited with {}", self.program, status);
        }
        Ok(())
    }
}
