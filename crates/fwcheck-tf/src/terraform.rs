use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::error::OutputError;
use crate::outputs::{OutputSet, OutputSource};

// ── TerraformOutputs ──────────────────────────────────────────────────────────

/// Reads outputs from an already-applied Terraform (or OpenTofu) working
/// directory by running `<binary> output -json`.
///
/// The command runs lazily on the first lookup and its result is cached for
/// the lifetime of the value, so a check that never gets as far as reading
/// outputs never spawns the binary.
pub struct TerraformOutputs {
    binary:  String,
    dir:     PathBuf,
    timeout: Duration,
    cache:   OnceCell<OutputSet>,
}

impl TerraformOutputs {
    pub fn new(binary: impl Into<String>, dir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            dir: dir.into(),
            timeout,
            cache: OnceCell::new(),
        }
    }

    /// All outputs, running the binary on first use.
    pub async fn load(&self) -> Result<&OutputSet, OutputError> {
        self.cache.get_or_try_init(|| self.read_outputs()).await
    }

    async fn read_outputs(&self) -> Result<OutputSet, OutputError> {
        let stdout = self.run_tf(&["output", "-json", "-no-color"]).await?;
        let set = OutputSet::from_json(&stdout)?;
        debug!(count = set.names().count(), "terraform outputs loaded");
        Ok(set)
    }

    // ── Process execution ─────────────────────────────────────────────────────

    /// Run a terraform sub-command and return its stdout. stderr is mirrored
    /// to tracing and included in the error on non-zero exit.
    async fn run_tf(&self, args: &[&str]) -> Result<String, OutputError> {
        let binary = self.binary.as_str();
        info!(binary, ?args, dir = %self.dir.display(), "running IaC command");

        let mut cmd = Command::new(binary);
        cmd.args(args)
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Disable interactive prompts and colour
            .env("TF_IN_AUTOMATION", "1")
            .env("TF_INPUT", "0")
            .kill_on_drop(true);

        let child = cmd
            .spawn()
            .map_err(|e| OutputError::Command(format!("spawn {}: {}", binary, e)))?;

        // On timeout the child is dropped, and kill_on_drop terminates it.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(res) => res.map_err(|e| OutputError::Command(format!("wait {}: {}", binary, e)))?,
            Err(_) => {
                return Err(OutputError::Command(format!(
                    "{} {} timed out after {} seconds",
                    binary,
                    args.first().copied().unwrap_or(""),
                    self.timeout.as_secs(),
                )));
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines() {
            debug!(target: "fwcheck::iac", "{}", line);
        }

        let code = output.status.code().unwrap_or(-1);
        if code != 0 {
            warn!(binary, code, "IaC command exited non-zero");
            return Err(OutputError::Command(format!(
                "{} {} exited with code {}: {}",
                binary,
                args.join(" "),
                code,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| OutputError::Parse(format!("{} output is not UTF-8: {}", binary, e)))
    }
}

#[async_trait]
impl OutputSource for TerraformOutputs {
    async fn output(&self, key: &str) -> Result<String, OutputError> {
        self.load().await?.get_str(key)
    }

    async fn output_map(&self, key: &str) -> Result<BTreeMap<String, String>, OutputError> {
        self.load().await?.get_map(key)
    }
}
