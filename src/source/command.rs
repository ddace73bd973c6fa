use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::BufReader;
use tokio::process::Command;
use tokio::sync::mpsc;

use crate::app::ResultEvent;
use crate::models::{ResultKind, TestResult};

use super::{ResultSource, forward_line, read_line_lossy};

/// Guard that kills the child process (and its entire process group) on drop.
struct ChildGuard {
    child: tokio::process::Child,
    /// Process group ID saved at spawn time so we can kill the whole group.
    #[cfg(unix)]
    pgid: Option<u32>,
}

impl ChildGuard {
    fn new(child: tokio::process::Child) -> Self {
        #[cfg(unix)]
        let pgid = child.id();
        Self {
            child,
            #[cfg(unix)]
            pgid,
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        // The group outlives a plain kill when the tool forks workers.
        #[cfg(unix)]
        if let Some(pgid) = self.pgid {
            unsafe { libc::kill(-(pgid as libc::pid_t), libc::SIGKILL) };
        }
        let _ = self.child.start_kill();
    }
}

/// Runs a reporter command and reads NDJSON result records from its stdout.
pub struct CommandSource {
    argv: Vec<String>,
    display: String,
}

impl CommandSource {
    pub fn new(argv: Vec<String>) -> Self {
        let display = shell_words::join(&argv);
        Self { argv, display }
    }
}

#[async_trait]
impl ResultSource for CommandSource {
    async fn stream(&self, tx: mpsc::UnboundedSender<ResultEvent>) -> Result<()> {
        let (program, args) = self
            .argv
            .split_first()
            .context("no command given")?;

        let mut cmd = Command::new(program);
        cmd.args(args);
        tracing::debug!(command = %self.display, "spawning result source");

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.as_std_mut().process_group(0);
        }

        let mut child = cmd
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to spawn `{}`", self.display))?;

        let stdout = child.stdout.take().context("missing stdout")?;
        let stderr = child.stderr.take().context("missing stderr")?;

        // Stays in the guard so the group dies if this future is dropped mid-run.
        let mut child_guard = ChildGuard::new(child);

        let _ = tx.send(ResultEvent::Started {
            source: self.display.clone(),
        });

        // Anything on stderr is tool chatter, shown as debug messages.
        let tx_err = tx.clone();
        let stderr_handle = tokio::spawn(async move {
            let mut reader = BufReader::new(stderr);
            let mut buf = Vec::new();
            while let Ok(Some(line)) = read_line_lossy(&mut reader, &mut buf).await {
                if line.trim().is_empty() {
                    continue;
                }
                tracing::debug!(line = %line, "[stderr]");
                let result = TestResult::faulty(ResultKind::MessageDebug, line);
                if tx_err.send(ResultEvent::Result(result)).is_err() {
                    break;
                }
            }
        });

        let mut reader = BufReader::new(stdout);
        let mut buf = Vec::new();
        while let Some(line) = read_line_lossy(&mut reader, &mut buf)
            .await
            .context("failed to read result source output")?
        {
            if !forward_line(&line, &tx) {
                return Ok(());
            }
        }

        stderr_handle.await.ok();

        let status = child_guard
            .child
            .wait()
            .await
            .context("failed to wait for result source")?;
        if !status.success() {
            let _ = tx.send(ResultEvent::Error {
                message: format!(
                    "`{}` exited with code {}",
                    self.display,
                    status.code().unwrap_or(-1)
                ),
            });
        }

        let _ = tx.send(ResultEvent::Finished);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.display
    }
}
