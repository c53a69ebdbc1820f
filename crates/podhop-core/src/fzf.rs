use std::io::ErrorKind;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::{Error, Result};
use crate::picker::Picker;

/// Picker backed by the fzf binary. Cancel (exit 1 or 130) surfaces as
/// no choice rather than an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FzfPicker;

impl Picker for FzfPicker {
    async fn choose(&self, items: &[String], header: &str) -> Result<Option<String>> {
        let mut args = vec!["--ansi", "--no-preview"];
        if !header.is_empty() {
            args.push("--header");
            args.push(header);
        }
        tracing::debug!(items = items.len(), %header, "spawning fzf");
        let mut child = Command::new("fzf")
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|err| {
                if err.kind() == ErrorKind::NotFound {
                    Error::ToolUnavailable { tool: "fzf" }
                } else {
                    Error::Io(err)
                }
            })?;

        let input = format!("{}\n", items.join("\n"));
        if let Some(mut stdin) = child.stdin.take() {
            // fzf can exit before draining stdin; the exit status decides.
            let _ = stdin.write_all(input.as_bytes()).await;
        }

        let output = child.wait_with_output().await?;
        match output.status.code() {
            Some(0) => {
                let choice = String::from_utf8_lossy(&output.stdout).trim().to_string();
                Ok(Some(choice))
            }
            Some(1) | Some(130) => Ok(None),
            Some(code) => Err(Error::CommandFailed {
                what: "fzf",
                detail: format!("exit status {code}"),
            }),
            None => Err(Error::CommandFailed {
                what: "fzf",
                detail: "terminated by signal".to_string(),
            }),
        }
    }
}
