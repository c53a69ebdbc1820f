use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::client::{ClusterClient, RemoteExec};
use crate::error::{Error, Result};
use crate::exec;
use crate::pod::{format_ready, render_displays, PodItem};

/// Metadata queries stay snappy; pod listings get more room on slow
/// clusters.
const TIMEOUT_DEFAULT: Duration = Duration::from_secs(5);
const TIMEOUT_PODS: Duration = Duration::from_secs(15);

const POD_COLUMNS: &str =
    "custom-columns=NAME:.metadata.name,READY:.status.containerStatuses[*].ready,STATUS:.status.phase";
const POD_COLUMNS_ALL: &str =
    "custom-columns=NAMESPACE:.metadata.namespace,NAME:.metadata.name,READY:.status.containerStatuses[*].ready,STATUS:.status.phase";

/// First line is the default-container annotation (may be blank), the rest
/// are container names.
const CONTAINER_JSONPATH: &str = r#"jsonpath={.metadata.annotations.kubectl\.kubernetes\.io/default-container}{"\n"}{range .spec.containers[*]}{.name}{"\n"}{end}"#;

/// Cluster access through the kubectl binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct Kubectl;

impl ClusterClient for Kubectl {
    fn ensure_available(&self) -> Result<()> {
        if find_in_path("kubectl").is_none() {
            return Err(Error::ToolUnavailable { tool: "kubectl" });
        }
        Ok(())
    }

    async fn list_contexts(&self) -> Result<Vec<String>> {
        let out = run_kubectl(
            "kubectl config get-contexts",
            TIMEOUT_DEFAULT,
            &["config", "get-contexts", "-o", "name"],
        )
        .await?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn current_context(&self) -> Result<String> {
        let out = run_kubectl(
            "kubectl config current-context",
            TIMEOUT_DEFAULT,
            &["config", "current-context"],
        )
        .await?;
        Ok(out.trim().to_string())
    }

    async fn current_namespace(&self, context: &str) -> Result<String> {
        let args = [
            "config",
            "view",
            "--minify",
            "--output",
            "jsonpath={..namespace}",
        ];
        let args = with_context(context, &args);
        let out = run_kubectl("kubectl config view", TIMEOUT_DEFAULT, &args).await?;
        Ok(out.trim().to_string())
    }

    async fn list_pods(
        &self,
        context: &str,
        namespace: &str,
        selector: &str,
        all_namespaces: bool,
    ) -> Result<Vec<PodItem>> {
        let mut args = vec!["get", "pods", "-o"];
        if all_namespaces {
            args.push(POD_COLUMNS_ALL);
            args.push("--no-headers");
            args.push("--all-namespaces");
        } else {
            args.push(POD_COLUMNS);
            args.push("--no-headers");
            if !namespace.is_empty() {
                args.push("-n");
                args.push(namespace);
            }
        }
        if !selector.is_empty() {
            args.push("-l");
            args.push(selector);
        }
        let args = with_context(context, &args);
        let out = run_kubectl("kubectl get pods", TIMEOUT_PODS, &args).await?;
        Ok(parse_pod_listing(&out, all_namespaces))
    }

    async fn list_containers(
        &self,
        context: &str,
        namespace: &str,
        pod: &str,
    ) -> Result<(Vec<String>, Option<String>)> {
        let mut args = vec!["get", "pod", pod, "-o", CONTAINER_JSONPATH];
        if !namespace.is_empty() {
            args.push("-n");
            args.push(namespace);
        }
        let args = with_context(context, &args);
        let out = run_kubectl("kubectl get pod", TIMEOUT_DEFAULT, &args).await?;
        Ok(parse_containers(&out))
    }
}

impl RemoteExec for Kubectl {
    async fn run_remote(
        &self,
        context: &str,
        namespace: &str,
        pod: &str,
        container: &str,
        command: &[String],
        non_interactive: bool,
    ) -> Result<()> {
        let args = exec::exec_args(
            context,
            namespace,
            pod,
            container,
            command,
            non_interactive,
            exec::stdio_is_tty(),
        );
        tracing::debug!(?args, "handing the terminal to kubectl exec");
        let status = Command::new("kubectl")
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(spawn_error)?;
        if !status.success() {
            let detail = match status.code() {
                Some(code) => format!("exit status {code}"),
                None => "terminated by signal".to_string(),
            };
            return Err(Error::CommandFailed {
                what: "kubectl exec",
                detail,
            });
        }
        Ok(())
    }
}

async fn run_kubectl(what: &'static str, timeout: Duration, args: &[&str]) -> Result<String> {
    tracing::debug!(?args, "running kubectl");
    let mut command = Command::new("kubectl");
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    let output = match tokio::time::timeout(timeout, command.output()).await {
        Ok(result) => result.map_err(spawn_error)?,
        Err(_) => {
            return Err(Error::Timeout {
                secs: timeout.as_secs(),
            })
        }
    };
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let trimmed = stderr.trim();
        let detail = if trimmed.is_empty() {
            match output.status.code() {
                Some(code) => format!("exit status {code}"),
                None => "terminated by signal".to_string(),
            }
        } else {
            trimmed.to_string()
        };
        return Err(Error::CommandFailed { what, detail });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn spawn_error(err: std::io::Error) -> Error {
    if err.kind() == ErrorKind::NotFound {
        Error::ToolUnavailable { tool: "kubectl" }
    } else {
        Error::Io(err)
    }
}

fn with_context<'a>(context: &'a str, args: &[&'a str]) -> Vec<&'a str> {
    if context.is_empty() {
        return args.to_vec();
    }
    let mut full = vec!["--context", context];
    full.extend_from_slice(args);
    full
}

fn parse_pod_listing(raw: &str, with_namespace: bool) -> Vec<PodItem> {
    let mut pods = Vec::new();
    for line in raw.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let namespace = if with_namespace {
            match fields.next() {
                Some(namespace) => namespace.to_string(),
                None => continue,
            }
        } else {
            String::new()
        };
        let Some(name) = fields.next() else {
            continue;
        };
        let ready = format_ready(fields.next().unwrap_or(""));
        let phase = fields.next().unwrap_or("").to_string();
        pods.push(PodItem {
            name: name.to_string(),
            namespace,
            ready,
            phase,
            display: String::new(),
        });
    }
    render_displays(&mut pods, with_namespace);
    pods
}

fn parse_containers(raw: &str) -> (Vec<String>, Option<String>) {
    let raw = raw.trim_end_matches('\n');
    let mut lines = raw.lines();
    let declared = lines
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string);
    let containers: Vec<String> = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    (containers, declared)
}

fn find_in_path(binary: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path) {
        let candidate = dir.join(binary);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
