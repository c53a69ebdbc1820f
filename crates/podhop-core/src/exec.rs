use std::io;

use crossterm::tty::IsTty;
use podhop_config::Settings;

use crate::client::RemoteExec;
use crate::confirm;
use crate::error::Result;

/// Fully resolved destination of one exec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecTarget {
    pub context: String,
    pub namespace: String,
    pub pod: String,
    pub container: String,
}

/// Started when no command is given: prefer bash, fall back to sh.
pub const DEFAULT_SHELL_COMMAND: &str = "command -v bash >/dev/null 2>&1 && exec bash || exec sh";

pub fn stdio_is_tty() -> bool {
    io::stdin().is_tty() && io::stdout().is_tty()
}

/// Argument vector for kubectl exec. `-i` is dropped in non-interactive
/// mode; `-t` tracks the terminal alone.
pub fn exec_args(
    context: &str,
    namespace: &str,
    pod: &str,
    container: &str,
    command: &[String],
    non_interactive: bool,
    tty: bool,
) -> Vec<String> {
    let mut args = Vec::new();
    if !context.is_empty() {
        args.push("--context".to_string());
        args.push(context.to_string());
    }
    args.push("exec".to_string());
    if !non_interactive {
        args.push("-i".to_string());
    }
    if tty {
        args.push("-t".to_string());
    }
    if !namespace.is_empty() {
        args.push("-n".to_string());
        args.push(namespace.to_string());
    }
    args.push(pod.to_string());
    if !container.is_empty() {
        args.push("-c".to_string());
        args.push(container.to_string());
    }
    args.push("--".to_string());
    if command.is_empty() {
        args.push("sh".to_string());
        args.push("-c".to_string());
        args.push(DEFAULT_SHELL_COMMAND.to_string());
    } else {
        args.extend(command.iter().cloned());
    }
    args
}

/// Renders the invocation for --dry-run, quoting what a shell would
/// mangle.
pub fn render_command(args: &[String]) -> String {
    let mut rendered = String::from("kubectl");
    for arg in args {
        rendered.push(' ');
        rendered.push_str(&quote_arg(arg));
    }
    rendered
}

fn quote_arg(arg: &str) -> String {
    if !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,@%+".contains(c))
    {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

/// Prints the invocation under --dry-run; otherwise runs the confirm gate
/// when armed, then hands over the terminal.
pub async fn dispatch<E: RemoteExec>(
    execer: &E,
    settings: &Settings,
    target: &ExecTarget,
    command: &[String],
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        let args = exec_args(
            &target.context,
            &target.namespace,
            &target.pod,
            &target.container,
            command,
            settings.non_interactive,
            stdio_is_tty(),
        );
        println!("{}", render_command(&args));
        return Ok(());
    }
    if gate_armed(settings, target) {
        confirm::confirm(&target.context, &target.namespace)?;
    }
    execer
        .run_remote(
            &target.context,
            &target.namespace,
            &target.pod,
            &target.container,
            command,
            settings.non_interactive,
        )
        .await
}

/// Armed only when confirmation is enabled and the target names a
/// protected environment.
fn gate_armed(settings: &Settings, target: &ExecTarget) -> bool {
    settings.confirm_context
        && confirm::should_confirm(&target.context, &target.namespace, &settings.confirm_keywords)
}
