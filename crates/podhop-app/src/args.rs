use clap::Parser;
use podhop_config::SettingOverrides;
use podhop_core::RunRequest;

/// Exec into a kubernetes pod, resolving context, namespace, pod and
/// container from partial input.
#[derive(Debug, Parser)]
#[command(name = "podhop", version, about)]
pub struct Args {
    /// Context name or substring; without a value, pick from a list
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub context: Option<String>,

    /// Namespace (defaults to the kubeconfig namespace)
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Container name (defaults to the pod's default container)
    #[arg(short = 'c', long)]
    pub container: Option<String>,

    /// Label selector for pods (e.g. app=api)
    #[arg(short = 'l', long)]
    pub selector: Option<String>,

    /// List pods across all namespaces; POD may be NAMESPACE/POD
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,

    /// Print the kubectl command without executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Confirm when the context or namespace looks protected
    /// (env: PODHOP_CONFIRM_CONTEXT)
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = true,
        value_parser = parse_bool_value,
    )]
    pub confirm_context: Option<bool>,

    /// Run without stdin (no -i), useful for scripts
    /// (env: PODHOP_NON_INTERACTIVE)
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = true,
        value_parser = parse_bool_value,
    )]
    pub non_interactive: Option<bool>,

    /// Pod name or substring
    pub pod: Option<String>,

    /// Command to run in the container instead of a shell
    #[arg(last = true)]
    pub command: Vec<String>,
}

impl Args {
    /// Flag-level settings; ignore-fzf has no flag and comes from the
    /// environment or the config file only.
    pub fn overrides(&self) -> SettingOverrides {
        SettingOverrides {
            confirm_context: self.confirm_context,
            non_interactive: self.non_interactive,
            ignore_fzf: None,
        }
    }

    pub fn into_request(self) -> RunRequest {
        RunRequest {
            context: self.context,
            namespace: self.namespace.unwrap_or_default(),
            container: self.container.unwrap_or_default(),
            selector: self.selector.unwrap_or_default(),
            pod: self.pod.unwrap_or_default(),
            command: self.command,
            all_namespaces: self.all_namespaces,
            dry_run: self.dry_run,
        }
    }
}

fn parse_bool_value(raw: &str) -> Result<bool, String> {
    podhop_config::parse_bool(raw).ok_or_else(|| {
        format!("invalid value {raw:?} (use true/True/1/on/ON/false/False/0/off/OFF)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn bare_context_flag_means_pick_from_a_list() {
        let args = parse(&["podhop", "--context"]);
        assert_eq!(args.context.as_deref(), Some(""));
    }

    #[test]
    fn context_consumes_the_next_value() {
        let args = parse(&["podhop", "--context", "dev", "api"]);
        assert_eq!(args.context.as_deref(), Some("dev"));
        assert_eq!(args.pod.as_deref(), Some("api"));
    }

    #[test]
    fn context_before_another_flag_stays_empty() {
        let args = parse(&["podhop", "--context", "--dry-run"]);
        assert_eq!(args.context.as_deref(), Some(""));
        assert!(args.dry_run);
    }

    #[test]
    fn absent_context_flag_is_none() {
        let args = parse(&["podhop", "api"]);
        assert_eq!(args.context, None);
        assert_eq!(args.pod.as_deref(), Some("api"));
    }

    #[test]
    fn command_follows_the_separator() {
        let args = parse(&["podhop", "api", "--", "ls", "-la", "/"]);
        assert_eq!(args.pod.as_deref(), Some("api"));
        assert_eq!(args.command, vec!["ls", "-la", "/"]);
    }

    #[test]
    fn command_without_a_pod() {
        let args = parse(&["podhop", "--", "env"]);
        assert_eq!(args.pod, None);
        assert_eq!(args.command, vec!["env"]);
    }

    #[test]
    fn bool_flags_accept_the_shared_vocabulary() {
        let args = parse(&["podhop", "--confirm-context"]);
        assert_eq!(args.confirm_context, Some(true));

        let args = parse(&["podhop", "--confirm-context=false"]);
        assert_eq!(args.confirm_context, Some(false));

        let args = parse(&["podhop", "--non-interactive=1"]);
        assert_eq!(args.non_interactive, Some(true));

        let args = parse(&["podhop", "--non-interactive=OFF"]);
        assert_eq!(args.non_interactive, Some(false));
    }

    #[test]
    fn bool_flags_require_equals_for_values() {
        let args = parse(&["podhop", "--confirm-context", "api"]);
        assert_eq!(args.confirm_context, Some(true));
        assert_eq!(args.pod.as_deref(), Some("api"));
    }

    #[test]
    fn invalid_bool_value_is_rejected() {
        let err = Args::try_parse_from(["podhop", "--confirm-context=yes"]).unwrap_err();
        assert!(err.to_string().contains("invalid value \"yes\""));
    }

    #[test]
    fn all_namespaces_pairs_with_a_slash_argument() {
        let args = parse(&["podhop", "-A", "edge/api-7f9"]);
        assert!(args.all_namespaces);
        assert_eq!(args.pod.as_deref(), Some("edge/api-7f9"));
    }

    #[test]
    fn a_second_positional_is_rejected() {
        assert!(Args::try_parse_from(["podhop", "api", "web"]).is_err());
    }

    #[test]
    fn overrides_never_carry_ignore_fzf() {
        let args = parse(&["podhop", "--confirm-context", "--non-interactive=false"]);
        let overrides = args.overrides();
        assert_eq!(overrides.confirm_context, Some(true));
        assert_eq!(overrides.non_interactive, Some(false));
        assert_eq!(overrides.ignore_fzf, None);
    }

    #[test]
    fn request_carries_defaults_for_absent_flags() {
        let request = parse(&["podhop"]).into_request();
        assert_eq!(request.context, None);
        assert_eq!(request.namespace, "");
        assert_eq!(request.container, "");
        assert_eq!(request.selector, "");
        assert_eq!(request.pod, "");
        assert!(request.command.is_empty());
        assert!(!request.all_namespaces);
        assert!(!request.dry_run);
    }

    #[test]
    fn request_threads_every_field() {
        let request = parse(&[
            "podhop",
            "--context=dev",
            "-n",
            "edge",
            "-c",
            "app",
            "-l",
            "app=api",
            "--dry-run",
            "api",
            "--",
            "ls",
        ])
        .into_request();
        assert_eq!(request.context.as_deref(), Some("dev"));
        assert_eq!(request.namespace, "edge");
        assert_eq!(request.container, "app");
        assert_eq!(request.selector, "app=api");
        assert_eq!(request.pod, "api");
        assert_eq!(request.command, vec!["ls"]);
        assert!(request.dry_run);
    }
}
