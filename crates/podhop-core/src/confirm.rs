use std::io;

use crate::error::{Error, Result};
use crate::exec::stdio_is_tty;

/// True when the context or namespace names a protected environment. A
/// keyword only counts as a whole segment (split on -, _, . and /), so
/// "reproduce-bug" does not trip on "prod".
pub fn should_confirm(context: &str, namespace: &str, keywords: &[String]) -> bool {
    segment_matches(context, keywords) || segment_matches(namespace, keywords)
}

fn segment_matches(value: &str, keywords: &[String]) -> bool {
    let lower = value.to_lowercase();
    lower
        .split(['-', '_', '.', '/'])
        .any(|segment| keywords.iter().any(|keyword| segment == keyword.as_str()))
}

/// Interactive gate before the terminal is handed over. The caller must
/// type context/namespace back verbatim.
pub fn confirm(context: &str, namespace: &str) -> Result<()> {
    confirm_with(io::stdin().lock(), stdio_is_tty(), context, namespace)
}

fn confirm_with<R: io::BufRead>(
    mut input: R,
    tty: bool,
    context: &str,
    namespace: &str,
) -> Result<()> {
    if !tty {
        return Err(Error::ConfirmationRequired);
    }
    let expected = format!("{context}/{namespace}");
    eprint!("confirm context {context:?} namespace {namespace:?}: type {expected:?} to continue: ");
    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.trim() != expected {
        return Err(Error::ConfirmationFailed);
    }
    Ok(())
}
