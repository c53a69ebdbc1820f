mod args;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use podhop_config::Settings;
use podhop_core::{run, FzfPicker, Kubectl};

use crate::args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = match Settings::resolve(&args.overrides()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };
    let request = args.into_request();
    tracing::debug!(?settings, ?request, "starting");

    let kubectl = Kubectl;
    let picker = FzfPicker;
    if let Err(err) = run(&kubectl, &picker, &kubectl, &settings, &request).await {
        eprintln!("error: {err}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
