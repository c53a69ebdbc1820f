pub mod client;
pub mod confirm;
pub mod error;
pub mod exec;
pub mod fzf;
pub mod kubectl;
pub mod picker;
pub mod pod;
pub mod resolve;
pub mod run;

#[cfg(test)]
mod testing;

pub use client::{ClusterClient, RemoteExec};
pub use error::Error;
pub use exec::ExecTarget;
pub use fzf::FzfPicker;
pub use kubectl::Kubectl;
pub use picker::Picker;
pub use pod::PodItem;
pub use run::{run, RunRequest};
