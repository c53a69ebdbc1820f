use std::cell::RefCell;

use crate::client::{ClusterClient, RemoteExec};
use crate::error::{Error, Result};
use crate::picker::Picker;
use crate::pod::{render_displays, PodItem};

pub fn pod(namespace: &str, name: &str, ready: &str, phase: &str) -> PodItem {
    PodItem {
        name: name.to_string(),
        namespace: namespace.to_string(),
        ready: ready.to_string(),
        phase: phase.to_string(),
        display: String::new(),
    }
}

/// In-memory cluster. Pods are filtered by namespace the way the real
/// listing would be, and display lines are rendered on the way out.
#[derive(Debug, Default)]
pub struct FakeCluster {
    pub contexts: Vec<String>,
    pub current_context: String,
    pub current_context_fails: bool,
    pub namespace: String,
    pub pods: Vec<PodItem>,
    pub containers: Vec<String>,
    pub default_container: Option<String>,
    pub missing_binary: bool,
}

impl ClusterClient for FakeCluster {
    fn ensure_available(&self) -> Result<()> {
        if self.missing_binary {
            return Err(Error::ToolUnavailable { tool: "kubectl" });
        }
        Ok(())
    }

    async fn list_contexts(&self) -> Result<Vec<String>> {
        Ok(self.contexts.clone())
    }

    async fn current_context(&self) -> Result<String> {
        if self.current_context_fails {
            return Err(Error::CommandFailed {
                what: "kubectl config current-context",
                detail: "exit status 1".to_string(),
            });
        }
        Ok(self.current_context.clone())
    }

    async fn current_namespace(&self, _context: &str) -> Result<String> {
        Ok(self.namespace.clone())
    }

    async fn list_pods(
        &self,
        _context: &str,
        namespace: &str,
        _selector: &str,
        all_namespaces: bool,
    ) -> Result<Vec<PodItem>> {
        let mut pods: Vec<PodItem> = self
            .pods
            .iter()
            .filter(|pod| all_namespaces || pod.namespace == namespace)
            .cloned()
            .collect();
        render_displays(&mut pods, all_namespaces);
        Ok(pods)
    }

    async fn list_containers(
        &self,
        _context: &str,
        _namespace: &str,
        _pod: &str,
    ) -> Result<(Vec<String>, Option<String>)> {
        Ok((self.containers.clone(), self.default_container.clone()))
    }
}

/// Records every prompt and answers with a canned response.
#[derive(Debug, Default)]
pub struct FakePicker {
    pub response: Option<String>,
    pub calls: RefCell<Vec<PickCall>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickCall {
    pub items: Vec<String>,
    pub header: String,
}

impl FakePicker {
    pub fn answering(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
            ..Default::default()
        }
    }

    pub fn cancelling() -> Self {
        Self::default()
    }
}

impl Picker for FakePicker {
    async fn choose(&self, items: &[String], header: &str) -> Result<Option<String>> {
        self.calls.borrow_mut().push(PickCall {
            items: items.to_vec(),
            header: header.to_string(),
        });
        Ok(self.response.clone())
    }
}

/// Records exec handoffs instead of spawning kubectl.
#[derive(Debug, Default)]
pub struct FakeExec {
    pub calls: RefCell<Vec<ExecCall>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecCall {
    pub context: String,
    pub namespace: String,
    pub pod: String,
    pub container: String,
    pub command: Vec<String>,
    pub non_interactive: bool,
}

impl RemoteExec for FakeExec {
    async fn run_remote(
        &self,
        context: &str,
        namespace: &str,
        pod: &str,
        container: &str,
        command: &[String],
        non_interactive: bool,
    ) -> Result<()> {
        self.calls.borrow_mut().push(ExecCall {
            context: context.to_string(),
            namespace: namespace.to_string(),
            pod: pod.to_string(),
            container: container.to_string(),
            command: command.to_vec(),
            non_interactive,
        });
        Ok(())
    }
}
