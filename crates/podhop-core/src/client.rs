use crate::error::Result;
use crate::pod::PodItem;

/// Read-only cluster queries. Implemented by the kubectl adapter and by
/// in-memory fakes in tests.
#[allow(async_fn_in_trait)]
pub trait ClusterClient {
    /// Checks that the backing tool exists before any query runs.
    fn ensure_available(&self) -> Result<()>;

    async fn list_contexts(&self) -> Result<Vec<String>>;

    async fn current_context(&self) -> Result<String>;

    async fn current_namespace(&self, context: &str) -> Result<String>;

    /// Lists pods with rendered display lines. `namespace` is ignored when
    /// `all_namespaces` is set.
    async fn list_pods(
        &self,
        context: &str,
        namespace: &str,
        selector: &str,
        all_namespaces: bool,
    ) -> Result<Vec<PodItem>>;

    /// Containers of one pod, plus the declared default container if the
    /// pod carries the annotation.
    async fn list_containers(
        &self,
        context: &str,
        namespace: &str,
        pod: &str,
    ) -> Result<(Vec<String>, Option<String>)>;
}

/// Hands the terminal over to a remote shell or command.
#[allow(async_fn_in_trait)]
pub trait RemoteExec {
    async fn run_remote(
        &self,
        context: &str,
        namespace: &str,
        pod: &str,
        container: &str,
        command: &[String],
        non_interactive: bool,
    ) -> Result<()>;
}
