use podhop_config::Settings;

use crate::client::{ClusterClient, RemoteExec};
use crate::error::{Error, Result};
use crate::exec::{self, ExecTarget};
use crate::picker::Picker;
use crate::resolve;

/// One invocation as assembled by the CLI layer. `context` distinguishes
/// "not given" from "given without a value": the latter opens the picker.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub context: Option<String>,
    pub namespace: String,
    pub container: String,
    pub selector: String,
    pub pod: String,
    pub command: Vec<String>,
    pub all_namespaces: bool,
    pub dry_run: bool,
}

/// Resolves context, namespace, pod and container in order, then hands the
/// terminal over (or prints the invocation under --dry-run).
pub async fn run<C, P, E>(
    cluster: &C,
    picker: &P,
    execer: &E,
    settings: &Settings,
    request: &RunRequest,
) -> Result<()>
where
    C: ClusterClient,
    P: Picker,
    E: RemoteExec,
{
    cluster.ensure_available()?;

    let context = match &request.context {
        Some(query) => resolve::resolve_context(cluster, picker, settings, query).await?,
        None if request.namespace.is_empty() => {
            let context = cluster.current_context().await?;
            if context.is_empty() {
                return Err(Error::NotFound("no kubernetes context is set".to_string()));
            }
            context
        }
        // With an explicit namespace kubectl can still run off the
        // kubeconfig default context.
        None => cluster.current_context().await.unwrap_or_default(),
    };

    let namespace = if request.all_namespaces {
        String::new()
    } else if !request.namespace.is_empty() {
        request.namespace.clone()
    } else {
        resolve::resolve_namespace(cluster, &context).await?
    };

    let pods = cluster
        .list_pods(&context, &namespace, &request.selector, request.all_namespaces)
        .await?;
    if pods.is_empty() {
        return Err(Error::NotFound("no pods found".to_string()));
    }

    let pod = resolve::select_pod(
        picker,
        settings,
        &pods,
        &request.pod,
        request.all_namespaces,
        &context,
        &namespace,
        &request.selector,
    )
    .await?;
    let namespace = if request.all_namespaces {
        pod.namespace.clone()
    } else {
        namespace
    };
    let pod_name = pod.name.clone();

    let container = resolve::resolve_container(
        cluster,
        picker,
        settings,
        &context,
        &namespace,
        &pod_name,
        &request.container,
    )
    .await?;

    let target = ExecTarget {
        context,
        namespace,
        pod: pod_name,
        container,
    };
    tracing::debug!(?target, "resolved exec target");
    exec::dispatch(execer, settings, &target, &request.command, request.dry_run).await
}
