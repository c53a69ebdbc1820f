use podhop_config::Settings;

use crate::client::ClusterClient;
use crate::error::{Error, Result};
use crate::picker::Picker;
use crate::pod::{
    filter_pods_by_query, find_pod_by_name, find_pod_in_namespace, pod_displays, pod_from_choice,
    split_pod_namespace_arg, PodItem,
};

/// Resolves a context query to a context name. Exact matches win, a single
/// substring match is taken directly, several open the picker. An empty
/// query opens the picker over the full list.
pub async fn resolve_context<C: ClusterClient, P: Picker>(
    cluster: &C,
    picker: &P,
    settings: &Settings,
    query: &str,
) -> Result<String> {
    let contexts = cluster.list_contexts().await?;
    if contexts.is_empty() {
        return Err(Error::NotFound("no kubernetes contexts found".to_string()));
    }
    if query.is_empty() {
        return pick(picker, settings, &contexts, "", "context").await;
    }
    if contexts.iter().any(|context| context == query) {
        return Ok(query.to_string());
    }
    let mut matches: Vec<String> = contexts
        .iter()
        .filter(|context| context.contains(query))
        .cloned()
        .collect();
    match matches.len() {
        0 => Err(Error::NotFound(format!("no contexts match {query:?}"))),
        1 => Ok(matches.remove(0)),
        _ => {
            let header = format!("context query: {query}");
            pick(picker, settings, &matches, &header, "context").await
        }
    }
}

/// Namespace from the kubeconfig, with the cluster convention as fallback.
pub async fn resolve_namespace<C: ClusterClient>(cluster: &C, context: &str) -> Result<String> {
    let namespace = cluster.current_namespace(context).await?;
    if namespace.is_empty() {
        return Ok("default".to_string());
    }
    Ok(namespace)
}

/// Narrows the listing to one pod. Across all namespaces a NAMESPACE/POD
/// argument addresses a pod directly and a bare name never short-circuits,
/// since the same name can live in several namespaces.
#[allow(clippy::too_many_arguments)]
pub async fn select_pod<'a, P: Picker>(
    picker: &P,
    settings: &Settings,
    pods: &'a [PodItem],
    query: &str,
    all_namespaces: bool,
    context: &str,
    namespace: &str,
    selector: &str,
) -> Result<&'a PodItem> {
    if all_namespaces && query.contains('/') {
        let Some((target_namespace, name)) = split_pod_namespace_arg(query) else {
            return Err(Error::MalformedArgument(format!(
                "invalid pod argument {query:?} (expected NAMESPACE/POD)"
            )));
        };
        return find_pod_in_namespace(pods, target_namespace, name).ok_or_else(|| {
            Error::NotFound(format!(
                "pod {name:?} not found in namespace {target_namespace:?}"
            ))
        });
    }
    if query.is_empty() {
        let header = build_pod_header(context, namespace, selector, "", all_namespaces);
        let displays = pod_displays(pods);
        let choice = pick(picker, settings, &displays, &header, "pod").await?;
        return pod_from_choice(pods, &choice).ok_or(Error::NoSelection("pod"));
    }
    if !all_namespaces {
        if let Some(pod) = find_pod_by_name(pods, query) {
            return Ok(pod);
        }
    }
    let matches = filter_pods_by_query(pods, query);
    match matches.len() {
        0 => Err(Error::NotFound(format!("no pods match {query:?}"))),
        1 => Ok(matches[0]),
        _ => {
            let header = build_pod_header(
                context,
                namespace,
                selector,
                &format!("pod: {query}"),
                all_namespaces,
            );
            let displays: Vec<String> = matches
                .iter()
                .map(|pod| pod.display_line().to_string())
                .collect();
            let choice = pick(picker, settings, &displays, &header, "pod").await?;
            matches
                .into_iter()
                .find(|pod| pod.display_line().trim_end() == choice.trim_end())
                .ok_or(Error::NoSelection("pod"))
        }
    }
}

/// Settles on a container. A requested name must exist in the pod; a lone
/// container is taken silently; a declared default that is a member wins
/// with a notice; anything else opens the picker.
pub async fn resolve_container<C: ClusterClient, P: Picker>(
    cluster: &C,
    picker: &P,
    settings: &Settings,
    context: &str,
    namespace: &str,
    pod: &str,
    requested: &str,
) -> Result<String> {
    let (containers, declared_default) = cluster.list_containers(context, namespace, pod).await?;
    if containers.is_empty() {
        return Err(Error::NotFound(format!("no containers found in pod {pod:?}")));
    }
    if !requested.is_empty() {
        if containers.iter().any(|container| container == requested) {
            return Ok(requested.to_string());
        }
        return Err(Error::NotFound(format!(
            "container {requested:?} not found in pod {pod:?} (available: {})",
            containers.join(", ")
        )));
    }
    if containers.len() == 1 {
        return Ok(containers[0].clone());
    }
    let default = declared_default.filter(|declared| containers.iter().any(|c| c == declared));
    if let Some(default) = default {
        eprintln!(
            "note: pod has multiple containers ({}); using default {default:?}. Use -c to select another.",
            containers.join(", ")
        );
        return Ok(default);
    }
    let header = format!("pod: {pod}");
    pick(picker, settings, &containers, &header, "container").await
}

/// Picker header: active filters joined by two spaces.
pub fn build_pod_header(
    context: &str,
    namespace: &str,
    selector: &str,
    pod_query: &str,
    all_namespaces: bool,
) -> String {
    let mut parts = Vec::new();
    if !context.is_empty() {
        parts.push(format!("context: {context}"));
    }
    if all_namespaces {
        parts.push("namespace: all".to_string());
    } else if !namespace.is_empty() {
        parts.push(format!("namespace: {namespace}"));
    }
    if !selector.is_empty() {
        parts.push(format!("selector: {selector}"));
    }
    if !pod_query.is_empty() {
        parts.push(pod_query.to_string());
    }
    parts.join("  ")
}

async fn pick<P: Picker>(
    picker: &P,
    settings: &Settings,
    items: &[String],
    header: &str,
    what: &'static str,
) -> Result<String> {
    if settings.ignore_fzf {
        return Err(Error::AmbiguousDisallowed(what));
    }
    match picker.choose(items, header).await? {
        Some(choice) if !choice.is_empty() => Ok(choice),
        _ => Err(Error::NoSelection(what)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_joins_active_filters() {
        let cases = [
            (
                ("ctx", "ns", "app=api", "pod: my-pod", false),
                "context: ctx  namespace: ns  selector: app=api  pod: my-pod",
            ),
            (("ctx", "ns", "", "", false), "context: ctx  namespace: ns"),
            (("", "ns", "", "", false), "namespace: ns"),
            (("", "", "", "", false), ""),
            (("", "", "app=web", "", false), "selector: app=web"),
            (("ctx", "", "", "pod: api", false), "context: ctx  pod: api"),
            (("ctx", "", "", "", true), "context: ctx  namespace: all"),
        ];
        for ((context, namespace, selector, pod_query, all_namespaces), want) in cases {
            assert_eq!(
                build_pod_header(context, namespace, selector, pod_query, all_namespaces),
                want,
                "context: {context:?} namespace: {namespace:?}"
            );
        }
    }

    #[test]
    fn all_namespaces_header_hides_concrete_namespace() {
        assert_eq!(
            build_pod_header("ctx", "ignored", "", "", true),
            "context: ctx  namespace: all"
        );
    }
}
