/// One row of a pod listing plus the line shown in the picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodItem {
    pub name: String,
    pub namespace: String,
    pub ready: String,
    pub phase: String,
    pub display: String,
}

impl PodItem {
    /// Picker line; falls back to the bare name when no display was rendered.
    pub fn display_line(&self) -> &str {
        if self.display.is_empty() {
            &self.name
        } else {
            &self.display
        }
    }
}

/// Normalizes kubectl's READY column. Boolean lists ("true,false") become
/// a ready/total fraction; fractions and numeric values pass through.
pub fn format_ready(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw == "<none>" || raw == "-" {
        return "-".to_string();
    }
    if raw.contains('/') {
        return raw.to_string();
    }
    let mut total = 0u32;
    let mut ready = 0u32;
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        total += 1;
        if part.eq_ignore_ascii_case("true") {
            ready += 1;
        } else if part.eq_ignore_ascii_case("false") {
            continue;
        } else if part.parse::<i64>().is_ok() {
            // Raw value is already numeric.
            return raw.to_string();
        }
    }
    if total == 0 {
        return "-".to_string();
    }
    format!("{ready}/{total}")
}

/// Splits a NAMESPACE/POD argument. Requires exactly one slash and a
/// non-empty value on both sides.
pub fn split_pod_namespace_arg(value: &str) -> Option<(&str, &str)> {
    let mut parts = value.split('/');
    let namespace = parts.next()?.trim();
    let pod = parts.next()?.trim();
    if parts.next().is_some() || namespace.is_empty() || pod.is_empty() {
        return None;
    }
    Some((namespace, pod))
}

pub fn filter_pods_by_query<'a>(pods: &'a [PodItem], query: &str) -> Vec<&'a PodItem> {
    pods.iter().filter(|pod| pod.name.contains(query)).collect()
}

pub fn find_pod_by_name<'a>(pods: &'a [PodItem], name: &str) -> Option<&'a PodItem> {
    pods.iter().find(|pod| pod.name == name)
}

pub fn find_pod_in_namespace<'a>(
    pods: &'a [PodItem],
    namespace: &str,
    name: &str,
) -> Option<&'a PodItem> {
    pods.iter()
        .find(|pod| pod.namespace == namespace && pod.name == name)
}

/// Maps a picker choice back to the pod whose display line was chosen.
/// Trailing column padding is ignored on both sides; fzf echoes the
/// selected line trimmed.
pub fn pod_from_choice<'a>(pods: &'a [PodItem], choice: &str) -> Option<&'a PodItem> {
    let choice = choice.trim_end();
    if choice.is_empty() {
        return None;
    }
    pods.iter()
        .find(|pod| pod.display_line().trim_end() == choice)
}

pub fn pod_displays(pods: &[PodItem]) -> Vec<String> {
    pods.iter()
        .map(|pod| pod.display_line().to_string())
        .collect()
}

/// Renders aligned display lines across the listing. The namespace column
/// leads when listing across all namespaces.
pub fn render_displays(pods: &mut [PodItem], with_namespace: bool) {
    let mut namespace_w = 0;
    let mut name_w = 0;
    let mut ready_w = 0;
    let mut phase_w = 0;
    for pod in pods.iter() {
        namespace_w = namespace_w.max(pod.namespace.len());
        name_w = name_w.max(pod.name.len());
        ready_w = ready_w.max(pod.ready.len());
        phase_w = phase_w.max(pod.phase.len());
    }
    for pod in pods.iter_mut() {
        pod.display = if with_namespace {
            format!(
                "{:<namespace_w$}  {:<name_w$}  {:<ready_w$}  {:<phase_w$}",
                pod.namespace, pod.name, pod.ready, pod.phase
            )
        } else {
            format!(
                "{:<name_w$}  {:<ready_w$}  {:<phase_w$}",
                pod.name, pod.ready, pod.phase
            )
        };
    }
}
