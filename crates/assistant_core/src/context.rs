use crate::lang::split_lang_suffix;

/// Coarse classification of the content field being edited, used to bias
/// the AI request. Heuristic and best-effort, never authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    Blog,
    Project,
    Skills,
    About,
}

impl ContextKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContextKind::Blog => "blog",
            ContextKind::Project => "project",
            ContextKind::Skills => "skills",
            ContextKind::About => "about",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextHint {
    pub kind: ContextKind,
    pub id: Option<String>,
}

impl ContextHint {
    fn new(kind: ContextKind) -> Self {
        Self { kind, id: None }
    }
}

/// Derives a context hint from the current page path and the focused
/// element's identifier.
///
/// Substring matching, first match wins; the branch order is load-bearing
/// and deliberately mirrors the admin form naming. No match means no hint.
pub fn infer_context(page_path: &str, element_id: &str) -> Option<ContextHint> {
    let base = split_lang_suffix(element_id)
        .map(|(base, _)| base)
        .unwrap_or(element_id);

    if contains_any(base, &["title", "excerpt", "content"]) {
        return Some(ContextHint::new(ContextKind::Blog));
    }
    if contains_any(base, &["problem", "tagline", "goal"]) {
        return Some(ContextHint {
            kind: ContextKind::Project,
            id: project_id_from_path(page_path),
        });
    }
    if contains_any(base, &["category", "skill"]) {
        return Some(ContextHint::new(ContextKind::Skills));
    }
    if base.contains("about") {
        return Some(ContextHint::new(ContextKind::About));
    }

    if page_path.starts_with("/admin/blog") {
        return Some(ContextHint::new(ContextKind::Blog));
    }
    if page_path.starts_with("/admin/projects") {
        return Some(ContextHint {
            kind: ContextKind::Project,
            id: project_id_from_path(page_path),
        });
    }

    None
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn project_id_from_path(page_path: &str) -> Option<String> {
    let rest = page_path.strip_prefix("/admin/projects/")?;
    let id = rest.split('/').next().unwrap_or(rest);
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
