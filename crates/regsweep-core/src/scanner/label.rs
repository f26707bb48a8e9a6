/// Root label derivation.
///
/// The inventory is named after the first folder on the selected path whose
/// name starts with `Re` (e.g. `Reclamations2024`). Both `/` and `\` count
/// as separators so Windows paths typed on any platform resolve the same.
use crate::config::LabelPolicy;
use crate::model::DEFAULT_ROOT_LABEL;
use std::path::Path;

const LABEL_PREFIX: &str = "Re";

/// First path component starting with `Re`, if any. The match is case-sensitive.
pub fn find_root_label(path: &Path) -> Option<String> {
    let text = path.to_string_lossy();
    text.split(['/', '\\'])
        .find(|part| part.starts_with(LABEL_PREFIX))
        .map(str::to_string)
}

/// Apply `policy` to the label search.
///
/// `None` means the run must stop without touching anything.
pub fn resolve_root_label(path: &Path, policy: LabelPolicy) -> Option<String> {
    match (find_root_label(path), policy) {
        (Some(label), _) => Some(label),
        (None, LabelPolicy::Fallback) => Some(DEFAULT_ROOT_LABEL.to_string()),
        (None, LabelPolicy::Abort) => None,
    }
}
