use std::path::Path;

/// Scopes in which tooltips are offered.
pub const ASSEMBLY_SCOPES: [&str; 2] = ["source.asm", "source.ssraw"];

/// Score how well a single dotted `selector` matches a host scope name.
///
/// A scope name is a space-separated stack like `source.asm meta.label`. The selector matches an
/// element when it equals it or is a prefix ending on a `.` boundary, and scores the number of
/// segments matched. The best element wins; `0` means no match.
pub fn score_selector(scope_name: &str, selector: &str) -> u32 {
    let selector = selector.trim();
    if selector.is_empty() {
        return 0;
    }
    scope_name
        .split_whitespace()
        .filter(|scope| {
            scope
                .strip_prefix(selector)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
        })
        .map(|_| selector.split('.').count() as u32)
        .max()
        .unwrap_or(0)
}

pub fn is_assembly_scope(scope_name: &str) -> bool {
    ASSEMBLY_SCOPES
        .iter()
        .any(|selector| score_selector(scope_name, selector) > 0)
}

/// Guess the base scope of a file from its extension, as an editor's syntax detection would.
pub fn scope_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("asm") {
        Some(ASSEMBLY_SCOPES[0])
    } else if ext.eq_ignore_ascii_case("ssraw") {
        Some(ASSEMBLY_SCOPES[1])
    } else {
        None
    }
}
