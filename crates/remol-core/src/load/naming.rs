use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Token used when sanitization leaves nothing usable.
pub const FALLBACK_OBJECT_NAME: &str = "object";

/// Sanitizes a candidate object name for the remote session.
///
/// Runs of non-word characters collapse to a single underscore, edge
/// underscores are trimmed, and an empty result falls back to
/// [`FALLBACK_OBJECT_NAME`].
pub fn sanitize_name(raw: &str) -> String {
    let collapsed = NON_WORD.replace_all(raw, "_");
    let trimmed = collapsed.trim_matches('_');
    if trimmed.is_empty() {
        FALLBACK_OBJECT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Tracks object names already present in the session plus names assigned
/// during this call, and hands out collision-free names.
///
/// Matching is case-sensitive: PyMOL object names are case-sensitive, so
/// `a` and `A` are distinct entries.
#[derive(Debug, Default)]
pub struct NameRegistry {
    used: HashSet<String>,
}

impl NameRegistry {
    /// Creates a registry seeded with the session's existing object names.
    pub fn new(existing: impl IntoIterator<Item = String>) -> Self {
        NameRegistry {
            used: existing.into_iter().collect(),
        }
    }

    /// Claims a unique name derived from `base`.
    ///
    /// Returns `base` itself when free, otherwise `base_2`, `base_3`, …
    /// The claimed name is recorded so later calls cannot reuse it.
    pub fn claim(&mut self, base: &str) -> String {
        let mut name = base.to_string();
        let mut counter = 1usize;
        while self.used.contains(&name) {
            counter += 1;
            name = format!("{base}_{counter}");
        }
        self.used.insert(name.clone());
        name
    }
}
