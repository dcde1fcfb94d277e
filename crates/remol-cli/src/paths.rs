use std::path::{Path, PathBuf};

/// Expands a leading `~` or `~/` against the user's home directory.
///
/// Paths without a tilde, `~user` forms, and environments without a
/// resolvable home directory pass through unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };
    if s == "~" {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }
    if let Some(rest) = s.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(
            expand_tilde(Path::new("/data/models")),
            PathBuf::from("/data/models")
        );
        assert_eq!(
            expand_tilde(Path::new("relative/model.pdb")),
            PathBuf::from("relative/model.pdb")
        );
    }

    #[test]
    fn tilde_slash_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                expand_tilde(Path::new("~/models/a.pdb")),
                home.join("models/a.pdb")
            );
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }

    #[test]
    fn tilde_user_forms_are_left_alone() {
        assert_eq!(
            expand_tilde(Path::new("~other/model.pdb")),
            PathBuf::from("~other/model.pdb")
        );
    }
}
