//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! usually maps to the directory Zellij was started from (typically `~`).

use std::path::PathBuf;

/// Name of the OTLP trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "atomic-blog-otlp.json";

/// Data directory: `/host/.local/share/zellij/atomic-blog`.
///
/// ```
/// use atomic_blog::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/atomic-blog"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("atomic-blog")
}

/// Where spans are exported.
#[must_use]
pub fn trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Maps `~` and `~/...` to their sandbox location under `/host`.
///
/// ```
/// use atomic_blog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        "/host".to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("/host/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(trace_file().parent(), Some(get_data_dir().as_path()));
        assert!(trace_file().ends_with(TRACE_FILE_NAME));
    }

    #[test]
    fn only_leading_tilde_is_expanded() {
        assert_eq!(expand_tilde("notes/~/draft"), "notes/~/draft");
        assert_eq!(expand_tilde("~user/file"), "~user/file");
    }
}
