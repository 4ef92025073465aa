// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

/// Strip one layer of surrounding double quotes, if both ends carry one.
pub fn trim_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Trim whitespace, then strip one layer of quotes. Used for every section
/// name and key that enters the store.
pub fn normalize_name(s: &str) -> String {
    trim_quotes(s.trim()).to_string()
}

/// Expand a leading `~/` against the home directory. Other paths pass through.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|s| s.strip_prefix("~/")) {
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
    fn test_trim_quotes() {
        assert_eq!(trim_quotes("\"abc\""), "abc");
        assert_eq!(trim_quotes("\"\""), "");
        assert_eq!(trim_quotes("\""), "\"");
        assert_eq!(trim_quotes("\"abc"), "\"abc");
        assert_eq!(trim_quotes("\"\"x\"\""), "\"x\"");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  \"server\"  "), "server");
        assert_eq!(normalize_name("\" padded \""), " padded ");
        assert_eq!(normalize_name("plain"), "plain");
    }

    #[test]
    fn test_expand_home_leaves_plain_paths() {
        assert_eq!(expand_home(Path::new("/etc/app.sconf")), PathBuf::from("/etc/app.sconf"));
        assert_eq!(expand_home(Path::new("rel/app.sconf")), PathBuf::from("rel/app.sconf"));
    }

    #[test]
    fn test_expand_home_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/app.sconf")), home.join("app.sconf"));
        }
    }
}
