use std::path::PathBuf;

/// Name reported in `server_info` and used for the data directory.
pub const SERVER_NAME: &str = "jref-lsp";

/// `source` tag attached to every published diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "jref-language-server";

/// Returns the path to the data directory for jref-lsp.
/// Uses $XDG_DATA_HOME/jref-lsp if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/jref-lsp,
/// or ./jref-lsp if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("jref-lsp.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join(SERVER_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/jref-lsp"));
    }

    #[test]
    fn data_dir_with_env_ignores_empty_xdg_data_home() {
        let path = data_dir_with_env(Some(String::new()), Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/jref-lsp"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/jref-lsp"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./jref-lsp"));
    }
}
