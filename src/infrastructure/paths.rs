//! Path utilities for the Zellij sandbox, where the host home directory is
//! mounted at `/host`.

use std::path::PathBuf;

/// Returns the plugin's data directory, home of the log file.
///
/// `/host` is the cwd of the last focused terminal (or where Zellij was
/// started), which is usually the user's home, so this resolves to
/// `~/.local/share/zellij/pokedex` on the host.
///
/// # Examples
///
/// ```
/// use pokedex::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/pokedex"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("pokedex")
}

/// Maps `~` and `~/...` onto `/host`; other paths pass through unchanged.
///
/// Used for the `theme_file` option, which users naturally write with `~`.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_maps_to_host_mount() {
        assert_eq!(expand_tilde("~/themes/pokedex.toml"), "/host/themes/pokedex.toml");
        assert_eq!(expand_tilde("~"), "/host");
    }

    #[test]
    fn other_paths_are_untouched() {
        assert_eq!(expand_tilde("/etc/pokedex.toml"), "/etc/pokedex.toml");
        assert_eq!(expand_tilde("~other/theme.toml"), "~other/theme.toml");
    }
}
