//! Path expansion for user-supplied locations.
//!
//! Data files, font files and output directories can be given with a leading
//! `~`, as absolute paths, or relative to the configuration file.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// Absolute and relative paths are otherwise returned unchanged; surrounding
/// whitespace is trimmed and an empty input yields an empty path.
///
/// ```ignore
/// use kuralpaper_lib::platform::path::expand;
///
/// let fonts = expand("~/.local/share/fonts/NotoSansTamil-Regular.ttf");
/// assert!(!fonts.to_string_lossy().starts_with('~'));
/// ```
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Expands `~` and resolves relative paths against `base_dir`.
///
/// Used for paths read from the configuration file, which are relative to the
/// directory the file lives in.
///
/// ```ignore
/// use std::path::Path;
/// use kuralpaper_lib::platform::path::expand_and_resolve;
///
/// let data = expand_and_resolve("thirukural.json", Path::new("/home/me/.config/kuralpaper"));
/// assert_eq!(data, Path::new("/home/me/.config/kuralpaper/thirukural.json"));
/// ```
#[must_use]
pub fn expand_and_resolve(path: &str, base_dir: &Path) -> PathBuf {
    let expanded = expand(path);

    if expanded.as_os_str().is_empty() || expanded.is_absolute() {
        return expanded;
    }

    base_dir.join(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_empty_and_whitespace() {
        assert_eq!(expand(""), PathBuf::new());
        assert_eq!(expand("   "), PathBuf::new());
    }

    #[test]
    fn test_expand_keeps_absolute_and_relative() {
        assert_eq!(expand("/usr/share/fonts/tamil.ttf"), PathBuf::from("/usr/share/fonts/tamil.ttf"));
        assert_eq!(expand("thirukural.json"), PathBuf::from("thirukural.json"));
    }

    #[test]
    fn test_expand_tilde() {
        let result = expand("~/wallpapers");
        assert!(!result.to_string_lossy().starts_with('~'));
        assert!(result.to_string_lossy().ends_with("wallpapers"));
    }

    #[test]
    fn test_expand_and_resolve_relative_uses_base() {
        let base = PathBuf::from("/config/kuralpaper");
        assert_eq!(
            expand_and_resolve("data/thirukural.json", &base),
            PathBuf::from("/config/kuralpaper/data/thirukural.json")
        );
    }

    #[test]
    fn test_expand_and_resolve_absolute_ignores_base() {
        let base = PathBuf::from("/config/kuralpaper");
        assert_eq!(
            expand_and_resolve("/srv/thirukural.json", &base),
            PathBuf::from("/srv/thirukural.json")
        );
    }

    #[test]
    fn test_expand_and_resolve_tilde_ignores_base() {
        let base = PathBuf::from("/config/kuralpaper");
        let result = expand_and_resolve("~/Pictures", &base);
        assert!(!result.to_string_lossy().contains("/config/kuralpaper"));
        assert!(result.to_string_lossy().ends_with("Pictures"));
    }

    #[test]
    fn test_expand_and_resolve_empty_stays_empty() {
        assert_eq!(expand_and_resolve("  ", Path::new("/base")), PathBuf::new());
    }
}
