//! Lexical path normalization.
//!
//! Resolves `.` and `..` segments of a `/`-delimited path without touching
//! the filesystem.

/// Collapse `.` and `..` segments, left to right.
///
/// A `..` with nothing left to cancel stays in the result as a literal
/// segment, so a path that walks above its root keeps its leading `..`s.
/// Empty segments are kept, which preserves leading and doubled slashes.
///
/// # Examples
/// ```
/// use httpaction_rs::remove_dots;
/// assert_eq!(remove_dots("/entry/midiana/../../secret/ololo.pem"), "/secret/ololo.pem");
/// assert_eq!(remove_dots("../../x"), "../../x");
/// assert_eq!(remove_dots("/a/./b/./c"), "/a/b/c");
/// ```
pub fn remove_dots(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "." => {}
            ".." if segments.last() != Some(&"..") => {
                while segments.last() == Some(&".") {
                    segments.pop();
                }
                if segments.pop().is_none() {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    segments.join("/")
}

/// Whether a normalized path still climbs above its root.
///
/// Callers serving files from a directory should reject these.
pub fn escapes_root(normalized: &str) -> bool {
    normalized.split('/').any(|segment| segment == "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_parent_segments() {
        assert_eq!(remove_dots("/entry/midiana/../../secret/ololo.pem"), "/secret/ololo.pem");
        assert_eq!(remove_dots("a/b/../c"), "a/c");
    }

    #[test]
    fn test_drops_current_segments() {
        assert_eq!(remove_dots("/a/./b/./c"), "/a/b/c");
        assert_eq!(remove_dots("./a"), "a");
        assert_eq!(remove_dots("."), "");
    }

    #[test]
    fn test_keeps_unresolvable_parents() {
        assert_eq!(remove_dots("../../x"), "../../x");
        assert_eq!(remove_dots(".."), "..");
        assert_eq!(remove_dots("../.."), "../..");
        assert_eq!(remove_dots("a/../../b"), "../b");
    }

    #[test]
    fn test_absolute_path_above_root_eats_leading_slash() {
        // The leading empty segment is cancelled like any other.
        assert_eq!(remove_dots("/../etc/passwd"), "etc/passwd");
        assert_eq!(remove_dots("/a/../../etc"), "etc");
    }

    #[test]
    fn test_keeps_empty_segments() {
        assert_eq!(remove_dots("/a//b/"), "/a//b/");
        assert_eq!(remove_dots("//a/../b"), "//b");
        assert_eq!(remove_dots(""), "");
        assert_eq!(remove_dots("/"), "/");
    }

    #[test]
    fn test_idempotent_on_normalized_paths() {
        let paths = [
            "/entry/midiana/../../secret/ololo.pem",
            "/a/./b/./c",
            "a/b/../c/./d",
            "/static//css/../js/app.js",
            "/",
        ];

        for path in paths {
            let once = remove_dots(path);
            assert_eq!(remove_dots(&once), once, "not idempotent for {path}");
            assert!(!once.split('/').any(|s| s == "." || s == ".."), "unresolved segment in {once}");
        }
    }

    #[test]
    fn test_escapes_root() {
        assert!(escapes_root(&remove_dots("../../x")));
        assert!(escapes_root(&remove_dots("a/../../b")));
        assert!(!escapes_root(&remove_dots("/entry/midiana/../../secret/ololo.pem")));
        assert!(!escapes_root("/files/..hidden"));
    }
}
