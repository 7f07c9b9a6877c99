//! Symbol ID generation from relative sound paths.
//!
//! A pattern such as `sound-[dir]-[name]` is rendered against the path of
//! a file relative to its configured sound directory:
//!
//! ```text
//! a/b/c.mp3   -> sound-a-b-c
//! c.mp3       -> sound-c        (empty [dir], no dangling separator)
//! ```

use super::SoundFormat;

/// Default symbol ID pattern.
pub const DEFAULT_PATTERN: &str = "sound-[dir]-[name]";

/// Separator used to join directory segments, and collapsed around an
/// empty `[dir]` substitution.
pub const SEPARATOR: char = '-';

const DIR_TOKEN: &str = "[dir]";
const NAME_TOKEN: &str = "[name]";

/// Create the symbol ID for a slash-separated relative path.
///
/// Without a pattern (or with an empty one) the relative path itself is
/// the identifier.
pub fn create_symbol_id(relative_path: &str, pattern: Option<&str>) -> String {
    let relative_path = relative_path.trim_start_matches('/');
    let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
        return relative_path.to_string();
    };

    let (dir, name) = split_relative(relative_path);
    let rendered = render(pattern, &dir, name);
    SoundFormat::strip_extension_suffix(&rendered).to_string()
}

/// Split `a/b/c.mp3` into (`a-b`, `c`).
fn split_relative(relative_path: &str) -> (String, &str) {
    let mut segments: Vec<&str> = relative_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();
    let file = segments.pop().unwrap_or_default();
    let name = match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file,
    };
    (segments.join(&SEPARATOR.to_string()), name)
}

/// Single-pass token substitution.
///
/// Tokens are replaced globally. Text produced by a substitution is never
/// scanned for tokens again.
fn render(pattern: &str, dir: &str, name: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + dir.len() + name.len());
    let mut rest = pattern;
    // An empty [dir] was the last thing rendered.
    let mut after_empty_dir = false;

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(DIR_TOKEN) {
            if dir.is_empty() {
                after_empty_dir = true;
            } else {
                out.push_str(dir);
                after_empty_dir = false;
            }
            rest = tail;
            continue;
        }
        if let Some(tail) = rest.strip_prefix(NAME_TOKEN) {
            out.push_str(name);
            after_empty_dir = false;
            rest = tail;
            continue;
        }

        let mut chars = rest.chars();
        let Some(ch) = chars.next() else { break };
        rest = chars.as_str();

        let dangling = ch == SEPARATOR && (out.is_empty() || out.ends_with(SEPARATOR));
        if !(after_empty_dir && dangling) {
            out.push(ch);
        }
        after_empty_dir = false;
    }

    if after_empty_dir && out.ends_with(SEPARATOR) {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(path: &str) -> String {
        create_symbol_id(path, Some(DEFAULT_PATTERN))
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(id("a/b/c.mp3"), "sound-a-b-c");
        assert_eq!(id("ui/click.wav"), "sound-ui-click");
    }

    #[test]
    fn test_root_file_has_no_doubled_separator() {
        assert_eq!(id("c.mp3"), "sound-c");
        assert_eq!(id("/c.mp3"), "sound-c");
    }

    #[test]
    fn test_dangling_separator_at_edges() {
        assert_eq!(create_symbol_id("c.mp3", Some("[dir]-[name]")), "c");
        assert_eq!(create_symbol_id("c.mp3", Some("[name]-[dir]")), "c");
        assert_eq!(create_symbol_id("x/c.mp3", Some("[name]-[dir]")), "c-x");
    }

    #[test]
    fn test_tokens_replaced_globally() {
        assert_eq!(
            create_symbol_id("fx/boom.aac", Some("[dir]:[name]/[dir]:[name]")),
            "fx:boom/fx:boom"
        );
    }

    #[test]
    fn test_substituted_text_not_rescanned() {
        assert_eq!(
            create_symbol_id("[name]/hit.mp3", Some("s-[dir]-[name]")),
            "s-[name]-hit"
        );
    }

    #[test]
    fn test_without_pattern_keeps_relative_path() {
        assert_eq!(create_symbol_id("a/b/c.mp3", None), "a/b/c.mp3");
        assert_eq!(create_symbol_id("a/b/c.mp3", Some("")), "a/b/c.mp3");
    }

    #[test]
    fn test_leftover_extension_is_stripped() {
        assert_eq!(create_symbol_id("ui/click.mp3", Some("[name].mp3")), "click");
        assert_eq!(create_symbol_id("v1.2.mp3", Some("[name]")), "v1.2");
    }

    #[test]
    fn test_deterministic() {
        let first = id("menu/open/door.m4a");
        for _ in 0..8 {
            assert_eq!(id("menu/open/door.m4a"), first);
        }
    }
}
