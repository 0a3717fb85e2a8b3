//! Human-friendly renderings of units and paths.

/// Default budget for [`human_path`].
pub const DEFAULT_HUMAN_PATH_LEN: usize = 50;

const ELLIPSIS: &str = "...";

/// Turns a file name or slug into a readable phrase.
///
/// Anything that is not an ASCII letter or digit becomes a word break, and
/// the first character of every word is upper-cased.
///
/// # Examples
///
/// ```
/// use pathtree::human::human_friendly_phrase;
///
/// assert_eq!(
///     human_friendly_phrase("module-2_Component--_  1,=service_2"),
///     "Module 2 Component 1 Service 2"
/// );
/// ```
#[must_use]
pub fn human_friendly_phrase(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Shortens a `/`-delimited path to roughly `max_len` characters.
///
/// The basename is always kept. When the path is too long, the start and
/// end of the directory part are kept and the middle is replaced by `...`.
/// If even the basename does not leave room for that, only the basename is
/// returned.
///
/// # Examples
///
/// ```
/// use pathtree::human::human_path;
///
/// assert_eq!(human_path("docs/guide/intro.md", 50), "docs/guide/intro.md");
/// assert_eq!(
///     human_path("aaaa/bbbb/cccc/dddd/eeee/file.txt", 20),
///     "aaaa...eeee/file.txt"
/// );
/// ```
#[must_use]
pub fn human_path(path: &str, max_len: usize) -> String {
    human_path_with(path, max_len, str::to_string)
}

/// Like [`human_path`], formatting the basename with `format_basename`.
#[must_use]
pub fn human_path_with<F>(path: &str, max_len: usize, format_basename: F) -> String
where
    F: Fn(&str) -> String,
{
    let (dir, basename) = match path.rsplit_once('/') {
        Some((dir, basename)) => (dir, basename),
        None => ("", path),
    };
    let basename_display = format_basename(basename);

    if path.chars().count() <= max_len {
        return if dir.is_empty() {
            basename_display
        } else {
            format!("{dir}/{basename_display}")
        };
    }

    // Room left for the directory once the basename, "..." and "/" are placed.
    let budget = max_len.saturating_sub(basename.chars().count() + ELLIPSIS.len() + 1);
    if budget == 0 {
        return basename_display;
    }

    let dir_chars: Vec<char> = dir.chars().collect();
    let head_len = budget.div_ceil(2).min(dir_chars.len());
    let tail_len = (budget / 2).min(dir_chars.len() - head_len);
    let head: String = dir_chars[..head_len].iter().collect();
    let tail: String = dir_chars[dir_chars.len() - tail_len..].iter().collect();
    format!("{head}{ELLIPSIS}{tail}/{basename_display}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_from_slug() {
        assert_eq!(human_friendly_phrase("home/module3-i"), "Home Module3 I");
        assert_eq!(human_friendly_phrase("--leading"), "Leading");
        assert_eq!(human_friendly_phrase("already Fine"), "Already Fine");
        assert_eq!(human_friendly_phrase("__"), "");
    }

    #[test]
    fn test_phrase_keeps_inner_case() {
        assert_eq!(human_friendly_phrase("camelCase-thing"), "CamelCase Thing");
    }

    #[test]
    fn test_short_path_unchanged() {
        assert_eq!(human_path("file.txt", DEFAULT_HUMAN_PATH_LEN), "file.txt");
        assert_eq!(human_path("a/b/c.txt", 9), "a/b/c.txt");
    }

    #[test]
    fn test_long_path_elided() {
        let shortened = human_path("aaaa/bbbb/cccc/dddd/eeee/file.txt", 20);
        assert_eq!(shortened, "aaaa...eeee/file.txt");
        assert_eq!(shortened.chars().count(), 20);
    }

    #[test]
    fn test_odd_budget_favours_head() {
        // budget = 21 - 8 - 4 = 9 -> 5 head, 4 tail
        assert_eq!(
            human_path("aaaa/bbbb/cccc/dddd/eeee/file.txt", 21),
            "aaaa/...eeee/file.txt"
        );
    }

    #[test]
    fn test_basename_only_when_too_long() {
        assert_eq!(human_path("dir/a-very-long-basename.txt", 10), "a-very-long-basename.txt");
    }

    #[test]
    fn test_formatted_basename() {
        let shortened = human_path_with("docs/guide/getting-started", 50, human_friendly_phrase);
        assert_eq!(shortened, "docs/guide/Getting Started");
    }
}
