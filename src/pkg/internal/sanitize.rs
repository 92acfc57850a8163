use lazy_static::lazy_static;
use regex::Regex;

/// Limits applied to the free-text form fields, post-sanitization.
pub const MAX_SKILLS: usize = 200;
pub const MAX_SHORT_NOTE: usize = 300;

lazy_static! {
    static ref HTML_TAGS: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref URLS: Regex = Regex::new(r"(?i)(?:https?://|ftp://)\S*").unwrap();
    static ref WWW: Regex = Regex::new(r"(?i)\bwww\.\S*").unwrap();
    static ref DRIVE_PATHS: Regex = Regex::new(r"\b[A-Za-z]:\\\S*").unwrap();
    static ref SLASH_FILES: Regex =
        Regex::new(r"(?i)[/\\]\S*\.(?:png|jpe?g|gif|svg|webp|bmp|ico|pdf|docx?)(\s|$)").unwrap();
    static ref BARE_FILES: Regex =
        Regex::new(r"(?i)\b\S*\.(?:png|jpe?g|gif|svg|webp|bmp|ico|pdf|docx?)(\s|$)").unwrap();
}

/// Cleans untrusted free text before it is written to the backing store.
///
/// Strips HTML tags, URL-like tokens, and file-path-like tokens, in that
/// order, then collapses whitespace and truncates to `max_len` characters.
/// Total over any input; an empty result is valid output. The contract is
/// "safe to store as plain text" - display encoding is the consumer's job.
///
/// Truncation is a plain character prefix with no token awareness, so a cut
/// can leave a tail that a later pass would strip (e.g. "photo.pngx" at
/// max_len 9 becomes "photo.png"). The function is idempotent away from
/// that boundary; stored values are not re-sanitized on read.
pub fn sanitize(text: &str, max_len: usize) -> String {
    let s = HTML_TAGS.replace_all(text, "");
    let s = URLS.replace_all(&s, "");
    let s = WWW.replace_all(&s, "");
    let s = DRIVE_PATHS.replace_all(&s, "");
    // path/file patterns close on whitespace or end of input; the captured
    // terminator is put back so adjacent tokens stay separated
    let s = SLASH_FILES.replace_all(&s, "$1");
    let s = BARE_FILES.replace_all(&s, "$1");
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_html_and_urls() {
        assert_eq!(
            sanitize("<b>Hi</b> visit http://x.com now", 100),
            "Hi visit now"
        );
        assert_eq!(sanitize("see https://a.b/c?d=e and www.evil.io!", 100), "see and");
        assert_eq!(sanitize("grab ftp://host/file", 100), "grab");
    }

    #[test]
    fn strips_windows_drive_paths() {
        assert_eq!(
            sanitize("Report at C:\\Users\\a\\file.pdf end", 100),
            "Report at end"
        );
    }

    #[test]
    fn strips_path_and_file_tokens() {
        assert_eq!(sanitize("photo.png attached", 100), "attached");
        assert_eq!(sanitize("logo /images/logo.SVG here", 100), "logo here");
        assert_eq!(sanitize("doc \\uploads\\cv.docx sent", 100), "doc sent");
        assert_eq!(sanitize("resume.DOCX", 100), "");
    }

    #[test]
    fn keeps_plain_text_and_collapses_whitespace() {
        assert_eq!(
            sanitize("  rust,\n golang\t and   sql  ", 100),
            "rust, golang and sql"
        );
        assert_eq!(sanitize("", 100), "");
    }

    #[test]
    fn truncates_to_max_len() {
        assert_eq!(sanitize("abcdef", 3), "abc");
        assert_eq!(sanitize("anything", 0), "");
        for max_len in [0usize, 1, 7, 50] {
            let out = sanitize("some <i>note</i> with www.link.co text", max_len);
            assert!(out.chars().count() <= max_len);
        }
    }

    #[test]
    fn truncation_is_token_unaware() {
        // a cut can expose a strippable filename tail; only a further pass
        // would remove it
        assert_eq!(sanitize("photo.pngx", 9), "photo.png");
        assert_eq!(sanitize("photo.png", 9), "");
        assert_eq!(sanitize("rust and sql", 8), "rust and");
    }

    #[test]
    fn idempotent_on_typical_input() {
        let samples = [
            "<b>Hi</b> visit http://x.com now",
            "Report at C:\\Users\\a\\file.pdf end",
            "photo.png attached",
            "plain skills: rust, sql",
        ];
        for s in samples {
            let once = sanitize(s, 100);
            assert_eq!(sanitize(&once, 100), once);
        }
    }
}
