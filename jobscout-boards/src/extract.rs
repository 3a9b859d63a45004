//! Helpers for turning raw API fields into `JobListing` values.
use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Parse a board's publication timestamp.
///
/// The Muse emits RFC 3339 with an offset; Remotive emits a bare local-less
/// `YYYY-MM-DDTHH:MM:SS`, which we take as UTC. Anything else is treated as
/// unparseable and the caller skips the record.
pub fn parse_publication_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

fn script_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<script.*?</script>").expect("valid regex"))
}

fn style_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<style.*?</style>").expect("valid regex"))
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid regex"))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Naive tag stripper for job descriptions.
///
/// Boards return HTML in their description fields; we drop script/style
/// blocks with their contents, remove remaining tags, and condense
/// whitespace. Good enough for a console snippet or an export column.
pub fn strip_html(html: &str) -> String {
    let no_script = script_re().replace_all(html, "");
    let no_style = style_re().replace_all(&no_script, "");
    let no_tags = tag_re().replace_all(&no_style, "");
    whitespace_re().replace_all(&no_tags, " ").trim().to_string()
}
