//! Markup stripping for text-like items.
//!
//! Tags are matched lexically: anything of the form `<name ...>`, `</name>`
//! or `<!-- ... -->`. A lone `<` that does not open a tag is kept, so plain
//! text such as `a < b` survives untouched. The bodies of `script` and
//! `style` elements are dropped together with their tags.
//!
//! Removing a tag can join its neighbours into a new one (`<<b>b>`), so every
//! pass is repeated until the output no longer changes. Both functions are
//! idempotent.

use regex_lite::{Captures, Regex};
use std::sync::LazyLock;

static NON_TEXT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style)\b[^>]*>.*?</(?:script|style)\s*>")
        .expect("valid markup pattern")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<(/?)([a-zA-Z][a-zA-Z0-9-]*)\b([^>]*)>")
        .expect("valid markup pattern")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid markup pattern")
});

/// Tags allowed in html items unless the item overrides them.
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "p", "a", "ul", "ol", "nl", "li", "b",
    "i", "strong", "em", "strike", "code", "hr", "br", "div", "table", "thead", "caption",
    "tbody", "tr", "th", "td", "pre", "img", "iframe", "span", "u", "s",
];

/// Attributes kept on allowed tags. Tags not listed keep no attributes.
pub const ALLOWED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "name", "target"]),
    ("img", &["src", "alt", "width", "height"]),
    ("iframe", &["src", "width", "height", "frameborder", "allowfullscreen"]),
];

/// Schemes accepted in `href` and `src`. Relative urls are accepted too.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "mailto"];

const URL_ATTRIBUTES: &[&str] = &["href", "src"];

/// Removes every tag, keeping only text content.
pub fn strip_tags(input: &str) -> String {
    until_stable(input, |text| {
        let without_blocks = NON_TEXT_BLOCK.replace_all(text, "");
        TAG.replace_all(&without_blocks, "").into_owned()
    })
}

/// Removes every tag whose name is not in `allowed` (case-insensitive).
/// Comments are always removed. Kept tags lose every attribute outside
/// [`ALLOWED_ATTRIBUTES`], and `href`/`src` values with a scheme outside
/// [`ALLOWED_SCHEMES`] are dropped.
pub fn filter_tags<S: AsRef<str>>(input: &str, allowed: &[S]) -> String {
    until_stable(input, |text| {
        let without_blocks = NON_TEXT_BLOCK.replace_all(text, "");
        TAG.replace_all(&without_blocks, |caps: &Captures<'_>| {
            let Some(name) = caps.get(2) else {
                return String::new();
            };
            let name = name.as_str();
            if allowed.iter().any(|tag| tag.as_ref().eq_ignore_ascii_case(name)) {
                rebuild_tag(!caps[1].is_empty(), name, &caps[3])
            } else {
                String::new()
            }
        })
        .into_owned()
    })
}

fn until_stable(input: &str, pass: impl Fn(&str) -> String) -> String {
    if !input.contains('<') {
        return input.to_string();
    }
    let mut current = pass(input);
    loop {
        let next = pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn rebuild_tag(closing: bool, name: &str, attributes: &str) -> String {
    if closing {
        return format!("</{name}>");
    }
    let allowed = ALLOWED_ATTRIBUTES
        .iter()
        .find(|(tag, _)| tag.eq_ignore_ascii_case(name))
        .map_or(&[][..], |(_, attrs)| *attrs);

    let mut tag = format!("<{name}");
    let mut kept_any = false;
    for caps in ATTRIBUTE.captures_iter(attributes) {
        let attr = caps[1].to_ascii_lowercase();
        if !allowed.contains(&attr.as_str()) {
            continue;
        }
        let value = caps.get(2).or(caps.get(3)).or(caps.get(4));
        if let Some(value) = value {
            if URL_ATTRIBUTES.contains(&attr.as_str()) && !is_safe_url(value.as_str()) {
                continue;
            }
        }
        tag.push(' ');
        tag.push_str(&caps[0]);
        kept_any = true;
    }
    if attributes.trim_end().ends_with('/') {
        tag.push_str(if kept_any { " /" } else { "/" });
    }
    tag.push('>');
    tag
}

/// True for relative urls and urls whose scheme is in [`ALLOWED_SCHEMES`].
///
/// Whitespace and control characters are ignored, as browsers ignore them.
/// A `:` or `&` before the first `/`, `?` or `#` must belong to an allowed
/// scheme, which also rules out schemes spelled with character references.
pub fn is_safe_url(value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    let head_end = normalized.find(['/', '?', '#']).unwrap_or(normalized.len());
    let head = &normalized[..head_end];
    match head.find(':') {
        Some(colon) => ALLOWED_SCHEMES.contains(&&head[..colon]),
        None => !head.contains('&'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_simple_tags() {
        assert_eq!(strip_tags("<b>hi</b>"), "hi");
    }

    #[test]
    fn keeps_lone_angle_bracket() {
        assert_eq!(strip_tags("a < b and c > d"), "a < b and c > d");
    }

    #[test]
    fn drops_script_bodies() {
        assert_eq!(strip_tags("x<script>alert(1)</script>y"), "xy");
        assert_eq!(strip_tags("x<STYLE type=\"t\">p{}</STYLE>y"), "xy");
    }

    #[test]
    fn drops_comments() {
        assert_eq!(strip_tags("a<!-- hidden -->b"), "ab");
    }

    #[test]
    fn strips_tags_reassembled_by_a_previous_pass() {
        assert_eq!(strip_tags("<<b>b>hi"), "hi");
        assert_eq!(strip_tags("<<b>script>alert(1)<</b>/script>"), "");
    }

    #[test]
    fn filter_drops_attributes_outside_whitelist() {
        let out = filter_tags("<p class=\"x\">a</p><blink>b</blink>", &["p"]);
        assert_eq!(out, "<p>a</p>b");
    }

    #[test]
    fn filter_is_case_insensitive() {
        assert_eq!(filter_tags("<P>a</P>", &["p"]), "<P>a</P>");
    }

    #[test]
    fn filter_keeps_whitelisted_attributes() {
        let out = filter_tags("<a href=\"/posts/1\" target='_blank' onclick=\"x()\">x</a>", &["a"]);
        assert_eq!(out, "<a href=\"/posts/1\" target='_blank'>x</a>");
    }

    #[test]
    fn filter_keeps_self_closing_marker() {
        assert_eq!(filter_tags("<br/>", &["br"]), "<br/>");
        assert_eq!(
            filter_tags("<img src=\"a.png\" onload=\"x()\" />", &["img"]),
            "<img src=\"a.png\" />"
        );
    }

    #[test]
    fn url_schemes() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("mailto:someone@example.com"));
        assert!(is_safe_url("/images/a.png"));
        assert!(is_safe_url("page?a=1&b=2"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url(" JavaScript:alert(1)"));
        assert!(!is_safe_url("java\tscript:alert(1)"));
        assert!(!is_safe_url("data:text/html,x"));
        assert!(!is_safe_url("&#106;avascript:alert(1)"));
        assert!(!is_safe_url("javascript&#58;alert(1)"));
    }
}
