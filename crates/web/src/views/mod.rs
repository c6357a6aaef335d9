//! Server-rendered views.
//!
//! Every page is a plain `String` built from a shared layout. Anything that
//! came from a user or the database goes through [`escape`] first.

use chrono::{Datelike, Utc};

pub mod banner;
pub mod pages;

pub use banner::Banner;

const SITE_NAME: &str = "Discover&amp;Share";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped `href` value for a user-supplied URL, or `None` if the scheme is
/// not http(s).
pub fn safe_href(url: &str) -> Option<String> {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(escape(url))
    } else {
        None
    }
}

/// Wrap a page body in the site chrome (head, navigation, footer).
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {SITE_NAME}</title>
</head>
<body>
<header>
<nav>
<a class="logo" href="/">{SITE_NAME}</a>
<ul>
<li><a href="/">Home</a></li>
<li><a href="/about">About</a></li>
<li><a href="/contact">Contact</a></li>
<li><a href="/submit">Submit</a></li>
</ul>
</nav>
</header>
<main>
{body}
</main>
<footer><p>&copy; {year} {SITE_NAME}, !nc.</p></footer>
</body>
</html>
"#,
        title = escape(title),
        year = Utc::now().year(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_and_quotes() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn only_http_urls_become_links() {
        assert_eq!(safe_href(" https://a.example/?q=1&r=2 ").as_deref(), Some("https://a.example/?q=1&amp;r=2"));
        assert!(safe_href("HTTP://A.EXAMPLE").is_some());
        assert_eq!(safe_href("javascript:alert(1)"), None);
        assert_eq!(safe_href("/relative"), None);
    }

    #[test]
    fn layout_has_navigation_and_footer_year() {
        let html = layout("Home", "<p>hi</p>");
        assert!(html.contains(r#"<a href="/submit">Submit</a>"#));
        assert!(html.contains("<p>hi</p>"));
        assert!(html.contains(&Utc::now().year().to_string()));
        assert!(html.contains("<title>Home | Discover&amp;Share</title>"));
    }
}
