//! Inline status banners shown above a view.

/// Banner colour class.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Error,
    Notice,
    Success,
}

impl Tone {
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Error => "#eb4d4b",
            Tone::Notice => "#aaaaaa",
            Tone::Success => "#2ecc71",
        }
    }
}

/// A status message. The text is trusted static markup, never user input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Banner {
    pub tone: Tone,
    pub html: &'static str,
}

impl Banner {
    pub const fn error(html: &'static str) -> Self {
        Self { tone: Tone::Error, html }
    }

    pub const fn notice(html: &'static str) -> Self {
        Self { tone: Tone::Notice, html }
    }

    pub const fn success(html: &'static str) -> Self {
        Self { tone: Tone::Success, html }
    }

    pub fn render(&self) -> String {
        format!(
            r#"<div class="status-msg" style="background-color: {};"><p>{}</p></div>"#,
            self.tone.color(),
            self.html
        )
    }
}

pub const INDEX_FAILED: Banner = Banner::error("There was an error. Please reload to try again.");
pub const INDEX_EMPTY: Banner = Banner::notice(
    "No products found in the database. <br/> Start adding some using the Submit link in the navigation.",
);
pub const QUERY_FAILED: Banner = Banner::error("There was an error. Please reload and try again.");
pub const SEARCH_EMPTY: Banner = Banner::notice("No products found with that query.");
pub const SORT_EMPTY: Banner = Banner::notice(
    "No products currently exist. Add some using the Submit link in the navigation.",
);
pub const ADD_FAILED: Banner = Banner::error("Unable to add product.");
pub const ADD_SUCCEEDED: Banner = Banner::success("Product successfully added.");
