//! Standalone HTML documents
//!
//! A [`Document`] wraps one [`Figure`] into a single self-contained page:
//! inline stylesheet, the figure embedded as JSON, and the inline script that
//! draws it. The output depends only on the figure, so rendering the same
//! figure twice yields identical bytes.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::figure::Figure;

const FIGURE_SCRIPT: &str = include_str!("../assets/figure.js");
const FIGURE_STYLE: &str = include_str!("../assets/figure.css");

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SaveError {
    #[display("failed to encode figure '{title}'")]
    Encode {
        title: String,
        source: serde_json::Error,
    },
    #[display("failed to write {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    figure: Figure,
}

impl Document {
    #[must_use]
    pub fn new(title: impl Into<String>, figure: Figure) -> Self {
        Self {
            title: title.into(),
            figure,
        }
    }

    #[must_use]
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn render_html(&self) -> Result<String, serde_json::Error> {
        let data = embed_json(&serde_json::to_string(&self.figure)?);
        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{style}</style>
</head>
<body>
<div id="figure-root"></div>
<script type="application/json" id="figure-data">{data}</script>
<script>
{script}</script>
</body>
</html>
"#,
            title = html_escape(&self.title),
            style = FIGURE_STYLE,
            script = FIGURE_SCRIPT,
        ))
    }

    /// Renders the page and writes it to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        let html = self.render_html().map_err(|source| SaveError::Encode {
            title: self.title.clone(),
            source,
        })?;
        fs::write(path, html).map_err(|source| SaveError::Write {
            path: path.to_owned(),
            source,
        })
    }
}

/// Makes JSON safe to place inside a `<script>` element.
///
/// `<\/` is a valid JSON escape for `</`, so the parsed value is unchanged.
fn embed_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
