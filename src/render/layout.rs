//! Shared page shell for every rendered document.
//!
//! Callers pass already-escaped fragments for `body`; every plain value that
//! goes through [`page`] or [`error_page`] directly is escaped here.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::render::RenderContext;

const STYLE: &str = r#"
    body {
      background: #0f0f0f;
      color: #fefefe;
      font-family: monospace;
      font-size: 13px;
      padding: 1rem;
      margin: 0;
    }
    a { color: #7cc4ff; }
    pre { white-space: pre; overflow-x: auto; margin: 0; }
    h1 { font-size: 18px; }
    h1.error { color: #ff6b6b; }
    table { border-collapse: collapse; }
    td, th { padding: 0.25rem 0.75rem; text-align: left; border-bottom: 1px solid #2a2a2a; }
    .card { display: inline-block; vertical-align: top; margin: 0.5rem; padding: 0.75rem; border: 1px solid #2a2a2a; }
    .details { background: #1a1a1a; padding: 0.75rem; }
    img.thumb { width: 64px; height: 64px; object-fit: contain; }
"#;

/// Wrap an already-escaped body fragment in a complete HTML document.
pub fn page(title: &str, ctx: &RenderContext, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <meta property="og:title" content="{title_attr}">
  <meta property="og:url" content="{url}">
  <link rel="canonical" href="{url}">
  <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = encode_text(title),
        title_attr = encode_double_quoted_attribute(title),
        url = encode_double_quoted_attribute(&ctx.request_url),
    )
}

/// A complete error document. `extra` must already be escaped.
pub fn error_page(title: &str, message: &str, details: Option<&str>, extra: &str) -> String {
    let details = match details {
        Some(details) if !details.is_empty() => format!(
            "<div class=\"details\"><pre>{}</pre></div>\n",
            encode_text(details)
        ),
        _ => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
<h1 class="error">{title}</h1>
<p>{message}</p>
{details}{extra}</body>
</html>
"#,
        title = encode_text(title),
        message = encode_text(message),
    )
}
