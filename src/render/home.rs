//! Landing page served at `/`.

use crate::render::format::attr;
use crate::render::{layout, RenderContext};

pub fn render(ctx: &RenderContext) -> String {
    let link = |path: &str| {
        format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            attr(&format!("{}{}", ctx.base_url, path)),
            path
        )
    };

    let mut body = String::from("<h1>API viewer</h1>\n");
    body.push_str(
        "<p>Any path under <code>/api/</code> is fetched from the data API and shown as a page. \
         Image paths (for example <code>/pets/dogcat.png</code>) are served from the asset host.</p>\n",
    );
    body.push_str("<ul>\n");
    body.push_str(&link("/api/stats"));
    body.push_str(&link("/api/eggs"));
    body.push_str("</ul>\n");
    body.push_str("<p>Item pages live at <code>/api/items/{id}</code>.</p>\n");

    layout::page("API viewer", ctx, &body)
}
