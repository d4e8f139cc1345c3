//! Global stats page.

use serde_json::Value;

use crate::render::format::{format_count, format_timestamp, format_value, text};
use crate::render::shapes::{StatsPayload, STATS_COUNTERS};
use crate::render::{layout, RenderContext};

pub fn render(stats: &StatsPayload, raw: &Value, ctx: &RenderContext) -> String {
    let mut body = String::from("<h1>Global stats</h1>\n<table>\n");

    for (label, value) in [
        ("Users online", &stats.users_online),
        ("Secret hatches (24h)", &stats.secret_hatches_24h),
        ("Total pets", &stats.total_pets),
        ("Total exists", &stats.total_exists),
    ] {
        body.push_str(&format!(
            "<tr><th>{label}</th><td>{}</td></tr>\n",
            format_count(value.as_ref())
        ));
    }
    body.push_str("</table>\n");

    // Counters the page does not know about yet still get shown.
    if let Some(object) = raw.as_object() {
        let extra: Vec<_> = object
            .iter()
            .filter(|(key, value)| {
                !STATS_COUNTERS.contains(&key.as_str())
                    && key.as_str() != "updatedAt"
                    && !value.is_object()
                    && !value.is_array()
            })
            .collect();

        if !extra.is_empty() {
            body.push_str("<h2>More</h2>\n<table>\n");
            for (key, value) in extra {
                body.push_str(&format!(
                    "<tr><th>{}</th><td>{}</td></tr>\n",
                    text(key),
                    format_value(value)
                ));
            }
            body.push_str("</table>\n");
        }
    }

    if !stats.updated_at.is_empty() {
        body.push_str(&format!(
            "<p>Updated {}</p>\n",
            format_timestamp(&stats.updated_at)
        ));
    }

    layout::page("Global stats", ctx, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx() -> RenderContext {
        RenderContext {
            request_path: "/api/stats".into(),
            request_url: "http://proxy.local/api/stats".into(),
            base_url: "http://proxy.local".into(),
        }
    }

    #[test]
    fn test_counters_are_grouped() {
        let raw = json!({
            "usersOnline": 1234, "secretHatches24h": 5, "totalPets": 10, "totalExists": 99
        });
        let stats: StatsPayload = serde_json::from_value(raw.clone()).unwrap();
        let html = render(&stats, &raw, &ctx());

        assert!(html.contains("<tr><th>Users online</th><td>1,234</td></tr>"));
        assert!(html.contains("<tr><th>Secret hatches (24h)</th><td>5</td></tr>"));
        assert!(html.contains("<tr><th>Total pets</th><td>10</td></tr>"));
        assert!(html.contains("<tr><th>Total exists</th><td>99</td></tr>"));
        assert!(!html.contains("<h2>More</h2>"));
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let raw = json!({ "usersOnline": 7 });
        let stats: StatsPayload = serde_json::from_value(raw.clone()).unwrap();
        let html = render(&stats, &raw, &ctx());
        assert!(html.contains("<tr><th>Total pets</th><td>0</td></tr>"));
    }

    #[test]
    fn test_unknown_scalars_listed_and_escaped() {
        let raw = json!({ "usersOnline": 1, "<new>": 25000, "nested": { "a": 1 } });
        let stats: StatsPayload = serde_json::from_value(raw.clone()).unwrap();
        let html = render(&stats, &raw, &ctx());
        assert!(html.contains("<tr><th>&lt;new&gt;</th><td>25,000</td></tr>"));
        assert!(!html.contains("nested"));
    }
}
