//! Fallback renderer: key-sorted pretty JSON, or the raw text as-is.

use serde_json::{Map, Value};

use crate::classify::ClassifiedPayload;
use crate::render::format::text;
use crate::render::{layout, RenderContext};

pub fn render(payload: &ClassifiedPayload, ctx: &RenderContext) -> String {
    let content = match payload {
        ClassifiedPayload::Structured(value) => pretty_sorted(value),
        ClassifiedPayload::RawText(raw) => raw.clone(),
    };

    let title = format!("API Data: {}", ctx.request_path);
    layout::page(&title, ctx, &format!("<pre>{}</pre>", text(&content)))
}

/// Two-space indented JSON with object keys in sorted order at every depth.
pub fn pretty_sorted(value: &Value) -> String {
    serde_json::to_string_pretty(&sort_keys(value)).unwrap_or_else(|_| value.to_string())
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut keys: Vec<_> = object.keys().collect();
            keys.sort();
            let mut sorted = Map::with_capacity(object.len());
            for key in keys {
                sorted.insert(key.clone(), sort_keys(&object[key.as_str()]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}
