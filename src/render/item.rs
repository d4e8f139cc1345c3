//! Item detail page.

use crate::render::format::{attr, format_count, format_timestamp, text};
use crate::render::shapes::{ItemPayload, VariantRecord};
use crate::render::{asset_url, layout, RenderContext};

/// Render a single pet with links to its other variants.
pub fn render(item: &ItemPayload, ctx: &RenderContext) -> String {
    let pet = &item.pet;
    let primary_id = primary_id(item, ctx);

    let display_name = match (pet.name.is_empty(), pet.variant.is_empty()) {
        (true, _) => primary_id.to_string(),
        (false, true) => pet.name.clone(),
        (false, false) => format!("{} ({})", pet.name, pet.variant),
    };

    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", text(&display_name)));
    if !pet.image.is_empty() {
        body.push_str(&format!(
            "<img class=\"thumb\" src=\"{}\" alt=\"{}\">\n",
            attr(&asset_url(&pet.image, ctx)),
            attr(&display_name)
        ));
    }

    body.push_str("<table>\n");
    row(&mut body, "Rarity", &text(&pet.rarity));
    row(&mut body, "Chance", &format_count(pet.chance.as_ref()));
    row(&mut body, "Exists", &format_count(pet.exists.as_ref()));
    row(&mut body, "Hatches", &format_count(pet.hatches.as_ref()));
    row(&mut body, "Owners", &format_count(pet.owners.as_ref()));
    row(&mut body, "Value", &format_count(pet.value.as_ref()));
    if !pet.updated_at.is_empty() {
        row(&mut body, "Updated", &format_timestamp(&pet.updated_at));
    }
    body.push_str("</table>\n");

    let variants = alternate_variants(item, primary_id);
    if !variants.is_empty() {
        body.push_str("<h2>Other variants</h2>\n<ul>\n");
        for variant in variants {
            let label = match (variant.name.is_empty(), variant.variant.is_empty()) {
                (true, true) => variant.id.clone(),
                (true, false) => variant.variant.clone(),
                (false, true) => variant.name.clone(),
                (false, false) => format!("{} ({})", variant.name, variant.variant),
            };
            body.push_str(&format!(
                "<li><a href=\"{}\">{}</a> &middot; exists {}</li>\n",
                attr(&format!(
                    "{}/api/items/{}",
                    ctx.base_url,
                    encode_segment(&variant.id)
                )),
                text(&label),
                format_count(variant.exists.as_ref())
            ));
        }
        body.push_str("</ul>\n");
    }

    layout::page(&display_name, ctx, &body)
}

/// Variants to link to: everything except the primary record itself.
pub fn alternate_variants<'a>(item: &'a ItemPayload, primary_id: &str) -> Vec<&'a VariantRecord> {
    item.all_variants()
        .iter()
        .filter(|v| !v.id.is_empty() && v.id != primary_id)
        .collect()
}

/// The pet's own id, or the `{id}` segment of `items/{id}` when the payload has none.
fn primary_id<'a>(item: &'a ItemPayload, ctx: &'a RenderContext) -> &'a str {
    if !item.pet.id.is_empty() {
        return &item.pet.id;
    }
    ctx.request_path
        .trim_matches('/')
        .split('/')
        .skip_while(|s| *s != "items")
        .nth(1)
        .unwrap_or_default()
}

fn row(body: &mut String, label: &str, value_html: &str) {
    body.push_str(&format!("<tr><th>{label}</th><td>{value_html}</td></tr>\n"));
}

/// Percent-encode one path segment.
fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
