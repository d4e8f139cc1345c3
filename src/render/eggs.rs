//! Egg catalog page.

use crate::render::format::{attr, format_count, format_value, text};
use crate::render::shapes::{EggRecord, EggsPayload};
use crate::render::{asset_url, layout, RenderContext};

pub fn render(eggs: &EggsPayload, ctx: &RenderContext) -> String {
    let mut body = format!("<h1>Eggs ({})</h1>\n", eggs.eggs.len());

    if eggs.eggs.is_empty() {
        body.push_str("<p>No eggs listed.</p>\n");
    }
    for egg in &eggs.eggs {
        body.push_str(&egg_card(egg, ctx));
    }

    layout::page("Eggs", ctx, &body)
}

fn egg_card(egg: &EggRecord, ctx: &RenderContext) -> String {
    let name = if egg.name.is_empty() { "Unnamed egg" } else { egg.name.as_str() };

    let mut card = String::from("<div class=\"card\">\n");
    if !egg.image.is_empty() {
        card.push_str(&format!(
            "<img class=\"thumb\" src=\"{}\" alt=\"{}\">\n",
            attr(&asset_url(&egg.image, ctx)),
            attr(name)
        ));
    }
    card.push_str(&format!("<h2>{}</h2>\n", text(name)));
    if !egg.world.is_empty() {
        card.push_str(&format!("<p>World: {}</p>\n", text(&egg.world)));
    }
    card.push_str(&format!("<p>Hatches: {}</p>\n", format_count(egg.hatches.as_ref())));

    if !egg.pets.is_empty() {
        card.push_str("<table>\n<tr><th>Pet</th><th>Rarity</th><th>Chance</th></tr>\n");
        for pet in &egg.pets {
            let chance = pet
                .chance
                .as_ref()
                .map(format_value)
                .unwrap_or_default();
            card.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                text(&pet.name),
                text(&pet.rarity),
                chance
            ));
        }
        card.push_str("</table>\n");
    }

    card.push_str("</div>\n");
    card
}
