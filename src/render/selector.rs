//! Render selection.
//!
//! # Responsibilities
//! - Match the forwarded API path against the known shapes, first match wins
//! - Decode the payload into that shape's typed view in the same step
//! - Fall back to the generic renderer for everything else
//!
//! # Design Decisions
//! - Shape detection happens only here; renderers never inspect raw fields
//! - A payload that matches a path but fails to decode renders generically

use serde::Deserialize;
use serde_json::Value;

use crate::classify::ClassifiedPayload;
use crate::render::shapes::{EggsPayload, ItemPayload, StatsPayload, STATS_COUNTERS};

pub const ITEMS_SEGMENT: &str = "items";
pub const STATS_PATH: &str = "stats";
pub const EGGS_PATH: &str = "eggs";

/// Which renderer handles a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererTag {
    Item,
    Stats,
    Eggs,
    Generic,
}

/// A payload decoded into the shape its renderer expects.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<'a> {
    Item(ItemPayload),
    Stats(StatsPayload, &'a Value),
    Eggs(EggsPayload),
    Generic(&'a ClassifiedPayload),
}

impl Shape<'_> {
    pub fn tag(&self) -> RendererTag {
        match self {
            Shape::Item(_) => RendererTag::Item,
            Shape::Stats(..) => RendererTag::Stats,
            Shape::Eggs(_) => RendererTag::Eggs,
            Shape::Generic(_) => RendererTag::Generic,
        }
    }
}

/// Pick the renderer for `path` (the part after `/api/`).
pub fn select(path: &str, payload: &ClassifiedPayload) -> RendererTag {
    decode(path, payload).tag()
}

/// Decode `payload` into the first shape whose rule matches.
pub fn decode<'a>(path: &str, payload: &'a ClassifiedPayload) -> Shape<'a> {
    let ClassifiedPayload::Structured(value) = payload else {
        return Shape::Generic(payload);
    };
    let Some(object) = value.as_object() else {
        return Shape::Generic(payload);
    };

    let path = path.trim_matches('/');

    if first_segment(path) == ITEMS_SEGMENT && object.get("pet").is_some_and(Value::is_object) {
        if let Ok(item) = ItemPayload::deserialize(value) {
            return Shape::Item(item);
        }
    } else if path == STATS_PATH
        && STATS_COUNTERS
            .iter()
            .any(|key| object.get(*key).is_some_and(Value::is_number))
    {
        if let Ok(stats) = StatsPayload::deserialize(value) {
            return Shape::Stats(stats, value);
        }
    } else if path == EGGS_PATH && object.get("eggs").is_some_and(Value::is_array) {
        if let Ok(eggs) = EggsPayload::deserialize(value) {
            return Shape::Eggs(eggs);
        }
    }

    Shape::Generic(payload)
}

fn first_segment(path: &str) -> &str {
    path.split('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn structured(value: Value) -> ClassifiedPayload {
        ClassifiedPayload::Structured(value)
    }

    #[test]
    fn test_item_requires_segment_and_pet_key() {
        let payload = structured(json!({ "pet": { "id": "dogcat" } }));
        assert_eq!(select("items/dogcat", &payload), RendererTag::Item);
        assert_eq!(select("pets/dogcat", &payload), RendererTag::Generic);

        let no_pet = structured(json!({ "item": {} }));
        assert_eq!(select("items/dogcat", &no_pet), RendererTag::Generic);
    }

    #[test]
    fn test_stats_requires_exact_path_and_counter() {
        let payload = structured(json!({ "usersOnline": 1234 }));
        assert_eq!(select("stats", &payload), RendererTag::Stats);
        assert_eq!(select("stats/", &payload), RendererTag::Stats);
        assert_eq!(select("stats/daily", &payload), RendererTag::Generic);

        let wrong_type = structured(json!({ "usersOnline": "many" }));
        assert_eq!(select("stats", &wrong_type), RendererTag::Generic);
    }

    #[test]
    fn test_eggs_requires_collection() {
        let payload = structured(json!({ "eggs": [] }));
        assert_eq!(select("eggs", &payload), RendererTag::Eggs);

        let not_array = structured(json!({ "eggs": 3 }));
        assert_eq!(select("eggs", &not_array), RendererTag::Generic);
    }

    #[test]
    fn test_undecodable_shape_falls_back() {
        let payload = structured(json!({ "eggs": [1, 2] }));
        assert_eq!(select("eggs", &payload), RendererTag::Generic);
    }

    #[test]
    fn test_non_object_and_text_are_generic() {
        assert_eq!(select("stats", &structured(json!([1, 2]))), RendererTag::Generic);
        assert_eq!(
            select("stats", &ClassifiedPayload::RawText("hi".into())),
            RendererTag::Generic
        );
    }
}
