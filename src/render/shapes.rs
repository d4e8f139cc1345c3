//! Typed views of the known upstream payload shapes.
//!
//! Every field has a default so a partially changed upstream schema still
//! decodes. Text fields accept strings, numbers or null.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `GET /api/items/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ItemPayload {
    pub pet: PetRecord,
    pub variants: Vec<VariantRecord>,
}

impl ItemPayload {
    /// Variants listed next to the pet, or inside it when the top level has none.
    pub fn all_variants(&self) -> &[VariantRecord] {
        if self.variants.is_empty() {
            &self.pet.variants
        } else {
            &self.variants
        }
    }
}

/// The primary record of an item page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PetRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub variant: String,
    #[serde(deserialize_with = "lenient_string")]
    pub rarity: String,
    #[serde(deserialize_with = "lenient_string")]
    pub image: String,
    pub chance: Option<Value>,
    pub exists: Option<Value>,
    pub hatches: Option<Value>,
    pub owners: Option<Value>,
    pub value: Option<Value>,
    #[serde(rename = "updatedAt", deserialize_with = "lenient_string")]
    pub updated_at: String,
    pub variants: Vec<VariantRecord>,
}

/// Another variant of the same pet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VariantRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub variant: String,
    #[serde(deserialize_with = "lenient_string")]
    pub image: String,
    pub exists: Option<Value>,
}

/// `GET /api/stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsPayload {
    #[serde(rename = "usersOnline")]
    pub users_online: Option<Value>,
    #[serde(rename = "secretHatches24h")]
    pub secret_hatches_24h: Option<Value>,
    #[serde(rename = "totalPets")]
    pub total_pets: Option<Value>,
    #[serde(rename = "totalExists")]
    pub total_exists: Option<Value>,
    #[serde(rename = "updatedAt", deserialize_with = "lenient_string")]
    pub updated_at: String,
}

/// Top-level counters that identify a stats payload.
pub const STATS_COUNTERS: [&str; 4] = ["usersOnline", "secretHatches24h", "totalPets", "totalExists"];

/// `GET /api/eggs`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EggsPayload {
    pub eggs: Vec<EggRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EggRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(deserialize_with = "lenient_string")]
    pub world: String,
    pub hatches: Option<Value>,
    pub pets: Vec<EggPet>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EggPet {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub rarity: String,
    pub chance: Option<Value>,
    #[serde(deserialize_with = "lenient_string")]
    pub image: String,
}

/// Accept a string, a number or a bool as text; anything else becomes empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}
