//! Domain types shared across the application.
//!
//! Wire shapes mirror the PokeAPI responses; everything the UI does not
//! consume is simply not declared and serde skips it.

use serde::Deserialize;

/// Authenticated session identity: email plus an opaque bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub email: String,
    pub token: String,
}

/// One index record of the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
}

impl CatalogEntry {
    /// Numeric identifier encoded as the trailing path segment of `url`.
    ///
    /// Accepts both `/pokemon/25/` and `/pokemon/25`; anything that does not
    /// end in an integer yields 0.
    pub fn id(&self) -> u32 {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
            .unwrap_or(0)
    }
}

/// Response envelope of `GET /pokemon?limit=2000`.
///
/// The upstream `count`/`next`/`previous` fields are ignored; only `results`
/// is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogPage {
    pub results: Vec<CatalogEntry>,
}

/// Named sub-resource inside a detail record. The accompanying `url` field is
/// not consumed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Sprite axis: normal palette vs the shiny recolor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteVariant {
    Normal,
    Shiny,
}

/// Sprite axis: which side of the creature is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteFace {
    Front,
    Back,
}

/// The four sprite URL slots of a detail record. Any of them may be null
/// upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
}

impl Sprites {
    /// Deterministic mapping from the two toggle axes to one URL slot.
    pub fn url(&self, variant: SpriteVariant, face: SpriteFace) -> Option<&str> {
        let slot = match (variant, face) {
            (SpriteVariant::Normal, SpriteFace::Front) => &self.front_default,
            (SpriteVariant::Normal, SpriteFace::Back) => &self.back_default,
            (SpriteVariant::Shiny, SpriteFace::Front) => &self.front_shiny,
            (SpriteVariant::Shiny, SpriteFace::Back) => &self.back_shiny,
        };
        slot.as_deref()
    }
}

/// Per-creature enriched record fetched on demand.
///
/// Optional attributes decode as absent rather than failing the whole record;
/// the modal renders a placeholder for them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonDetails {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}
