//! Static catalog of case-study entries shown in the overlay.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::EntryId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate catalog entry id {0}")]
    DuplicateId(EntryId),
}

/// Size class of a gallery tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSize {
    #[default]
    Square,
    Wide,
    Tall,
}

impl TileSize {
    /// CSS class carried by the tile, if any.
    #[must_use]
    pub const fn class_name(self) -> Option<&'static str> {
        match self {
            Self::Square => None,
            Self::Wide => Some("gallery-item-wide"),
            Self::Tall => Some("gallery-item-tall"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryTile {
    pub glyph: String,
    #[serde(default)]
    pub size: TileSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credit {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    pub id: EntryId,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub credits: Vec<Credit>,
    /// CSS background of the overlay hero (e.g. a gradient).
    #[serde(default)]
    pub hero_background: Option<String>,
    #[serde(default)]
    pub gallery: Vec<GalleryTile>,
}

/// Read-only lookup of entries by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentCatalog {
    entries: BTreeMap<EntryId, ContentEntry>,
}

impl ContentCatalog {
    /// # Errors
    /// Two entries share an id.
    pub fn from_entries(entries: Vec<ContentEntry>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for entry in entries {
            let id = entry.id;
            if map.insert(id, entry).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }
        Ok(Self { entries: map })
    }

    /// Parses a JSON array of entries. Zero ids are rejected.
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let entries: Vec<ContentEntry> = serde_json::from_str(content)?;
        Self::from_entries(entries)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        tracing::debug!("Loading catalog from: {:?}", path);
        Self::parse(&std::fs::read_to_string(path)?)
    }

    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&ContentEntry> {
        self.entries.get(&id)
    }

    pub fn entries(&self) -> impl Iterator<Item = &ContentEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The six case studies of the studio portfolio.
    #[must_use]
    pub fn studio() -> Self {
        let entries = STUDIO_ENTRIES
            .iter()
            .zip(1..)
            .filter_map(|(seed, id)| EntryId::new(id).map(|id| seed.to_entry(id)))
            .map(|entry| (entry.id, entry))
            .collect();
        Self { entries }
    }
}

struct EntrySeed {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    role: &'static str,
    year: &'static str,
    team: &'static str,
    hero: &'static str,
    gallery: [(&'static str, TileSize); 6],
}

impl EntrySeed {
    fn to_entry(&self, id: EntryId) -> ContentEntry {
        let credit = |label: &str, value: &str| Credit {
            label: label.to_string(),
            value: value.to_string(),
        };
        ContentEntry {
            id,
            title: self.title.to_string(),
            category: self.category.to_string(),
            description: self.description.to_string(),
            credits: vec![
                credit("Role", self.role),
                credit("Year", self.year),
                credit("Team", self.team),
            ],
            hero_background: Some(self.hero.to_string()),
            gallery: self
                .gallery
                .iter()
                .map(|(glyph, size)| GalleryTile { glyph: (*glyph).to_string(), size: *size })
                .collect(),
        }
    }
}

use TileSize::{
    Square,
    Tall,
    Wide,
};

const STUDIO_ENTRIES: [EntrySeed; 6] = [
    EntrySeed {
        title: "Obsidian Luxury",
        category: "Branding",
        description: "A complete rebrand for a premium lifestyle company, transforming their visual identity into a sleek, monochromatic presence that speaks sophistication without a single word. Every touchpoint — from business cards to flagship store signage — was reimagined to convey understated power.",
        role: "Brand Strategy, Visual Identity, Art Direction",
        year: "2024",
        team: "VNYX Creative Team",
        hero: "linear-gradient(135deg, #0f0f0f 0%, #1a1a1a 40%, #111 100%)",
        gallery: [("◆", Wide), ("◇", Square), ("□", Tall), ("△", Square), ("○", Wide), ("⬡", Square)],
    },
    EntrySeed {
        title: "Noir Finance",
        category: "UI/UX Design",
        description: "A dark-mode-first fintech dashboard that makes complex financial data feel elegant and approachable. We redesigned the entire user journey — from onboarding to advanced analytics — with a focus on clean data visualization that meets premium aesthetics. The result: a 40% increase in daily active usage.",
        role: "UX Research, UI Design, Prototyping",
        year: "2024",
        team: "VNYX Digital Team",
        hero: "linear-gradient(135deg, #0a0a0a 0%, #151515 40%, #0d0d0d 100%)",
        gallery: [("□", Square), ("◇", Tall), ("△", Wide), ("○", Square), ("◆", Square), ("⬡", Wide)],
    },
    EntrySeed {
        title: "Kinetic Reel",
        category: "Motion Design",
        description: "Our annual studio showreel — a cinematic exploration of movement, form, and rhythm. From subtle micro-animations to full 3D sequences, this reel captures the essence of what we do: bringing stillness to life. Featured at Jakarta Design Week 2024.",
        role: "Motion Design, 3D Animation, Sound Design",
        year: "2024",
        team: "VNYX Motion Lab",
        hero: "linear-gradient(135deg, #121212 0%, #0a0a0a 40%, #161616 100%)",
        gallery: [("▷", Wide), ("△", Tall), ("◇", Square), ("□", Wide), ("○", Square), ("◆", Square)],
    },
    EntrySeed {
        title: "Vertex Studio",
        category: "3D Visualization",
        description: "Photorealistic 3D product visualization for a cutting-edge tech hardware company. We transformed engineering blueprints into stunning visual narratives — interactive walkthroughs, hero shots, and exploded views that reveal the beauty of precision engineering.",
        role: "3D Modeling, Rendering, Creative Direction",
        year: "2024",
        team: "VNYX 3D Division",
        hero: "linear-gradient(135deg, #0d0d0d 0%, #181818 40%, #0a0a0a 100%)",
        gallery: [("⬡", Tall), ("◆", Wide), ("◇", Square), ("△", Square), ("□", Wide), ("○", Square)],
    },
    EntrySeed {
        title: "Monolith Co.",
        category: "Branding",
        description: "Brand identity for an architecture firm specializing in brutalist design. The identity mirrors their philosophy — bold, structural, unapologetic. We created a visual system built on geometric precision, raw materials, and the power of negative space.",
        role: "Brand Identity, Print Design, Environmental Graphics",
        year: "2023",
        team: "VNYX Creative Team",
        hero: "linear-gradient(135deg, #141414 0%, #0b0b0b 40%, #171717 100%)",
        gallery: [("□", Wide), ("△", Square), ("◆", Square), ("○", Tall), ("◇", Wide), ("⬡", Square)],
    },
    EntrySeed {
        title: "Shadow App",
        category: "UI/UX Design",
        description: "A dark-mode-first mobile application for productivity and deep focus. Every pixel was crafted for minimal eye strain and maximum clarity. We designed an entire design system from scratch — components, tokens, and patterns — that scales beautifully across platforms.",
        role: "Product Design, Design System, Prototyping",
        year: "2024",
        team: "VNYX Digital Team",
        hero: "linear-gradient(135deg, #0e0e0e 0%, #161616 40%, #0a0a0a 100%)",
        gallery: [("◇", Square), ("□", Wide), ("◆", Tall), ("△", Square), ("○", Square), ("⬡", Wide)],
    },
];
