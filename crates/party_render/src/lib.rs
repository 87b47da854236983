use std::fmt::Write as _;

use party_core::catalog::{mp6, mp9};
use party_core::core_api::{Feature, Game, GeneratedBlock};
use serde_json::{Map as JsonMap, Value as JsonValue};

const CATALOG_ID_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

/// A row of a label table as shown by `list` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
}

/// The clipboard payload: every block back to back, outer whitespace
/// trimmed.
pub fn render_text(blocks: &[GeneratedBlock]) -> String {
    let joined: String = blocks.iter().map(|block| block.text.as_str()).collect();
    joined.trim().to_string()
}

pub fn render_json(blocks: &[GeneratedBlock], style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Array(blocks.iter().map(block_json).collect()),
    }
}

fn block_json(block: &GeneratedBlock) -> JsonValue {
    let parsed = block.code_block();
    let mut out = JsonMap::new();

    out.insert(
        "game".to_string(),
        JsonValue::String(match block.game {
            Game::MarioParty6 => "MarioParty6".to_string(),
            Game::MarioParty9 => "MarioParty9".to_string(),
        }),
    );
    out.insert(
        "feature".to_string(),
        JsonValue::String(block.feature.as_str().to_string()),
    );
    out.insert("title".to_string(), JsonValue::String(parsed.title));
    out.insert(
        "lines".to_string(),
        JsonValue::Array(parsed.lines.into_iter().map(JsonValue::String).collect()),
    );

    JsonValue::Object(out)
}

/// Minigame table for `game`, IDs formatted at their template slot width.
pub fn minigame_catalog(game: Game) -> Vec<CatalogEntry> {
    match game {
        Game::MarioParty6 => indexed_entries(mp6::MINIGAMES, 2),
        Game::MarioParty9 => indexed_entries(mp9::MINIGAMES, 6),
    }
}

pub fn space_catalog(game: Game) -> Option<Vec<CatalogEntry>> {
    match game {
        Game::MarioParty6 => Some(indexed_entries(mp6::SPACES, 2)),
        Game::MarioParty9 => None,
    }
}

pub fn orb_catalog(game: Game) -> Option<Vec<CatalogEntry>> {
    match game {
        Game::MarioParty6 => Some(
            mp6::ORBS
                .iter()
                .map(|slot| CatalogEntry {
                    id: format!("{:02X}", slot.id),
                    name: slot.label(),
                })
                .collect(),
        ),
        Game::MarioParty9 => None,
    }
}

fn indexed_entries(names: &[&str], width: usize) -> Vec<CatalogEntry> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| CatalogEntry {
            id: format!("{index:0width$X}"),
            name: (*name).to_string(),
        })
        .collect()
}

pub fn render_catalog_text(entries: &[CatalogEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        writeln!(
            out,
            "{:<width$}{}",
            entry.id,
            entry.name,
            width = CATALOG_ID_WIDTH
        )
        .expect("writing to String cannot fail");
    }
    out
}

pub fn render_catalog_json(entries: &[CatalogEntry]) -> JsonValue {
    JsonValue::Array(
        entries
            .iter()
            .map(|entry| {
                let mut out = JsonMap::new();
                out.insert("id".to_string(), JsonValue::String(entry.id.clone()));
                out.insert("name".to_string(), JsonValue::String(entry.name.clone()));
                JsonValue::Object(out)
            })
            .collect(),
    )
}

pub fn render_features_text(features: &[Feature]) -> String {
    let mut out = String::new();
    for feature in features {
        writeln!(out, "{feature}").expect("writing to String cannot fail");
    }
    out
}
