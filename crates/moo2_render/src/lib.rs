use std::fmt::Write as _;

use moo2_core::{CoreError, Game, PlanetSummary, PlayerSummary, StarSummary};
use serde_json::{Map as JsonMap, Value as JsonValue};

const NAME_COL_WIDTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

/// Which sections to render. Nothing selected means everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SectionSelection {
    pub players: bool,
    pub stars: bool,
    pub planets: bool,
}

impl SectionSelection {
    pub fn all() -> Self {
        Self {
            players: true,
            stars: true,
            planets: true,
        }
    }

    pub fn is_any_selected(&self) -> bool {
        self.players || self.stars || self.planets
    }

    fn or_all(self) -> Self {
        if self.is_any_selected() {
            self
        } else {
            Self::all()
        }
    }
}

pub fn render_json_full(game: &Game, style: JsonStyle) -> Result<JsonValue, CoreError> {
    render_json_selected(game, &SectionSelection::all(), style)
}

pub fn render_json_selected(
    game: &Game,
    sections: &SectionSelection,
    style: JsonStyle,
) -> Result<JsonValue, CoreError> {
    match style {
        JsonStyle::CanonicalV1 => selected_json(game, &sections.or_all()).map(JsonValue::Object),
    }
}

pub fn render_text(game: &Game, sections: &SectionSelection) -> Result<String, CoreError> {
    let sections = sections.or_all();
    let summary = game.summary()?;
    let mut out = String::new();

    if sections.players {
        writeln!(out, "::: Players :::").expect("writing to String cannot fail");
        for player in &summary.players {
            writeln!(
                out,
                "  {:>2}  {:<width$} {}",
                player.index,
                player.race_name,
                player.leader_name,
                width = NAME_COL_WIDTH
            )
            .expect("writing to String cannot fail");
        }
    }
    if sections.stars {
        writeln!(out, "::: Stars :::").expect("writing to String cannot fail");
        for star in &summary.stars {
            writeln!(
                out,
                "  {:>2}  {:<width$} ({}, {})  {} bodies",
                star.index,
                star.name,
                star.x,
                star.y,
                star.planets.len(),
                width = NAME_COL_WIDTH
            )
            .expect("writing to String cannot fail");
        }
    }
    if sections.planets {
        writeln!(out, "::: Planets :::").expect("writing to String cannot fail");
        for star in &summary.stars {
            for planet in &star.planets {
                writeln!(out, "  {}", planet_line(star, planet))
                    .expect("writing to String cannot fail");
            }
        }
        writeln!(
            out,
            "  Highest planet number: {}",
            summary
                .max_planet
                .map_or_else(|| "none".to_string(), |m| m.to_string())
        )
        .expect("writing to String cannot fail");
    }

    Ok(out)
}

/// One-line description of a single planet, e.g.
/// `Sol/2 planet-001 medium abundant terran NG food=2`.
pub fn planet_line(star: &StarSummary, planet: &PlanetSummary) -> String {
    let mut line = format!(
        "{}/{} planet-{:03} {}",
        star.name,
        planet.position,
        planet.index,
        label_or_raw(&planet.body_type_label, planet.body_type)
    );
    if planet.body_type_label.as_deref() == Some("planet") {
        write!(
            line,
            " {} {} {} {}",
            label_or_raw(&planet.size_label, planet.size),
            label_or_raw(&planet.richness_label, planet.richness),
            label_or_raw(&planet.terraform_label, planet.terraform),
            label_or_raw(&planet.gravity_label, planet.gravity)
        )
        .expect("writing to String cannot fail");
    }
    write!(line, " food={}", planet.food).expect("writing to String cannot fail");
    if let Some(colony) = planet.colony {
        write!(line, " colony={colony}").expect("writing to String cannot fail");
    }
    line
}

fn selected_json(
    game: &Game,
    sections: &SectionSelection,
) -> Result<JsonMap<String, JsonValue>, CoreError> {
    let summary = game.summary()?;
    let mut out = JsonMap::new();

    if sections.players {
        out.insert(
            "players".to_string(),
            JsonValue::Array(summary.players.iter().map(player_to_json).collect()),
        );
    }
    if sections.stars {
        out.insert(
            "stars".to_string(),
            JsonValue::Array(summary.stars.iter().map(star_to_json).collect()),
        );
    }
    if sections.planets {
        out.insert(
            "max_planet".to_string(),
            summary.max_planet.map_or(JsonValue::Null, JsonValue::from),
        );
        out.insert(
            "planets".to_string(),
            JsonValue::Array(
                summary
                    .stars
                    .iter()
                    .flat_map(|star| star.planets.iter())
                    .map(planet_to_json)
                    .collect(),
            ),
        );
    }

    Ok(out)
}

fn player_to_json(player: &PlayerSummary) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert("index".to_string(), JsonValue::from(player.index));
    out.insert(
        "race".to_string(),
        JsonValue::String(player.race_name.clone()),
    );
    out.insert(
        "leader".to_string(),
        JsonValue::String(player.leader_name.clone()),
    );
    JsonValue::Object(out)
}

fn star_to_json(star: &StarSummary) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert("index".to_string(), JsonValue::from(star.index));
    out.insert("name".to_string(), JsonValue::String(star.name.clone()));
    out.insert("x".to_string(), JsonValue::from(star.x));
    out.insert("y".to_string(), JsonValue::from(star.y));
    out.insert(
        "planets".to_string(),
        JsonValue::Array(
            star.planets
                .iter()
                .map(|p| JsonValue::from(p.index))
                .collect(),
        ),
    );
    JsonValue::Object(out)
}

fn planet_to_json(planet: &PlanetSummary) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert("index".to_string(), JsonValue::from(planet.index));
    out.insert("star".to_string(), JsonValue::from(planet.star));
    out.insert("position".to_string(), JsonValue::from(planet.position));
    out.insert("type".to_string(), coded_json(planet.body_type, &planet.body_type_label));
    out.insert("size".to_string(), coded_json(planet.size, &planet.size_label));
    out.insert("gravity".to_string(), coded_json(planet.gravity, &planet.gravity_label));
    out.insert("richness".to_string(), coded_json(planet.richness, &planet.richness_label));
    out.insert(
        "terraform".to_string(),
        coded_json(planet.terraform, &planet.terraform_label),
    );
    out.insert("food".to_string(), JsonValue::from(planet.food));
    out.insert("scenery".to_string(), JsonValue::from(planet.scenery));
    out.insert(
        "colony".to_string(),
        planet.colony.map_or(JsonValue::Null, JsonValue::from),
    );
    JsonValue::Object(out)
}

/// Labelled codes render as their label; codes outside the table stay raw.
fn coded_json(raw: u8, label: &Option<String>) -> JsonValue {
    match label {
        Some(label) => JsonValue::String(label.clone()),
        None => JsonValue::from(raw),
    }
}

fn label_or_raw(label: &Option<String>, raw: u8) -> String {
    label.clone().unwrap_or_else(|| format!("?{raw}"))
}
