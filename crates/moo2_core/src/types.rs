use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanetSummary {
    pub index: usize,
    pub star: usize,
    pub position: u8,
    pub body_type: u8,
    pub body_type_label: Option<String>,
    pub size: u8,
    pub size_label: Option<String>,
    pub gravity: u8,
    pub gravity_label: Option<String>,
    pub richness: u8,
    pub richness_label: Option<String>,
    pub terraform: u8,
    pub terraform_label: Option<String>,
    pub food: u8,
    pub scenery: u8,
    pub colony: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StarSummary {
    pub index: usize,
    pub name: String,
    pub x: u16,
    pub y: u16,
    pub planets: Vec<PlanetSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerSummary {
    pub index: usize,
    pub leader_name: String,
    pub race_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub max_planet: Option<usize>,
    pub players: Vec<PlayerSummary>,
    pub stars: Vec<StarSummary>,
}
