use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::effects::{EnergyLevel, Mood, MotionType, Vibe};
use super::library::Rgb;

/// Semantic attributes extracted from a free-text query
#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "query.ts")]
#[ts(rename_all = "camelCase")]
pub struct QueryAnalysis {
    pub theme: Option<String>,
    pub context: Option<String>,
    pub mood: Option<Mood>,
    pub vibe: Option<Vibe>,
    pub energy_level: Option<EnergyLevel>,
    pub motion_type: Option<MotionType>,
    pub color_preferences: Vec<Rgb>,
    /// Set when the query asks for effects that bring their own colors
    pub wants_color_override: bool,
    pub query_hash: String,
}

impl QueryAnalysis {
    pub fn has_color_preference(&self) -> bool {
        !self.color_preferences.is_empty()
    }
}
