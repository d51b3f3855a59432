use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::effects::EffectId;

/// Plain 8-bit RGB triple
#[derive(TS, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[ts(export, export_to = "library.ts")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From a 0xRRGGBB literal
    pub const fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Parse "#rrggbb" or "rrggbb"
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Device color quad. The white channel stays 0 so saturated hues are
    /// not washed out by the white LED.
    pub fn to_device_quad(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0]
    }

    /// Scale every channel by `percent` (0..=100)
    pub fn dimmed(self, percent: u8) -> Self {
        let pct = u16::from(percent.min(100));
        let scale = |c: u8| ((u16::from(c) * pct + 50) / 100) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

/// Level of a node in the catalog hierarchy
#[derive(TS, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[ts(export, export_to = "library.ts")]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Category,
    Folder,
    Palette,
}

impl From<&str> for NodeType {
    fn from(s: &str) -> Self {
        match s {
            "category" => NodeType::Category,
            "palette" => NodeType::Palette,
            _ => NodeType::Folder,
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeType::Category => write!(f, "category"),
            NodeType::Folder => write!(f, "folder"),
            NodeType::Palette => write!(f, "palette"),
        }
    }
}

/// Which generator expands a palette node into patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Curated effect template against the node colors
    Template,
    /// On/off grouping grid
    Spacing,
    /// Bright/dim grid plus twinkle variants
    Galaxy,
    /// Twinkle variants only
    Twinkle,
}

impl From<&str> for GeneratorKind {
    fn from(s: &str) -> Self {
        match s {
            "spacing" => GeneratorKind::Spacing,
            "galaxy" => GeneratorKind::Galaxy,
            "twinkle" => GeneratorKind::Twinkle,
            _ => GeneratorKind::Template,
        }
    }
}

// Metadata keys understood by the generator, matcher and search.
pub const META_SUGGESTED_EFFECTS: &str = "suggestedEffects";
pub const META_DEFAULT_SPEED: &str = "defaultSpeed";
pub const META_DEFAULT_INTENSITY: &str = "defaultIntensity";
pub const META_BRIGHTNESS: &str = "brightness";
pub const META_GROUPING: &str = "grouping";
pub const META_SPACING: &str = "spacing";
pub const META_DIM_LEVEL: &str = "dimLevel";
pub const META_GENERATOR: &str = "generator";
pub const META_STYLE: &str = "style";
pub const META_DESCRIPTION: &str = "description";
pub const META_KEYWORDS: &str = "keywords";
pub const META_UNIVERSAL_APPEAL: &str = "universalAppeal";

/// A node in the look catalog: category, folder or palette
#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "library.ts")]
#[ts(rename_all = "camelCase")]
pub struct LibraryNode {
    pub id: String,
    pub name: String,
    pub node_type: NodeType,
    pub parent_id: Option<String>,
    pub theme_colors: Vec<Rgb>,
    #[ts(type = "Record<string, unknown>")]
    pub metadata: BTreeMap<String, Value>,
    pub sort_order: i32,
}

impl LibraryNode {
    pub fn category(id: impl Into<String>, name: impl Into<String>, sort_order: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type: NodeType::Category,
            parent_id: None,
            theme_colors: Vec::new(),
            metadata: BTreeMap::new(),
            sort_order,
        }
    }

    pub fn folder(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: impl Into<String>,
        sort_order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type: NodeType::Folder,
            parent_id: Some(parent_id.into()),
            theme_colors: Vec::new(),
            metadata: BTreeMap::new(),
            sort_order,
        }
    }

    pub fn palette(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: impl Into<String>,
        theme_colors: Vec<Rgb>,
        sort_order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type: NodeType::Palette,
            parent_id: Some(parent_id.into()),
            theme_colors,
            metadata: BTreeMap::new(),
            sort_order,
        }
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn is_palette(&self) -> bool {
        self.node_type == NodeType::Palette
    }

    fn meta_u8(&self, key: &str) -> Option<u8> {
        self.metadata
            .get(key)
            .and_then(Value::as_u64)
            .map(|v| v.min(u64::from(u8::MAX)) as u8)
    }

    pub fn default_speed(&self) -> Option<u8> {
        self.meta_u8(META_DEFAULT_SPEED)
    }

    pub fn default_intensity(&self) -> Option<u8> {
        self.meta_u8(META_DEFAULT_INTENSITY)
    }

    pub fn brightness(&self) -> Option<u8> {
        self.meta_u8(META_BRIGHTNESS)
    }

    pub fn grouping(&self) -> Option<u8> {
        self.meta_u8(META_GROUPING)
    }

    pub fn spacing(&self) -> Option<u8> {
        self.meta_u8(META_SPACING)
    }

    pub fn dim_level(&self) -> Option<u8> {
        self.meta_u8(META_DIM_LEVEL).map(|v| v.min(100))
    }

    /// Effect ids suggested by the node, in the order given. Ids that are not
    /// valid integers are skipped.
    pub fn suggested_effects(&self) -> Option<Vec<EffectId>> {
        let list = self.metadata.get(META_SUGGESTED_EFFECTS)?.as_array()?;
        let ids: Vec<EffectId> = list
            .iter()
            .filter_map(Value::as_u64)
            .filter_map(|v| EffectId::try_from(v).ok())
            .collect();
        if ids.is_empty() {
            None
        } else {
            Some(ids)
        }
    }

    pub fn generator(&self) -> GeneratorKind {
        self.metadata
            .get(META_GENERATOR)
            .and_then(Value::as_str)
            .map(GeneratorKind::from)
            .unwrap_or(GeneratorKind::Template)
    }

    /// Style label used by the architectural generators, falling back to the
    /// node name.
    pub fn style(&self) -> &str {
        self.metadata
            .get(META_STYLE)
            .and_then(Value::as_str)
            .unwrap_or(self.name.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata.get(META_DESCRIPTION).and_then(Value::as_str)
    }

    pub fn keywords(&self) -> Vec<String> {
        self.metadata
            .get(META_KEYWORDS)
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_lowercase)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn universal_appeal(&self) -> Option<f64> {
        self.metadata
            .get(META_UNIVERSAL_APPEAL)
            .and_then(Value::as_f64)
            .map(|v| v.clamp(0.0, 1.0))
    }
}

/// A live event published by the events feed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiveEvent {
    pub id: String,
    pub name: String,
    pub colors: Vec<Rgb>,
    pub starts_on: chrono::NaiveDate,
    pub description: Option<String>,
}

/// A team the user follows
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FollowedTeam {
    pub team_id: String,
    pub name: String,
    pub league: String,
    pub colors: Vec<Rgb>,
}
