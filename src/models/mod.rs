pub mod effects;
pub mod library;
pub mod patterns;
pub mod query;

pub use effects::{
    EffectId, EffectMetadata, EnergyLevel, Mood, MoodCategory, MotionType, Vibe,
    CUSTOM_EFFECT_BASE,
};
pub use library::{FollowedTeam, GeneratorKind, LibraryNode, LiveEvent, NodeType, Rgb};
pub use patterns::{DevicePayload, PatternItem, Segment, PALETTE_COLORS_ONLY};
pub use query::QueryAnalysis;
