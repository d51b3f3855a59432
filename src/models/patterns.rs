use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::effects::EffectId;
use super::library::Rgb;

/// Device palette id that renders only the supplied segment colors, without
/// blending in the effect's default rainbow palette.
pub const PALETTE_COLORS_ONLY: u8 = 5;

/// Most colors a segment accepts
pub const MAX_SEGMENT_COLORS: usize = 3;

/// One segment of the device state
#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[ts(export, export_to = "patterns.ts")]
pub struct Segment {
    pub fx: EffectId,
    pub sx: u8,
    pub ix: u8,
    pub pal: u8,
    pub col: Vec<[u8; 4]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub grp: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub spc: Option<u8>,
}

impl Segment {
    /// Segment for `effect` using at most three of `colors`, white channel
    /// forced to zero.
    pub fn new(effect: EffectId, colors: &[Rgb], speed: u8, intensity: u8) -> Self {
        Self {
            fx: effect,
            sx: speed,
            ix: intensity,
            pal: PALETTE_COLORS_ONLY,
            col: colors
                .iter()
                .take(MAX_SEGMENT_COLORS)
                .map(|c| c.to_device_quad())
                .collect(),
            grp: None,
            spc: None,
        }
    }

    pub fn with_grouping(mut self, grouping: Option<u8>, spacing: Option<u8>) -> Self {
        self.grp = grouping;
        self.spc = spacing;
        self
    }
}

/// State document handed to the device transport
#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[ts(export, export_to = "patterns.ts")]
pub struct DevicePayload {
    pub on: bool,
    pub bri: u8,
    pub seg: Vec<Segment>,
}

impl DevicePayload {
    pub fn single(brightness: u8, segment: Segment) -> Self {
        Self {
            on: true,
            bri: brightness,
            seg: vec![segment],
        }
    }

    /// Effect of the first segment
    pub fn effect_id(&self) -> Option<EffectId> {
        self.seg.first().map(|s| s.fx)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// A concrete, named device configuration
#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "patterns.ts")]
#[ts(rename_all = "camelCase")]
pub struct PatternItem {
    pub id: String,
    pub name: String,
    /// Root category the source palette lives under
    pub category_id: String,
    pub device_payload: DevicePayload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn segment_truncates_to_three_colors_and_zeroes_white() {
        let colors = vec![
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 255),
        ];
        let seg = Segment::new(2, &colors, 100, 120);
        assert_eq!(seg.col.len(), 3);
        assert!(seg.col.iter().all(|c| c[3] == 0));
        assert_eq!(seg.pal, PALETTE_COLORS_ONLY);
    }

    #[test]
    fn payload_omits_unset_grouping() {
        let payload = DevicePayload::single(255, Segment::new(0, &[Rgb::new(1, 2, 3)], 128, 128));
        assert_eq!(
            payload.to_json(),
            json!({
                "on": true,
                "bri": 255,
                "seg": [{ "fx": 0, "sx": 128, "ix": 128, "pal": 5, "col": [[1, 2, 3, 0]] }]
            })
        );
    }

    #[test]
    fn payload_includes_grouping_when_set() {
        let seg = Segment::new(0, &[], 128, 128).with_grouping(Some(2), Some(3));
        let value = DevicePayload::single(200, seg).to_json();
        assert_eq!(value["seg"][0]["grp"], json!(2));
        assert_eq!(value["seg"][0]["spc"], json!(3));
    }
}
