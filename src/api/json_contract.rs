use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{SlopeChart, SlopeGeometry, SlopeLayout};

pub const SLOPE_LAYOUT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of a computed layout, slopes in draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeLayoutSnapshot {
    pub focus_key: Option<String>,
    pub is_portrait: bool,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub axis_width: f64,
    pub max_label_width: f64,
    pub slopes: Vec<SlopeGeometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeLayoutSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SlopeLayoutSnapshot,
}

impl SlopeLayoutSnapshot {
    #[must_use]
    pub fn from_layout(layout: &SlopeLayout) -> Self {
        Self {
            focus_key: layout.focused().map(|slope| slope.key.clone()),
            is_portrait: layout.is_portrait,
            x_domain: layout.x_domain,
            y_domain: layout.y_scale.domain(),
            axis_width: layout.axis_width,
            max_label_width: layout.max_label_width,
            slopes: layout.slopes.clone(),
        }
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = SlopeLayoutSnapshotJsonContractV1 {
            schema_version: SLOPE_LAYOUT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize layout snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SlopeLayoutSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SlopeLayoutSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse layout snapshot json payload: {e}"))
            })?;
        if payload.schema_version != SLOPE_LAYOUT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported layout snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> SlopeChart<R> {
    /// Versioned JSON snapshot of the current layout, `None` without data.
    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<Option<String>> {
        self.snapshot()?
            .map(|snapshot| snapshot.to_json_contract_v1_pretty())
            .transpose()
    }
}
