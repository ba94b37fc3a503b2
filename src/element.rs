//! Persisted design records. Geometry is always in standard-frame units.

use serde::{Serialize, Deserialize};
use crate::error::{DesignError, Result};
use crate::intelligent_shapes::ShapeParams;
use crate::types::{BasicShape, ElementKind, Rect, VectorShapeType};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation_degrees: f64,
    #[serde(default = "one")]
    pub scale_x: f64,
    #[serde(default = "one")]
    pub scale_y: f64,
    #[serde(default = "one")]
    pub opacity: f64,
}

fn one() -> f64 {
    1.0
}

impl Geometry {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<BasicShape>,
    /// Outline of a path that did not come from a generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_data: Option<String>,
}

/// Keeps generated shapes re-editable after a reload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VectorMeta {
    pub shape_type: VectorShapeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_data: Option<String>,
    #[serde(default)]
    pub params: ShapeParams,
}

/// Diagnostics only.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub synthetic_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesignElement {
    pub kind: ElementKind,
    #[serde(default)]
    pub area_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub style: ElementStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_meta: Option<VectorMeta>,
    #[serde(default)]
    pub provenance: Provenance,
}

/// Product artwork reference; carried along, never converted.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CanvasState {
    pub elements: Vec<DesignElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesignDocument {
    pub design_id: String,
    pub elements: Vec<DesignElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
}

impl DesignDocument {
    pub fn from_state(design_id: &str, state: CanvasState) -> Self {
        DesignDocument { design_id: design_id.to_string(), elements: state.elements, background: state.background }
    }
}

/// Parses a record list one element at a time so a single bad record does
/// not reject the whole design.
pub fn decode_records(json: &str) -> Result<Vec<Result<DesignElement>>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    Ok(values.into_iter().map(decode_record).collect())
}

/// A stored design whose records were decoded individually.
#[derive(Debug, Default)]
pub struct DecodedDesign {
    pub design_id: Option<String>,
    pub background: Option<Background>,
    pub records: Vec<Result<DesignElement>>,
}

/// Accepts either a full [`DesignDocument`] or a bare record list.
pub fn decode_design(json: &str) -> Result<DecodedDesign> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let (design_id, background, list) = match value {
        serde_json::Value::Array(list) => (None, None, list),
        serde_json::Value::Object(mut doc) => {
            let design_id = doc.get("designId").and_then(|v| v.as_str()).map(str::to_string);
            let background = match doc.remove("background") {
                Some(bg) if !bg.is_null() => Some(serde_json::from_value(bg)?),
                _ => None,
            };
            let list = match doc.remove("elements") {
                Some(serde_json::Value::Array(list)) => list,
                _ => return Err(DesignError::MalformedRecord("design has no element list".to_string())),
            };
            (design_id, background, list)
        }
        _ => return Err(DesignError::MalformedRecord("expected a design or a record list".to_string())),
    };
    Ok(DecodedDesign { design_id, background, records: list.into_iter().map(decode_record).collect() })
}

pub fn decode_record(value: serde_json::Value) -> Result<DesignElement> {
    if let Some(kind) = value.get("kind").and_then(|k| k.as_str()) {
        if !matches!(kind, "text" | "image" | "shape" | "path") {
            return Err(DesignError::UnsupportedElementKind(kind.to_string()));
        }
    }
    Ok(serde_json::from_value(value)?)
}
