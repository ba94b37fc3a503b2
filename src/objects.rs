use serde::{Serialize, Deserialize};
use crate::error::{DesignError, Result};
use crate::intelligent_shapes::ShapeParams;
use crate::types::{BasicShape, ElementKind, Rect, VectorShapeType};

/// Names the canvas chrome gives to the objects it owns.
pub const CHROME_NAMES: [&str; 4] = ["background", "productImage", "areaMarker", "areaOutline"];

/// A canvas object as the editor's drawing library describes it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiveObject {
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub angle: f64, // degrees
    #[serde(default = "one")]
    pub scale_x: f64,
    #[serde(default = "one")]
    pub scale_y: f64,
    #[serde(default = "one")]
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dash_array: Option<Vec<f64>>,
    // Text specific
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
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
    // Image specific
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    // Path specific
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_shape_type: Option<VectorShapeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_params: Option<ShapeParams>,
    // Zone tag and chrome marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub chrome: bool,
}

fn one() -> f64 {
    1.0
}

impl LiveObject {
    pub fn new(object_type: &str, left: f64, top: f64, width: f64, height: f64) -> Self {
        LiveObject {
            object_type: object_type.to_string(),
            id: None,
            name: None,
            left,
            top,
            width,
            height,
            angle: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
            fill: None,
            stroke: None,
            stroke_width: None,
            stroke_dash_array: None,
            text: None,
            font_family: None,
            font_size: None,
            font_weight: None,
            font_style: None,
            text_align: None,
            src: None,
            path: None,
            vector_shape_type: None,
            vector_params: None,
            area_id: None,
            chrome: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    pub fn set_bounds(&mut self, rect: &Rect) {
        self.left = rect.x;
        self.top = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }

    /// Background artwork and zone outlines belong to the canvas chrome.
    pub fn is_chrome(&self) -> bool {
        self.chrome || self.name.as_deref().is_some_and(|n| CHROME_NAMES.contains(&n))
    }

    pub fn is_generated(&self) -> bool {
        self.vector_shape_type.is_some()
    }

    pub fn kind(&self) -> Result<ElementKind> {
        match self.object_type.as_str() {
            "text" | "i-text" | "textbox" => Ok(ElementKind::Text),
            "image" => Ok(ElementKind::Image),
            "path" => Ok(ElementKind::Path),
            t if BasicShape::from_object_type(t).is_some() => Ok(ElementKind::Shape),
            t => Err(DesignError::UnsupportedElementKind(t.to_string())),
        }
    }
}

/// Load state of an image descriptor's source.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ImageState {
    Pending { ticket: u64 },
    #[serde(rename_all = "camelCase")]
    Ready { natural_width: u32, natural_height: u32 },
    Placeholder { reason: String },
}

/// What the codec hands to the canvas chrome to materialize.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiveObjectDescriptor {
    #[serde(flatten)]
    pub object: LiveObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_state: Option<ImageState>,
}

impl LiveObjectDescriptor {
    pub fn new(object: LiveObject) -> Self {
        LiveObjectDescriptor { object, image_state: None }
    }

    /// Grey dashed box standing in for an image that could not be loaded.
    /// The object stays an image with its source so captures keep the
    /// reference; only the descriptor's state marks it as a stand-in.
    pub fn placeholder(&self, reason: &str) -> Self {
        let mut object = self.object.clone();
        object.fill = Some("#cccccc".to_string());
        object.stroke = Some("#999999".to_string());
        object.stroke_width = Some(1.0);
        object.stroke_dash_array = Some(vec![4.0, 4.0]);
        LiveObjectDescriptor {
            object,
            image_state: Some(ImageState::Placeholder { reason: reason.to_string() }),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.image_state, Some(ImageState::Placeholder { .. }))
    }
}
