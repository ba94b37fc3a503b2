use serde::{Serialize, Deserialize};

/// Pixel dimensions of a drawing surface.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64) -> Self {
        Frame { width, height }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }
}

/// Logical canvas every persisted element is expressed against.
pub const STANDARD_FRAME: Frame = Frame::new(800.0, 600.0);

impl Default for Frame {
    fn default() -> Self {
        STANDARD_FRAME
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// Rounds to `decimals` places.
    pub fn rounded_to(&self, decimals: i32) -> Self {
        let k = 10f64.powi(decimals);
        let r = |v: f64| (v * k).round() / k + 0.0;
        Rect { x: r(self.x), y: r(self.y), width: r(self.width), height: r(self.height) }
    }

    pub fn rounded(&self) -> Self {
        Rect {
            x: self.x.round(),
            y: self.y.round(),
            width: self.width.round(),
            height: self.height.round(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOptions {
    pub preserve_aspect: bool,
    pub center_offset: bool,
    pub round: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions { preserve_aspect: true, center_offset: true, round: true }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Shape,
    Path,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Shape => "shape",
            ElementKind::Path => "path",
        }
    }
}

/// Canvas primitives persisted with `kind = shape`.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum BasicShape {
    Rect,
    Circle,
    Ellipse,
    Triangle,
    Line,
    Polygon,
}

impl BasicShape {
    pub fn from_object_type(object_type: &str) -> Option<Self> {
        match object_type {
            "rect" => Some(BasicShape::Rect),
            "circle" => Some(BasicShape::Circle),
            "ellipse" => Some(BasicShape::Ellipse),
            "triangle" => Some(BasicShape::Triangle),
            "line" => Some(BasicShape::Line),
            "polygon" => Some(BasicShape::Polygon),
            _ => None,
        }
    }

    pub fn object_type(&self) -> &'static str {
        match self {
            BasicShape::Rect => "rect",
            BasicShape::Circle => "circle",
            BasicShape::Ellipse => "ellipse",
            BasicShape::Triangle => "triangle",
            BasicShape::Line => "line",
            BasicShape::Polygon => "polygon",
        }
    }
}

/// Generator-produced vector shapes.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum VectorShapeType {
    Star,
    Heart,
    Arrow,
    Bubble,
    Lightning,
    Polygon,
}

impl VectorShapeType {
    pub const ALL: [VectorShapeType; 6] = [
        VectorShapeType::Star,
        VectorShapeType::Heart,
        VectorShapeType::Arrow,
        VectorShapeType::Bubble,
        VectorShapeType::Lightning,
        VectorShapeType::Polygon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VectorShapeType::Star => "star",
            VectorShapeType::Heart => "heart",
            VectorShapeType::Arrow => "arrow",
            VectorShapeType::Bubble => "bubble",
            VectorShapeType::Lightning => "lightning",
            VectorShapeType::Polygon => "polygon",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == id)
    }
}
