use crate::error::{DesignError, Result};
use crate::types::{Rect, VectorShapeType};
use kurbo::{Affine, BezPath, PathEl, Point, Shape};
use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShapeParameter {
    pub name: String,
    pub key: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl ShapeParameter {
    fn new(name: &str, key: &str, min: f64, max: f64, default: f64, step: f64) -> Self {
        ShapeParameter { name: name.to_string(), key: key.to_string(), min, max, default, step }
    }

    /// Clamp into range; whole-step parameters (counts) are rounded first.
    pub fn resolve(&self, value: Option<f64>) -> f64 {
        let v = match value {
            Some(v) if v.is_finite() => v,
            _ => self.default,
        };
        let v = if self.step >= 1.0 { v.round() } else { v };
        v.clamp(self.min, self.max)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct IntelligentShapeMetadata {
    pub id: String,
    pub name: String,
    pub parameters: Vec<ShapeParameter>,
    pub icon: String,
}

/// Named generator inputs as persisted in a record's vector metadata.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct ShapeParams(pub BTreeMap<String, f64>);

impl ShapeParams {
    pub fn new() -> Self {
        ShapeParams(BTreeMap::new())
    }

    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Values in schema order, clamped and defaulted.
    pub fn resolve(&self, schema: &[ShapeParameter]) -> Vec<f64> {
        schema.iter().map(|p| p.resolve(self.get(&p.key))).collect()
    }

    /// The full, clamped parameter set for `schema`.
    pub fn normalized(&self, schema: &[ShapeParameter]) -> ShapeParams {
        ShapeParams(schema.iter().map(|p| (p.key.clone(), p.resolve(self.get(&p.key)))).collect())
    }
}

pub trait IntelligentShape {
    fn get_metadata(&self) -> IntelligentShapeMetadata;
    /// Outline in the shape's own box, origin at (0,0). `params` follows the
    /// metadata's parameter order and is already clamped.
    fn generate_path(&self, params: &[f64]) -> BezPath;
}

pub mod star;
pub mod heart;
pub mod arrow;
pub mod speech_bubble;
pub mod lightning;
pub mod polygon;

pub fn get_shape(shape_type: VectorShapeType) -> Box<dyn IntelligentShape> {
    match shape_type {
        VectorShapeType::Star => Box::new(star::StarShape),
        VectorShapeType::Heart => Box::new(heart::HeartShape),
        VectorShapeType::Arrow => Box::new(arrow::ArrowShape),
        VectorShapeType::Bubble => Box::new(speech_bubble::SpeechBubbleShape),
        VectorShapeType::Lightning => Box::new(lightning::LightningShape),
        VectorShapeType::Polygon => Box::new(polygon::PolygonShape),
    }
}

pub fn get_shape_by_id(id: &str) -> Result<Box<dyn IntelligentShape>> {
    VectorShapeType::parse(id)
        .map(get_shape)
        .ok_or_else(|| DesignError::UnknownShapeType(id.to_string()))
}

pub fn catalog() -> Vec<IntelligentShapeMetadata> {
    VectorShapeType::ALL.iter().map(|t| get_shape(*t).get_metadata()).collect()
}

pub fn generate_bez(shape_type: VectorShapeType, params: &ShapeParams) -> BezPath {
    let shape = get_shape(shape_type);
    let values = params.resolve(&shape.get_metadata().parameters);
    shape.generate_path(&values)
}

pub fn generate(shape_type: VectorShapeType, params: &ShapeParams) -> String {
    generate_bez(shape_type, params).to_svg()
}

/// Parses a stored path string; empty or unparsable input is invalid.
pub fn parse_path(data: &str) -> Result<BezPath> {
    if data.trim().is_empty() {
        return Err(DesignError::InvalidPath("empty path".to_string()));
    }
    let bez = BezPath::from_svg(data).map_err(|e| DesignError::InvalidPath(e.to_string()))?;
    if bez.elements().is_empty() {
        return Err(DesignError::InvalidPath("no path elements".to_string()));
    }
    Ok(bez)
}

pub fn path_bounds(data: &str) -> Result<Rect> {
    let bbox = parse_path(data)?.bounding_box();
    Ok(Rect::new(bbox.x0, bbox.y0, bbox.width(), bbox.height()))
}

/// Rescales an outline about its origin, as happens when a design moves
/// between canvas sizes. Coordinates are snapped to a millionth.
pub fn scale_path(data: &str, sx: f64, sy: f64) -> Result<String> {
    fn fine(p: Point) -> Point {
        Point::new((p.x * 1e6).round() / 1e6 + 0.0, (p.y * 1e6).round() / 1e6 + 0.0)
    }

    let mut bez = parse_path(data)?;
    bez.apply_affine(Affine::scale_non_uniform(sx, sy));
    let snapped: BezPath = bez
        .elements()
        .iter()
        .map(|el| match *el {
            PathEl::MoveTo(p) => PathEl::MoveTo(fine(p)),
            PathEl::LineTo(p) => PathEl::LineTo(fine(p)),
            PathEl::QuadTo(a, p) => PathEl::QuadTo(fine(a), fine(p)),
            PathEl::CurveTo(a, b, p) => PathEl::CurveTo(fine(a), fine(b), fine(p)),
            PathEl::ClosePath => PathEl::ClosePath,
        })
        .collect();
    Ok(snapped.to_svg())
}

/// Snaps generated coordinates to a thousandth so path strings stay short.
pub(crate) fn pt(x: f64, y: f64) -> Point {
    fn snap(v: f64) -> f64 {
        (v * 1000.0).round() / 1000.0 + 0.0
    }
    Point::new(snap(x), snap(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn every_shape_is_closed() {
        for t in VectorShapeType::ALL {
            let path = generate(t, &ShapeParams::new());
            assert!(path.starts_with('M'), "{} path: {}", t.as_str(), path);
            assert!(path.trim_end().ends_with('Z'), "{} path: {}", t.as_str(), path);
            assert!(parse_path(&path).is_ok());
        }
    }

    #[test]
    fn catalog_lists_each_generator_once() {
        let ids: Vec<String> = catalog().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["star", "heart", "arrow", "bubble", "lightning", "polygon"]);
    }

    #[test]
    fn star_schema_matches_tool_panel_ranges() {
        let meta = get_shape(VectorShapeType::Star).get_metadata();
        let points = &meta.parameters[0];
        assert_eq!((points.key.as_str(), points.min, points.max, points.default), ("pointCount", 3.0, 20.0, 5.0));
        let inner = &meta.parameters[1];
        assert_eq!((inner.key.as_str(), inner.min, inner.max), ("innerRadiusRatio", 0.1, 0.9));
        let outer = &meta.parameters[2];
        assert_eq!((outer.key.as_str(), outer.min, outer.max, outer.default), ("outerRadius", 50.0, 200.0, 100.0));
    }

    #[test]
    fn out_of_range_params_are_clamped() {
        let schema = get_shape(VectorShapeType::Star).get_metadata().parameters;
        let params = ShapeParams::new().with("pointCount", 99.0).with("innerRadiusRatio", -1.0);
        assert_eq!(params.resolve(&schema), vec![20.0, 0.1, 100.0]);
    }

    #[test]
    fn counts_are_rounded_to_whole_steps() {
        let schema = get_shape(VectorShapeType::Polygon).get_metadata().parameters;
        let params = ShapeParams::new().with("sideCount", 4.6);
        assert_eq!(params.resolve(&schema)[0], 5.0);
    }

    #[test]
    fn polygon_radius_is_clamped() {
        let huge = generate(VectorShapeType::Polygon, &ShapeParams::new().with("radius", 10_000.0));
        let max = generate(VectorShapeType::Polygon, &ShapeParams::new().with("radius", 500.0));
        assert_eq!(huge, max);
        let tiny = path_bounds(&generate(VectorShapeType::Polygon, &ShapeParams::new().with("radius", 0.0))).unwrap();
        assert!(tiny.width >= 10.0);
    }

    #[test]
    fn unknown_shape_id_is_rejected() {
        assert!(matches!(get_shape_by_id("blob"), Err(DesignError::UnknownShapeType(_))));
        assert!(get_shape_by_id("heart").is_ok());
    }

    #[test]
    fn invalid_path_strings_are_rejected() {
        assert!(parse_path("").is_err());
        assert!(parse_path("   ").is_err());
        assert!(parse_path("M 10 banana").is_err());
        assert!(parse_path("M0 0 L10 0 L10 10 Z").is_ok());
    }

    #[test]
    fn scaled_path_bounds_follow_the_factors() {
        let star = generate(VectorShapeType::Star, &ShapeParams::new());
        let before = path_bounds(&star).unwrap();
        let after = path_bounds(&scale_path(&star, 0.5, 0.25).unwrap()).unwrap();
        assert!((after.width - before.width * 0.5).abs() < 1e-5);
        assert!((after.height - before.height * 0.25).abs() < 1e-5);

        let half = scale_path(&star, 0.5, 0.5).unwrap();
        assert_eq!(scale_path(&half, 2.0, 2.0).unwrap(), star);
        assert!(scale_path("not a path", 2.0, 2.0).is_err());
    }

    #[test]
    fn normalized_params_fill_every_key() {
        let schema = get_shape(VectorShapeType::Arrow).get_metadata().parameters;
        let full = ShapeParams::new().with("length", 120.0).normalized(&schema);
        assert_eq!(full.get("length"), Some(120.0));
        assert_eq!(full.get("shaftWidth"), Some(30.0));
        assert_eq!(full.get("headSizeRatio"), Some(0.3));
    }

    fn shape_type() -> impl Strategy<Value = VectorShapeType> {
        prop::sample::select(VectorShapeType::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn generation_is_deterministic(t in shape_type(), a in 0.0f64..600.0, b in 0.0f64..1.0, c in 0.0f64..30.0) {
            let params = ShapeParams::new()
                .with("pointCount", c).with("innerRadiusRatio", b).with("outerRadius", a)
                .with("size", a).with("curve", b)
                .with("length", a).with("headSizeRatio", b)
                .with("tailPosition", b).with("cornerRadius", c)
                .with("segmentCount", c).with("sideCount", c).with("radius", a);
            let first = generate(t, &params);
            let second = generate(t, &params.clone());
            prop_assert_eq!(&first, &second);
            prop_assert!(first.trim_end().ends_with('Z'));
        }
    }
}
