use super::*;
use std::f64::consts::PI;

pub struct PolygonShape;
impl IntelligentShape for PolygonShape {
    fn get_metadata(&self) -> IntelligentShapeMetadata {
        IntelligentShapeMetadata {
            id: "polygon".to_string(),
            name: "Polygon".to_string(),
            parameters: vec![
                ShapeParameter::new("Sides", "sideCount", 3.0, 12.0, 6.0, 1.0),
                ShapeParameter::new("Radius", "radius", 10.0, 500.0, 100.0, 1.0),
            ],
            icon: "M 12,2 L 21,7 V 17 L 12,22 L 3,17 V 7 Z".to_string(),
        }
    }

    fn generate_path(&self, params: &[f64]) -> BezPath {
        let sides = params[0] as u32;
        let r = params[1];
        let cx = r;
        let cy = r;

        let mut path = BezPath::new();
        for i in 0..sides {
            let angle = (i as f64 * 2.0 * PI / sides as f64) - (PI / 2.0);
            let p = pt(cx + r * angle.cos(), cy + r * angle.sin());
            if i == 0 { path.move_to(p); } else { path.line_to(p); }
        }
        path.close_path();
        path
    }
}
