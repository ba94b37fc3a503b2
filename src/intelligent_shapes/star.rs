use super::*;
use std::f64::consts::PI;

pub struct StarShape;
impl IntelligentShape for StarShape {
    fn get_metadata(&self) -> IntelligentShapeMetadata {
        IntelligentShapeMetadata {
            id: "star".to_string(),
            name: "Star".to_string(),
            parameters: vec![
                ShapeParameter::new("Points", "pointCount", 3.0, 20.0, 5.0, 1.0),
                ShapeParameter::new("Inner Radius", "innerRadiusRatio", 0.1, 0.9, 0.5, 0.01),
                ShapeParameter::new("Outer Radius", "outerRadius", 50.0, 200.0, 100.0, 1.0),
            ],
            icon: "M 12,2 L 15,9 H 22 L 16,14 L 18,21 L 12,17 L 6,21 L 8,14 L 2,9 H 9 Z".to_string(),
        }
    }

    fn generate_path(&self, params: &[f64]) -> BezPath {
        let points = params[0] as u32;
        let r_outer = params[2];
        let r_inner = r_outer * params[1];

        // Centered in a square box so the outline fits [0, 2R].
        let cx = r_outer;
        let cy = r_outer;

        let mut path = BezPath::new();
        for i in 0..(points * 2) {
            let angle = (i as f64 * PI / points as f64) - (PI / 2.0);
            let r = if i % 2 == 0 { r_outer } else { r_inner };
            let p = pt(cx + r * angle.cos(), cy + r * angle.sin());
            if i == 0 { path.move_to(p); } else { path.line_to(p); }
        }
        path.close_path();
        path
    }
}
