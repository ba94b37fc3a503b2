use super::*;

pub struct LightningShape;
impl IntelligentShape for LightningShape {
    fn get_metadata(&self) -> IntelligentShapeMetadata {
        IntelligentShapeMetadata {
            id: "lightning".to_string(),
            name: "Lightning".to_string(),
            parameters: vec![
                ShapeParameter::new("Width", "width", 30.0, 200.0, 80.0, 1.0),
                ShapeParameter::new("Height", "height", 80.0, 400.0, 200.0, 1.0),
                ShapeParameter::new("Segments", "segmentCount", 2.0, 8.0, 3.0, 1.0),
            ],
            icon: "M 13,2 L 4,14 H 11 L 10,22 L 20,9 H 13 Z".to_string(),
        }
    }

    fn generate_path(&self, params: &[f64]) -> BezPath {
        let w = params[0];
        let h = params[1];
        let segments = params[2] as usize;

        let cx = w / 2.0;
        let step = h / segments as f64;
        // Right-hand zig-zag; the left side mirrors it across x = cx.
        let right: Vec<(f64, f64)> = (0..segments)
            .map(|i| {
                let reach = if i % 2 == 0 { 1.0 } else { 0.4 };
                (cx * reach, (i as f64 + 0.5) * step)
            })
            .collect();

        let mut path = BezPath::new();
        path.move_to(pt(cx, 0.0));
        for (dx, y) in &right {
            path.line_to(pt(cx + dx, *y));
        }
        path.line_to(pt(cx, h));
        for (dx, y) in right.iter().rev() {
            path.line_to(pt(cx - dx, *y));
        }
        path.close_path();
        path
    }
}
