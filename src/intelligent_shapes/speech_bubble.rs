use super::*;

pub struct SpeechBubbleShape;
impl IntelligentShape for SpeechBubbleShape {
    fn get_metadata(&self) -> IntelligentShapeMetadata {
        IntelligentShapeMetadata {
            id: "bubble".to_string(),
            name: "Speech Bubble".to_string(),
            parameters: vec![
                ShapeParameter::new("Width", "width", 80.0, 400.0, 200.0, 1.0),
                ShapeParameter::new("Height", "height", 60.0, 300.0, 120.0, 1.0),
                ShapeParameter::new("Roundness", "cornerRadius", 0.0, 50.0, 16.0, 1.0),
                ShapeParameter::new("Tail Position", "tailPosition", 0.1, 0.9, 0.3, 0.01),
                ShapeParameter::new("Tail Size", "tailSize", 10.0, 80.0, 30.0, 1.0),
            ],
            icon: "M 21,15 A 8,8 0 1 0 5,15 L 3,21 L 9,19 A 8,8 0 0 0 21,15 Z".to_string(),
        }
    }

    fn generate_path(&self, params: &[f64]) -> BezPath {
        let w = params[0];
        let bh = params[1]; // bubble height, tail hangs below
        let r = params[2].min(w / 2.0).min(bh / 2.0);
        let tail = params[4].min(w - 2.0 * r);
        let half_tail = tail / 2.0;
        // Keep the tail base on the straight part of the bottom edge.
        let tail_x = (params[3] * w).clamp(r + half_tail, w - r - half_tail);

        let mut path = BezPath::new();
        path.move_to(pt(r, 0.0));
        path.line_to(pt(w - r, 0.0));
        path.quad_to(pt(w, 0.0), pt(w, r));
        path.line_to(pt(w, bh - r));
        path.quad_to(pt(w, bh), pt(w - r, bh));
        path.line_to(pt(tail_x + half_tail, bh));
        path.line_to(pt(tail_x, bh + tail));
        path.line_to(pt(tail_x - half_tail, bh));
        path.line_to(pt(r, bh));
        path.quad_to(pt(0.0, bh), pt(0.0, bh - r));
        path.line_to(pt(0.0, r));
        path.quad_to(pt(0.0, 0.0), pt(r, 0.0));
        path.close_path();
        path
    }
}
