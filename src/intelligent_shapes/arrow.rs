use super::*;

pub struct ArrowShape;
impl IntelligentShape for ArrowShape {
    fn get_metadata(&self) -> IntelligentShapeMetadata {
        IntelligentShapeMetadata {
            id: "arrow".to_string(),
            name: "Arrow".to_string(),
            parameters: vec![
                ShapeParameter::new("Length", "length", 50.0, 400.0, 200.0, 1.0),
                ShapeParameter::new("Shaft Width", "shaftWidth", 10.0, 100.0, 30.0, 1.0),
                ShapeParameter::new("Head Size", "headSizeRatio", 0.1, 0.6, 0.3, 0.01),
            ],
            icon: "M 2,12 H 14 V 6 L 22,12 L 14,18 V 12 Z".to_string(),
        }
    }

    fn generate_path(&self, params: &[f64]) -> BezPath {
        let length = params[0];
        let shaft = params[1];
        let head_l = params[2] * length;
        // The head always overhangs the shaft.
        let head_w = head_l.max(shaft * 1.5);

        let mid = head_w / 2.0;
        let shaft_y1 = mid - shaft / 2.0;
        let shaft_y2 = mid + shaft / 2.0;
        let shaft_end_x = length - head_l;

        let mut path = BezPath::new();
        path.move_to(pt(0.0, shaft_y1));
        path.line_to(pt(shaft_end_x, shaft_y1));
        path.line_to(pt(shaft_end_x, 0.0));
        path.line_to(pt(length, mid));
        path.line_to(pt(shaft_end_x, head_w));
        path.line_to(pt(shaft_end_x, shaft_y2));
        path.line_to(pt(0.0, shaft_y2));
        path.close_path();
        path
    }
}
