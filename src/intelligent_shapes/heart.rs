use super::*;

pub struct HeartShape;
impl IntelligentShape for HeartShape {
    fn get_metadata(&self) -> IntelligentShapeMetadata {
        IntelligentShapeMetadata {
            id: "heart".to_string(),
            name: "Heart".to_string(),
            parameters: vec![
                ShapeParameter::new("Size", "size", 50.0, 300.0, 100.0, 1.0),
                ShapeParameter::new("Curve", "curve", 0.1, 1.0, 0.5, 0.01),
            ],
            icon: "M 12,21 C 5,15 2,11 2,7 A 5,5 0 0 1 12,6 A 5,5 0 0 1 22,7 C 22,11 19,15 12,21 Z".to_string(),
        }
    }

    fn generate_path(&self, params: &[f64]) -> BezPath {
        let s = params[0];
        let c = params[1];

        // Unit template. `curve` skews the handles of both halves together:
        // higher values drop the notch, raise and round the lobes, and pull
        // the belly in. The outline stays mirrored about x = 0.5.
        let notch = 0.2 + 0.15 * c;
        let lobe_top = 0.1 * (1.5 - c);
        let side = 0.35 + 0.1 * c;
        let belly = 0.5 - 0.35 * c;

        let p = |x: f64, y: f64| pt(x * s, y * s);

        let mut path = BezPath::new();
        path.move_to(p(0.5, notch));
        path.curve_to(p(0.5, notch - 0.05), p(0.42, lobe_top), p(0.25, lobe_top));
        path.curve_to(p(0.0, lobe_top), p(0.0, side), p(0.0, side));
        path.curve_to(p(0.0, side + 0.25), p(belly, 0.8), p(0.5, 1.0));
        path.curve_to(p(1.0 - belly, 0.8), p(1.0, side + 0.25), p(1.0, side));
        path.curve_to(p(1.0, side), p(1.0, lobe_top), p(0.75, lobe_top));
        path.curve_to(p(0.58, lobe_top), p(0.5, notch - 0.05), p(0.5, notch));
        path.close_path();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_is_mirror_symmetric() {
        let bbox = HeartShape.generate_path(&[100.0, 0.5]).bounding_box();
        assert!((bbox.x0 + bbox.x1 - 100.0).abs() < 1e-6);
        assert!((bbox.y1 - 100.0).abs() < 1e-6);
    }

    #[test]
    fn curve_reshapes_without_breaking_symmetry() {
        let flat = HeartShape.generate_path(&[100.0, 0.1]);
        let deep = HeartShape.generate_path(&[100.0, 1.0]);
        assert_ne!(flat.to_svg(), deep.to_svg());

        let bbox = deep.bounding_box();
        assert!((bbox.x0 + bbox.x1 - 100.0).abs() < 1e-6);

        let notch = |p: &BezPath| match p.elements()[0] {
            kurbo::PathEl::MoveTo(m) => m.y,
            _ => f64::NAN,
        };
        assert!(notch(&deep) > notch(&flat));
    }

    #[test]
    fn size_scales_template() {
        let small = HeartShape.generate_path(&[100.0, 0.5]).bounding_box();
        let large = HeartShape.generate_path(&[200.0, 0.5]).bounding_box();
        assert!((large.width() - 2.0 * small.width()).abs() < 1e-6);
    }
}
