//! Conversion between live canvas objects and persisted design records.
//!
//! The codec is stateless. Geometry always goes through the standard-frame
//! mapping for the given live frame, and both directions use the same
//! registration options so a capture followed by a load lands where it
//! started.

use serde::Serialize;
use tracing::{debug, warn};
use crate::coords::{standard_mapping, FrameMapping};
use crate::element::{DesignElement, ElementStyle, Geometry, Provenance, VectorMeta};
use crate::error::{DesignError, Result};
use crate::image_source::{self, ImageRequest};
use crate::intelligent_shapes::{self, get_shape, parse_path, scale_path};
use crate::objects::{ImageState, LiveObject, LiveObjectDescriptor};
use crate::types::{BasicShape, ConvertOptions, ElementKind, Frame};

/// An element that could not be converted, reported instead of dropped.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkippedElement {
    pub index: usize,
    pub code: &'static str,
    pub reason: String,
    #[serde(skip)]
    pub error: DesignError,
}

impl SkippedElement {
    pub fn new(index: usize, error: DesignError) -> Self {
        SkippedElement { index, code: error.code(), reason: error.to_string(), error }
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Captured {
    pub elements: Vec<DesignElement>,
    pub skipped: Vec<SkippedElement>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Materialized {
    pub descriptors: Vec<LiveObjectDescriptor>,
    pub pending_images: Vec<ImageRequest>,
    pub skipped: Vec<SkippedElement>,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn scale_font(size: Option<f64>, mapping: &FrameMapping) -> Option<f64> {
    size.map(|s| round2(s * mapping.uniform_scale()))
}

/// Carries an outline through a frame mapping. Unparsable outlines are kept
/// verbatim so loading can report or regenerate them.
fn map_outline(data: &str, mapping: &FrameMapping) -> String {
    if mapping.scale_x == 1.0 && mapping.scale_y == 1.0 {
        return data.to_string();
    }
    scale_path(data, mapping.scale_x, mapping.scale_y).unwrap_or_else(|_| data.to_string())
}

pub fn to_record(obj: &LiveObject, area_id: Option<&str>, live: Frame, opts: &ConvertOptions) -> Result<DesignElement> {
    let kind = obj.kind()?;
    let mapping = standard_mapping(live, opts)?.inverse();
    let rect = mapping.apply_to_standard(&obj.bounds(), opts.round);

    let geometry = Geometry {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        rotation_degrees: obj.angle,
        scale_x: obj.scale_x,
        scale_y: obj.scale_y,
        opacity: obj.opacity,
    };

    let mut style = ElementStyle::default();
    let mut vector_meta = None;
    let mut tags = vec![format!("source:{}", obj.object_type)];

    match kind {
        ElementKind::Text => {
            style.text = obj.text.clone();
            style.font_family = obj.font_family.clone();
            style.font_size = scale_font(obj.font_size, &mapping);
            style.font_weight = obj.font_weight.clone();
            style.font_style = obj.font_style.clone();
            style.text_align = obj.text_align.clone();
            style.fill = obj.fill.clone();
            style.stroke = obj.stroke.clone();
            style.stroke_width = obj.stroke_width;
        }
        ElementKind::Image => {
            // Reference only, pixel data stays with the asset store.
            style.src = obj.src.clone();
        }
        ElementKind::Shape | ElementKind::Path => {
            style.fill = obj.fill.clone();
            style.stroke = obj.stroke.clone();
            style.stroke_width = obj.stroke_width;
            style.shape = BasicShape::from_object_type(&obj.object_type);
            let path_data = obj.path.as_deref().map(|p| map_outline(p, &mapping));
            match obj.vector_shape_type {
                Some(shape_type) => {
                    let schema = get_shape(shape_type).get_metadata().parameters;
                    let params = obj.vector_params.clone().unwrap_or_default().normalized(&schema);
                    vector_meta = Some(VectorMeta { shape_type, path_data, params });
                    tags.push(format!("generator:{}", shape_type.as_str()));
                }
                None => style.path_data = path_data,
            }
        }
    }

    let synthetic_id = obj
        .id
        .clone()
        .unwrap_or_else(|| format!("{}@{},{}", kind.as_str(), geometry.x, geometry.y));

    Ok(DesignElement {
        kind,
        area_id: area_id.map(str::to_string).or_else(|| obj.area_id.clone()),
        geometry: Some(geometry),
        style,
        vector_meta,
        provenance: Provenance { tags, synthetic_id },
    })
}

/// Serializes every design object in z-order, skipping chrome.
pub fn to_records(objects: &[LiveObject], live: Frame, opts: &ConvertOptions) -> Captured {
    let mut captured = Captured::default();
    for (index, obj) in objects.iter().enumerate() {
        if obj.is_chrome() {
            continue;
        }
        match to_record(obj, None, live, opts) {
            Ok(el) => captured.elements.push(el),
            Err(e) => {
                warn!("skipping object {} ({}): {}", index, obj.object_type, e);
                captured.skipped.push(SkippedElement::new(index, e));
            }
        }
    }
    captured
}

/// Outline for a path record: a stored string if it parses, otherwise the
/// generator is re-run from the stored parameters.
pub fn resolve_path(record: &DesignElement) -> Result<String> {
    let meta = record.vector_meta.as_ref();
    let stored = meta
        .and_then(|m| m.path_data.as_deref())
        .into_iter()
        .chain(record.style.path_data.as_deref());

    let mut last_err = None;
    for data in stored {
        match parse_path(data) {
            Ok(_) => return Ok(data.to_string()),
            Err(e) => last_err = Some(e),
        }
    }

    match meta {
        Some(m) => {
            debug!("regenerating {} outline for {}", m.shape_type.as_str(), record.provenance.synthetic_id);
            Ok(intelligent_shapes::generate(m.shape_type, &m.params))
        }
        None => Err(last_err.unwrap_or_else(|| DesignError::InvalidPath("no path data".to_string()))),
    }
}

/// Builds the descriptor for one record. Image sources are left for the
/// batch to resolve.
pub fn to_live_object(record: &DesignElement, live: Frame, opts: &ConvertOptions) -> Result<LiveObjectDescriptor> {
    let geometry = record.geometry.as_ref().ok_or(DesignError::MissingGeometry)?;
    let mapping = standard_mapping(live, opts)?;
    let rect = mapping.apply(&geometry.rect(), opts.round);
    let style = &record.style;

    let object_type = match record.kind {
        ElementKind::Text => "textbox",
        ElementKind::Image => "image",
        ElementKind::Shape => style.shape.unwrap_or(BasicShape::Rect).object_type(),
        ElementKind::Path => "path",
    };

    let mut obj = LiveObject::new(object_type, rect.x, rect.y, rect.width, rect.height);
    obj.angle = geometry.rotation_degrees;
    obj.scale_x = geometry.scale_x;
    obj.scale_y = geometry.scale_y;
    obj.opacity = geometry.opacity;
    obj.area_id = record.area_id.clone();
    if !record.provenance.synthetic_id.is_empty() {
        obj.id = Some(record.provenance.synthetic_id.clone());
    }

    match record.kind {
        ElementKind::Text => {
            obj.text = style.text.clone();
            obj.font_family = style.font_family.clone();
            obj.font_size = scale_font(style.font_size, &mapping);
            obj.font_weight = style.font_weight.clone();
            obj.font_style = style.font_style.clone();
            obj.text_align = style.text_align.clone();
            obj.fill = style.fill.clone();
            obj.stroke = style.stroke.clone();
            obj.stroke_width = style.stroke_width;
        }
        ElementKind::Image => {
            obj.src = style.src.clone();
        }
        ElementKind::Shape | ElementKind::Path => {
            let outline = match record.kind {
                ElementKind::Path => Some(resolve_path(record)?),
                _ => record
                    .vector_meta
                    .as_ref()
                    .and_then(|m| m.path_data.clone())
                    .or_else(|| style.path_data.clone()),
            };
            // Outlines are stored in standard units, like the box.
            obj.path = outline.map(|p| map_outline(&p, &mapping));
            obj.fill = style.fill.clone();
            obj.stroke = style.stroke.clone();
            obj.stroke_width = style.stroke_width;
            if let Some(meta) = &record.vector_meta {
                obj.vector_shape_type = Some(meta.shape_type);
                obj.vector_params = Some(meta.params.clone());
            }
        }
    }

    Ok(LiveObjectDescriptor::new(obj))
}

/// Materializes records in order. Remote images get a ticket and a pending
/// slot; inline ones are probed on the spot.
pub fn to_live_objects(records: &[DesignElement], live: Frame, opts: &ConvertOptions, next_ticket: &mut u64) -> Materialized {
    materialize(records.iter().map(Ok).enumerate(), live, opts, next_ticket)
}

/// Same as [`to_live_objects`] for records that were decoded one by one;
/// decode failures become skipped entries at their original index.
pub fn to_live_objects_decoded(entries: &[Result<DesignElement>], live: Frame, opts: &ConvertOptions, next_ticket: &mut u64) -> Materialized {
    materialize(entries.iter().map(|e| e.as_ref().map_err(|err| err.clone())).enumerate(), live, opts, next_ticket)
}

fn materialize<'a>(
    entries: impl Iterator<Item = (usize, Result<&'a DesignElement>)>,
    live: Frame,
    opts: &ConvertOptions,
    next_ticket: &mut u64,
) -> Materialized {
    let mut out = Materialized::default();

    for (index, entry) in entries {
        let descriptor = entry.and_then(|record| to_live_object(record, live, opts));
        let mut descriptor = match descriptor {
            Ok(d) => d,
            Err(e) => {
                warn!("skipping record {}: {}", index, e);
                out.skipped.push(SkippedElement::new(index, e));
                continue;
            }
        };

        if descriptor.object.object_type == "image" {
            let slot = out.descriptors.len();
            match descriptor.object.src.clone() {
                None => descriptor = descriptor.placeholder("image has no source"),
                Some(src) if image_source::is_inline(&src) => {
                    descriptor = settle_image(&descriptor, image_source::probe_inline(&src));
                }
                Some(src) => {
                    let ticket = *next_ticket;
                    *next_ticket += 1;
                    descriptor.image_state = Some(ImageState::Pending { ticket });
                    out.pending_images.push(ImageRequest { ticket, slot, src });
                }
            }
        }

        out.descriptors.push(descriptor);
    }

    out
}

/// Final descriptor for an image slot once its size is known or its fetch failed.
pub fn settle_image(descriptor: &LiveObjectDescriptor, outcome: Result<(u32, u32)>) -> LiveObjectDescriptor {
    match outcome {
        Ok((natural_width, natural_height)) => {
            let mut ready = descriptor.clone();
            ready.image_state = Some(ImageState::Ready { natural_width, natural_height });
            ready
        }
        Err(e) => {
            warn!("image {:?} degraded to placeholder: {}", descriptor.object.src, e);
            descriptor.placeholder(&e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_source::tests::png_data_url;
    use crate::intelligent_shapes::ShapeParams;
    use crate::types::{Rect, VectorShapeType, STANDARD_FRAME};

    fn opts() -> ConvertOptions {
        ConvertOptions::default()
    }

    fn text(left: f64, top: f64) -> LiveObject {
        let mut t = LiveObject::new("textbox", left, top, 400.0, 100.0);
        t.text = Some("Hello".to_string());
        t.font_family = Some("Roboto".to_string());
        t.font_size = Some(48.0);
        t.font_weight = Some("bold".to_string());
        t.text_align = Some("center".to_string());
        t.fill = Some("#222222".to_string());
        t
    }

    fn star(left: f64, top: f64) -> LiveObject {
        let params = ShapeParams::new().with("pointCount", 5.0).with("innerRadiusRatio", 0.5).with("outerRadius", 100.0);
        let mut s = LiveObject::new("path", left, top, 200.0, 200.0);
        s.path = Some(intelligent_shapes::generate(VectorShapeType::Star, &params));
        s.vector_shape_type = Some(VectorShapeType::Star);
        s.vector_params = Some(params);
        s.fill = Some("#ffcc00".to_string());
        s
    }

    #[test]
    fn text_record_captures_font_and_content() {
        let live = Frame::new(1600.0, 1200.0);
        let rec = to_record(&text(200.0, 200.0), Some("front"), live, &opts()).unwrap();
        assert_eq!(rec.kind, ElementKind::Text);
        assert_eq!(rec.area_id.as_deref(), Some("front"));
        assert_eq!(rec.geometry.as_ref().unwrap().rect(), Rect::new(100.0, 100.0, 200.0, 50.0));
        assert_eq!(rec.style.text.as_deref(), Some("Hello"));
        assert_eq!(rec.style.font_size, Some(24.0));
        assert_eq!(rec.vector_meta, None);
    }

    #[test]
    fn text_round_trips_through_double_size_frame() {
        let mut rec = to_record(&text(0.0, 0.0), None, STANDARD_FRAME, &opts()).unwrap();
        let g = rec.geometry.as_mut().unwrap();
        g.x = 100.0;
        g.y = 100.0;
        g.width = 200.0;
        g.height = 50.0;

        let live = Frame::new(1600.0, 1200.0);
        let on_canvas = to_live_object(&rec, live, &opts()).unwrap();
        assert_eq!(on_canvas.object.bounds(), Rect::new(200.0, 200.0, 400.0, 100.0));

        let back = to_record(&on_canvas.object, None, live, &opts()).unwrap();
        assert_eq!(back.geometry.unwrap().rect(), Rect::new(100.0, 100.0, 200.0, 50.0));
        assert_eq!(back.style, rec.style);
    }

    #[test]
    fn centered_star_scales_by_half_on_half_size_frame() {
        let rec = to_record(&star(300.0, 200.0), None, STANDARD_FRAME, &opts()).unwrap();
        let d = to_live_object(&rec, Frame::new(400.0, 300.0), &opts()).unwrap();
        assert_eq!(d.object.bounds(), Rect::new(150.0, 100.0, 100.0, 100.0));
        assert_eq!(d.object.vector_shape_type, Some(VectorShapeType::Star));
    }

    #[test]
    fn generated_path_keeps_vector_meta() {
        let rec = to_record(&star(10.0, 10.0), None, STANDARD_FRAME, &opts()).unwrap();
        let meta = rec.vector_meta.as_ref().unwrap();
        assert_eq!(meta.shape_type, VectorShapeType::Star);
        assert_eq!(meta.params.get("pointCount"), Some(5.0));
        assert!(meta.path_data.is_some());
        assert_eq!(rec.style.path_data, None);
        assert!(rec.provenance.tags.contains(&"generator:star".to_string()));
    }

    #[test]
    fn unsupported_kinds_fail_forward_conversion() {
        let group = LiveObject::new("group", 0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            to_record(&group, None, STANDARD_FRAME, &opts()),
            Err(DesignError::UnsupportedElementKind("group".to_string()))
        );
    }

    #[test]
    fn batch_skips_chrome_and_reports_failures_in_order() {
        let mut bg = LiveObject::new("image", 0.0, 0.0, 800.0, 600.0);
        bg.name = Some("background".to_string());
        let objects = vec![
            bg,
            text(10.0, 10.0),
            LiveObject::new("group", 0.0, 0.0, 1.0, 1.0),
            LiveObject::new("circle", 50.0, 50.0, 20.0, 20.0),
        ];
        let captured = to_records(&objects, STANDARD_FRAME, &opts());
        let kinds: Vec<ElementKind> = captured.elements.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ElementKind::Text, ElementKind::Shape]);
        assert_eq!(captured.elements[1].style.shape, Some(BasicShape::Circle));
        assert_eq!(captured.skipped.len(), 1);
        assert_eq!(captured.skipped[0].index, 2);
        assert_eq!(captured.skipped[0].code, "unsupported_element_kind");
    }

    #[test]
    fn degenerate_live_frame_skips_each_element() {
        let captured = to_records(&[text(0.0, 0.0)], Frame::new(0.0, 0.0), &opts());
        assert!(captured.elements.is_empty());
        assert_eq!(captured.skipped[0].code, "degenerate_frame");
    }

    #[test]
    fn missing_geometry_is_reported() {
        let mut rec = to_record(&text(0.0, 0.0), None, STANDARD_FRAME, &opts()).unwrap();
        rec.geometry = None;
        assert_eq!(to_live_object(&rec, STANDARD_FRAME, &opts()), Err(DesignError::MissingGeometry));
    }

    #[test]
    fn broken_generated_path_is_regenerated() {
        let original = star(0.0, 0.0);
        let mut rec = to_record(&original, None, STANDARD_FRAME, &opts()).unwrap();
        rec.vector_meta.as_mut().unwrap().path_data = Some("M 1 banana".to_string());
        let d = to_live_object(&rec, STANDARD_FRAME, &opts()).unwrap();
        assert_eq!(d.object.path, original.path);

        rec.vector_meta.as_mut().unwrap().path_data = None;
        let d = to_live_object(&rec, STANDARD_FRAME, &opts()).unwrap();
        assert_eq!(d.object.path, original.path);
    }

    #[test]
    fn plain_path_without_valid_data_is_invalid() {
        let mut p = LiveObject::new("path", 0.0, 0.0, 10.0, 10.0);
        p.path = Some("M0 0 L10 0 L10 10 Z".to_string());
        let mut rec = to_record(&p, None, STANDARD_FRAME, &opts()).unwrap();
        assert_eq!(to_live_object(&rec, STANDARD_FRAME, &opts()).unwrap().object.path, p.path);

        rec.style.path_data = Some("not a path".to_string());
        assert!(matches!(to_live_object(&rec, STANDARD_FRAME, &opts()), Err(DesignError::InvalidPath(_))));

        rec.style.path_data = None;
        assert!(matches!(to_live_object(&rec, STANDARD_FRAME, &opts()), Err(DesignError::InvalidPath(_))));
    }

    #[test]
    fn batch_round_trip_preserves_order_kind_geometry_and_style() {
        let live = Frame::new(1024.0, 768.0);
        let mut img = LiveObject::new("image", 100.0, 40.0, 300.0, 200.0);
        img.src = Some(png_data_url(30, 20));
        img.angle = 15.0;
        let mut rect = LiveObject::new("rect", 613.0, 411.0, 57.0, 91.0);
        rect.fill = Some("#00ff00".to_string());
        rect.stroke = Some("#000000".to_string());
        rect.stroke_width = Some(2.0);
        rect.opacity = 0.5;
        let objects = vec![text(21.0, 33.0), img, rect, star(500.0, 100.0)];

        let captured = to_records(&objects, live, &opts());
        assert!(captured.skipped.is_empty());
        let mut ticket = 1;
        let out = to_live_objects(&captured.elements, live, &opts(), &mut ticket);
        assert!(out.skipped.is_empty());
        assert!(out.pending_images.is_empty());
        assert_eq!(out.descriptors.len(), objects.len());

        for (before, after) in objects.iter().zip(&out.descriptors) {
            let after = &after.object;
            assert_eq!(before.kind(), after.kind());
            assert!((before.left - after.left).abs() <= 1.0);
            assert!((before.top - after.top).abs() <= 1.0);
            assert!((before.width - after.width).abs() <= 1.0);
            assert!((before.height - after.height).abs() <= 1.0);
            assert_eq!(before.angle, after.angle);
            assert_eq!(before.opacity, after.opacity);
            assert_eq!(before.fill, after.fill);
            assert_eq!(before.stroke, after.stroke);
            assert_eq!(before.stroke_width, after.stroke_width);
            assert_eq!(before.text, after.text);
            assert_eq!(before.src, after.src);
            match (&before.path, &after.path) {
                (Some(a), Some(b)) => {
                    let a = intelligent_shapes::path_bounds(a).unwrap();
                    let b = intelligent_shapes::path_bounds(b).unwrap();
                    assert!((a.width - b.width).abs() < 1e-3 && (a.height - b.height).abs() < 1e-3);
                }
                (a, b) => assert_eq!(a, b),
            }
        }
        assert!((out.descriptors[0].object.font_size.unwrap() - 48.0).abs() <= 0.01);
        assert_eq!(out.descriptors[1].image_state, Some(ImageState::Ready { natural_width: 30, natural_height: 20 }));
    }

    #[test]
    fn remote_images_get_tickets_for_their_slots() {
        let mut a = LiveObject::new("image", 0.0, 0.0, 10.0, 10.0);
        a.src = Some("https://cdn.example/a.png".to_string());
        let mut b = a.clone();
        b.src = Some("https://cdn.example/b.png".to_string());
        let captured = to_records(&[a, text(0.0, 0.0), b], STANDARD_FRAME, &opts());

        let mut ticket = 7;
        let out = to_live_objects(&captured.elements, STANDARD_FRAME, &opts(), &mut ticket);
        assert_eq!(ticket, 9);
        assert_eq!(out.pending_images, vec![
            ImageRequest { ticket: 7, slot: 0, src: "https://cdn.example/a.png".to_string() },
            ImageRequest { ticket: 8, slot: 2, src: "https://cdn.example/b.png".to_string() },
        ]);
        assert_eq!(out.descriptors[2].image_state, Some(ImageState::Pending { ticket: 8 }));
    }

    #[test]
    fn unreadable_inline_image_degrades_to_placeholder() {
        let mut img = LiveObject::new("image", 1.0, 2.0, 30.0, 40.0);
        img.src = Some("data:image/png;base64,AAAA".to_string());
        let rec = to_record(&img, None, STANDARD_FRAME, &opts()).unwrap();
        let mut ticket = 1;
        let out = to_live_objects(&[rec.clone()], STANDARD_FRAME, &opts(), &mut ticket);
        let d = &out.descriptors[0];
        assert_eq!(d.object.object_type, "image");
        assert!(d.is_placeholder());
        assert!(out.skipped.is_empty());

        // The stand-in is captured as the image it replaces.
        let again = to_record(&d.object, None, STANDARD_FRAME, &opts()).unwrap();
        assert_eq!(again.kind, ElementKind::Image);
        assert_eq!(again.style, rec.style);
        assert_eq!(again.style.fill, None);
    }

    #[test]
    fn generated_basic_shape_keeps_vector_meta() {
        let mut hex = LiveObject::new("polygon", 40.0, 40.0, 200.0, 200.0);
        hex.vector_shape_type = Some(VectorShapeType::Polygon);
        hex.vector_params = Some(ShapeParams::new().with("sideCount", 6.0).with("radius", 100.0));
        hex.fill = Some("#3366ff".to_string());

        let rec = to_record(&hex, None, STANDARD_FRAME, &opts()).unwrap();
        assert_eq!(rec.kind, ElementKind::Shape);
        assert_eq!(rec.style.shape, Some(BasicShape::Polygon));
        let meta = rec.vector_meta.as_ref().unwrap();
        assert_eq!(meta.shape_type, VectorShapeType::Polygon);
        assert_eq!(meta.params.get("sideCount"), Some(6.0));
        assert!(rec.provenance.tags.contains(&"generator:polygon".to_string()));

        let d = to_live_object(&rec, STANDARD_FRAME, &opts()).unwrap();
        assert_eq!(d.object.object_type, "polygon");
        assert_eq!(d.object.vector_shape_type, Some(VectorShapeType::Polygon));
        assert_eq!(d.object.vector_params, rec.vector_meta.map(|m| m.params));
    }

    #[test]
    fn outlines_scale_with_the_frame() {
        let mut band = LiveObject::new("path", 100.0, 100.0, 200.0, 100.0);
        band.path = Some("M0,0 L200,0 L200,100 L0,100 Z".to_string());
        let rec = to_record(&band, None, STANDARD_FRAME, &opts()).unwrap();

        let d = to_live_object(&rec, Frame::new(400.0, 300.0), &opts()).unwrap();
        let o = &d.object;
        let outline = intelligent_shapes::path_bounds(o.path.as_deref().unwrap()).unwrap();
        assert_eq!((outline.width * o.scale_x, outline.height * o.scale_y), (o.width, o.height));
        assert_eq!((o.width, o.height), (100.0, 50.0));

        let back = to_record(o, None, Frame::new(400.0, 300.0), &opts()).unwrap();
        assert_eq!(back.style.path_data, band.path);
        assert_eq!(back.geometry, rec.geometry);
    }

    #[test]
    fn regenerated_star_is_sized_for_the_live_frame() {
        let rec = to_record(&star(0.0, 0.0), None, STANDARD_FRAME, &opts()).unwrap();
        let full = intelligent_shapes::path_bounds(rec.vector_meta.as_ref().unwrap().path_data.as_deref().unwrap()).unwrap();

        let d = to_live_object(&rec, Frame::new(400.0, 300.0), &opts()).unwrap();
        let half = intelligent_shapes::path_bounds(d.object.path.as_deref().unwrap()).unwrap();
        assert!((half.width - full.width / 2.0).abs() < 1e-5);
        assert!((half.height - full.height / 2.0).abs() < 1e-5);
    }

    #[test]
    fn malformed_record_does_not_block_siblings() {
        let good = to_record(&text(0.0, 0.0), None, STANDARD_FRAME, &opts()).unwrap();
        let mut bad = good.clone();
        bad.geometry = None;
        let mut ticket = 1;
        let out = to_live_objects(&[bad, good.clone(), good], STANDARD_FRAME, &opts(), &mut ticket);
        assert_eq!(out.descriptors.len(), 2);
        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].index, 0);
        assert_eq!(out.skipped[0].error, DesignError::MissingGeometry);
    }
}
