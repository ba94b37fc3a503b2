//! Mapping rectangles between a live canvas and the standard frame.
//!
//! Every conversion goes through a [`FrameMapping`]: an axis-aligned scale
//! followed by a translation. `to_standard` uses the exact inverse of the
//! mapping `from_standard` uses, so normalizing and denormalizing against the
//! same live frame only ever loses what rounding removes.

use crate::error::{DesignError, Result};
use crate::types::{ConvertOptions, Frame, Rect, STANDARD_FRAME};
use serde::{Serialize, Deserialize};

/// Decimal places kept for geometry stored in standard units. Live canvas
/// geometry rounds to whole pixels.
pub const STANDARD_DECIMALS: i32 = 2;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct FrameMapping {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl FrameMapping {
    pub fn identity() -> Self {
        FrameMapping { scale_x: 1.0, scale_y: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }

    /// Mapping that places `from` inside `to`.
    ///
    /// With `preserve_aspect` both axes use the smaller scale factor. With
    /// `center_offset` the scaled `from` frame is centered in `to`, which is
    /// how the product artwork is laid out on the live canvas.
    pub fn between(from: Frame, to: Frame, opts: &ConvertOptions) -> Result<Self> {
        for frame in [from, to] {
            if frame.is_degenerate() {
                return Err(DesignError::DegenerateFrame { width: frame.width, height: frame.height });
            }
        }

        let mut sx = to.width / from.width;
        let mut sy = to.height / from.height;
        if opts.preserve_aspect {
            let s = sx.min(sy);
            sx = s;
            sy = s;
        }

        let (offset_x, offset_y) = if opts.center_offset {
            ((to.width - from.width * sx) / 2.0, (to.height - from.height * sy) / 2.0)
        } else {
            (0.0, 0.0)
        };

        Ok(FrameMapping { scale_x: sx, scale_y: sy, offset_x, offset_y })
    }

    pub fn inverse(&self) -> Self {
        FrameMapping {
            scale_x: 1.0 / self.scale_x,
            scale_y: 1.0 / self.scale_y,
            offset_x: -self.offset_x / self.scale_x,
            offset_y: -self.offset_y / self.scale_y,
        }
    }

    pub fn apply(&self, rect: &Rect, round: bool) -> Rect {
        let mapped = Rect {
            x: rect.x * self.scale_x + self.offset_x,
            y: rect.y * self.scale_y + self.offset_y,
            width: rect.width * self.scale_x,
            height: rect.height * self.scale_y,
        };
        if round { mapped.rounded() } else { mapped }
    }

    /// Like [`Self::apply`] for a mapping into the standard frame, which
    /// keeps [`STANDARD_DECIMALS`] places so small elements on large
    /// canvases survive.
    pub fn apply_to_standard(&self, rect: &Rect, round: bool) -> Rect {
        let mapped = self.apply(rect, false);
        if round { mapped.rounded_to(STANDARD_DECIMALS) } else { mapped }
    }

    /// Scale applied to lengths that have no axis, such as font sizes.
    pub fn uniform_scale(&self) -> f64 {
        self.scale_x.min(self.scale_y)
    }
}

pub fn convert(rect: &Rect, from: Frame, to: Frame, opts: &ConvertOptions) -> Result<Rect> {
    let mapping = FrameMapping::between(from, to, opts)?;
    Ok(mapping.apply(rect, opts.round))
}

/// Mapping from the standard frame into `live`.
pub fn standard_mapping(live: Frame, opts: &ConvertOptions) -> Result<FrameMapping> {
    FrameMapping::between(STANDARD_FRAME, live, opts)
}

pub fn to_standard(rect: &Rect, live: Frame, opts: &ConvertOptions) -> Result<Rect> {
    let mapping = standard_mapping(live, opts)?.inverse();
    Ok(mapping.apply_to_standard(rect, opts.round))
}

pub fn from_standard(rect: &Rect, live: Frame, opts: &ConvertOptions) -> Result<Rect> {
    let mapping = standard_mapping(live, opts)?;
    Ok(mapping.apply(rect, opts.round))
}
