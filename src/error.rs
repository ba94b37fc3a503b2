//! Error types for design element conversion

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DesignError {
    #[error("Unsupported element kind: {0}")]
    UnsupportedElementKind(String),

    #[error("Record has no geometry")]
    MissingGeometry,

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Degenerate frame {width}x{height}")]
    DegenerateFrame { width: f64, height: f64 },

    #[error("Image resolution failed: {0}")]
    ImageResolutionFailed(String),

    #[error("Unknown shape type: {0}")]
    UnknownShapeType(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

impl DesignError {
    /// Stable machine-readable code for skipped-element reports.
    pub fn code(&self) -> &'static str {
        match self {
            DesignError::UnsupportedElementKind(_) => "unsupported_element_kind",
            DesignError::MissingGeometry => "missing_geometry",
            DesignError::InvalidPath(_) => "invalid_path",
            DesignError::DegenerateFrame { .. } => "degenerate_frame",
            DesignError::ImageResolutionFailed(_) => "image_resolution_failed",
            DesignError::UnknownShapeType(_) => "unknown_shape_type",
            DesignError::MalformedRecord(_) => "malformed_record",
        }
    }
}

impl From<serde_json::Error> for DesignError {
    fn from(e: serde_json::Error) -> Self {
        DesignError::MalformedRecord(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DesignError>;
