pub mod types;
pub mod error;
pub mod coords;
pub mod intelligent_shapes;
pub mod objects;
pub mod element;
pub mod image_source;
pub mod codec;
pub mod history;
pub mod session;
pub mod engine;
pub mod commands;
pub mod io;

pub use engine::DesignEngine;
pub use error::{DesignError, Result};
pub use types::*;
pub use coords::{convert, from_standard, to_standard, FrameMapping};
pub use intelligent_shapes::{generate, ShapeParams};
pub use objects::{ImageState, LiveObject, LiveObjectDescriptor};
pub use element::{CanvasState, DesignDocument, DesignElement, Geometry};
pub use codec::{to_live_object, to_live_objects, to_record, to_records, Captured, Materialized, SkippedElement};
pub use history::{HistoryConfig, HistorySnapshot, HistoryStore};
pub use session::{CanvasChrome, CanvasSession, MemoryCanvas, SessionConfig};
