use wasm_bindgen::prelude::*;
use tracing::warn;
use crate::objects::LiveObject;
use crate::session::{CanvasChrome, CanvasSession, MemoryCanvas, SessionConfig};
use crate::types::Frame;

/// JS-facing handle over one editing session. Every method speaks JSON.
#[wasm_bindgen]
pub struct DesignEngine {
    pub(crate) session: CanvasSession<MemoryCanvas>,
}

#[wasm_bindgen]
impl DesignEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> DesignEngine {
        console_error_panic_hook::set_once();
        DesignEngine {
            session: CanvasSession::new(MemoryCanvas::new(Frame::new(width, height))),
        }
    }

    /// Like `new`, with a `SessionConfig` JSON. Unreadable config falls back to defaults.
    pub fn with_config(width: f64, height: f64, config_json: &str) -> DesignEngine {
        console_error_panic_hook::set_once();
        let config = serde_json::from_str::<SessionConfig>(config_json).unwrap_or_else(|e| {
            warn!("ignoring session config: {}", e);
            SessionConfig::default()
        });
        DesignEngine {
            session: CanvasSession::with_config(MemoryCanvas::new(Frame::new(width, height)), config),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.session.canvas_mut().frame = Frame::new(width, height);
    }

    /// Mirrors the editor's object list into the session (chrome included).
    pub fn set_objects(&mut self, objects_json: &str) -> String {
        match serde_json::from_str::<Vec<LiveObject>>(objects_json) {
            Ok(objects) => {
                let count = objects.len();
                self.session.canvas_mut().set_objects(objects);
                serde_json::json!({ "success": true, "count": count }).to_string()
            }
            Err(e) => serde_json::json!({ "error": format!("Invalid objects JSON: {}", e) }).to_string(),
        }
    }

    pub fn get_objects_json(&self) -> String {
        serde_json::to_string(self.session.canvas().descriptors()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn get_frame(&self) -> String {
        serde_json::to_string(&self.session.canvas().frame()).unwrap_or("{}".to_string())
    }

    pub fn get_history(&self) -> String {
        let history = self.session.history();
        serde_json::json!({
            "labels": history.labels(),
            "position": history.position(),
            "canUndo": history.can_undo(),
            "canRedo": history.can_redo(),
        })
        .to_string()
    }

    pub fn is_torn_down(&self) -> bool {
        self.session.is_torn_down()
    }
}
