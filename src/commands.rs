use wasm_bindgen::prelude::*;
use serde::Deserialize;
use serde_json::json;
use crate::engine::DesignEngine;
use crate::intelligent_shapes::{self, ShapeParams};
use crate::types::VectorShapeType;

fn error(msg: impl std::fmt::Display) -> String {
    json!({ "error": msg.to_string() }).to_string()
}

#[wasm_bindgen]
impl DesignEngine {
    pub fn execute_command(&mut self, cmd_json: &str) -> String {
        #[derive(Deserialize)]
        struct Command {
            action: String,
            #[serde(default)]
            params: serde_json::Value,
        }

        let cmd: Command = match serde_json::from_str(cmd_json) {
            Ok(c) => c,
            Err(e) => return error(format!("Invalid JSON: {}", e)),
        };

        let now = cmd.params["now"].as_f64().unwrap_or(0.0).max(0.0) as u64;
        let label = cmd.params["label"].as_str().unwrap_or("Edit");

        match cmd.action.as_str() {
            "notify_edit" => {
                self.session.notify_edit(label, now);
                json!({ "success": true }).to_string()
            }
            "tick" => json!({ "recorded": self.session.tick(now) }).to_string(),
            "flush" => match self.session.flush_pending() {
                Some(recorded) => serde_json::to_string(&recorded).unwrap_or_else(error),
                None => json!({ "recorded": false }).to_string(),
            },
            "record" => match self.session.record_now(label, now) {
                Some(recorded) => serde_json::to_string(&recorded).unwrap_or_else(error),
                None => error("Session has been torn down"),
            },
            "undo" => match self.session.undo() {
                Some(materialized) => serde_json::to_string(&materialized).unwrap_or_else(error),
                None => json!({ "changed": false }).to_string(),
            },
            "redo" => match self.session.redo() {
                Some(materialized) => serde_json::to_string(&materialized).unwrap_or_else(error),
                None => json!({ "changed": false }).to_string(),
            },
            "teardown" => {
                self.session.teardown();
                json!({ "success": true }).to_string()
            }
            "generate" => {
                let shape_id = cmd.params["shapeType"].as_str().unwrap_or("");
                let Some(shape_type) = VectorShapeType::parse(shape_id) else {
                    return error(format!("Unknown shape type: {}", shape_id));
                };
                let params: ShapeParams = serde_json::from_value(cmd.params["params"].clone()).unwrap_or_default();
                let path = intelligent_shapes::generate(shape_type, &params);
                let bounds = intelligent_shapes::path_bounds(&path).ok();
                json!({ "path": path, "bounds": bounds }).to_string()
            }
            "path_bounds" => {
                let path = cmd.params["path"].as_str().unwrap_or("");
                match intelligent_shapes::path_bounds(path) {
                    Ok(bounds) => json!({ "bounds": bounds }).to_string(),
                    Err(e) => error(e),
                }
            }
            other => error(format!("Unknown action: {}", other)),
        }
    }
}
