use wasm_bindgen::prelude::*;
use serde_json::json;
use crate::element::decode_design;
use crate::engine::DesignEngine;
use crate::intelligent_shapes;

#[wasm_bindgen]
impl DesignEngine {
    /// Loads a stored design (document or bare record list) onto the canvas.
    /// Returns the descriptors, the image sources still to fetch, and any
    /// records that had to be skipped.
    pub fn load_design(&mut self, json: &str, now_ms: f64) -> String {
        let decoded = match decode_design(json) {
            Ok(d) => d,
            Err(e) => return json!({ "error": format!("Failed to parse design: {}", e) }).to_string(),
        };
        if decoded.background.is_some() {
            self.session.canvas_mut().background = decoded.background;
        }
        let materialized = self.session.load_decoded(&decoded.records, now_ms.max(0.0) as u64);
        serde_json::to_string(&materialized).unwrap_or("{\"error\": \"Serialization failed\"}".to_string())
    }

    pub fn export_design(&self, design_id: &str) -> String {
        let (document, skipped) = self.session.export_document(design_id);
        let response = json!({ "document": document, "skipped": skipped });
        serde_json::to_string(&response).unwrap_or("{\"error\": \"Serialization failed\"}".to_string())
    }

    /// Bytes fetched for an image ticket. False if the ticket is stale.
    pub fn complete_image(&mut self, ticket: f64, data: &[u8]) -> bool {
        self.session.complete_image(ticket as u64, data)
    }

    pub fn fail_image(&mut self, ticket: f64, reason: &str) -> bool {
        self.session.fail_image(ticket as u64, reason)
    }

    pub fn shape_catalog_json(&self) -> String {
        serde_json::to_string(&intelligent_shapes::catalog()).unwrap_or("[]".to_string())
    }

    pub fn shape_catalog(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&intelligent_shapes::catalog()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
