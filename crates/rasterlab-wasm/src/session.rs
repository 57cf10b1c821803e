//! Editing session WASM bindings.
//!
//! The shell owns one [`JsEditorSession`] and drives it from its buttons:
//! upload calls `load`, each menu entry calls `apply` with an operation name,
//! and the download button calls `export_bytes` / `export_file_name`.
//! `actions()` tells the shell which buttons to enable.

use crate::types::JsRasterImage;
use rasterlab_core::{EditorConfig, Session};
use wasm_bindgen::prelude::*;

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Editing session holding the original upload and the latest result.
#[wasm_bindgen]
pub struct JsEditorSession {
    inner: Session,
}

#[wasm_bindgen]
impl JsEditorSession {
    /// Create an empty session with the default parameters.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Session::default(),
        }
    }

    /// Create an empty session from a config object.
    ///
    /// Missing fields take their default values.
    pub fn with_config(config: JsValue) -> Result<JsEditorSession, JsValue> {
        let config: EditorConfig = serde_wasm_bindgen::from_value(config).map_err(to_js_error)?;
        let inner = Session::new(config).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Serialize the active config for storage or display.
    pub fn config_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.config()).map_err(to_js_error)
    }

    /// Decode an uploaded file and make it the original image.
    ///
    /// Any pending changes are discarded. On failure the session is unchanged.
    pub fn load(&mut self, bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
        self.inner
            .load(bytes)
            .map(|img| JsRasterImage::from_raster(img.clone()))
            .map_err(to_js_error)
    }

    /// Apply an operation by name (`"rotate90"`, `"zoom_in"`, `"grayscale"`, ...)
    /// to the original image and return the result.
    pub fn apply(&mut self, operation: &str) -> Result<JsRasterImage, JsValue> {
        self.inner
            .apply_named(operation)
            .map(|img| JsRasterImage::from_raster(img.clone()))
            .map_err(to_js_error)
    }

    /// Discard the transformed image.
    pub fn remove_changes(&mut self) {
        self.inner.remove_changes();
    }

    /// Discard both images.
    pub fn remove_image(&mut self) {
        self.inner.remove_image();
    }

    /// Copy of the original image, if one is loaded.
    pub fn original(&self) -> Option<JsRasterImage> {
        self.inner
            .original()
            .cloned()
            .map(JsRasterImage::from_raster)
    }

    /// Copy of the transformed image, if any.
    pub fn derived(&self) -> Option<JsRasterImage> {
        self.inner.derived().cloned().map(JsRasterImage::from_raster)
    }

    /// Whether a transformed image is pending export.
    #[wasm_bindgen(getter)]
    pub fn is_modified(&self) -> bool {
        self.inner.is_modified()
    }

    /// Whether the download button should be enabled.
    #[wasm_bindgen(getter)]
    pub fn can_export(&self) -> bool {
        self.inner.actions().can_export
    }

    /// Enabled actions as `{ can_transform, can_remove_changes, can_remove_image, can_export }`.
    pub fn actions(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.actions()).map_err(to_js_error)
    }

    /// Encode the transformed image for download.
    pub fn export_bytes(&self) -> Result<Vec<u8>, JsValue> {
        self.inner
            .export()
            .map(|exported| exported.bytes)
            .map_err(to_js_error)
    }

    /// File name to use for the download, e.g. `imagem_transformada.png`.
    pub fn export_file_name(&self) -> String {
        self.inner.config().export_file_name()
    }

    /// MIME type of the exported bytes.
    pub fn export_mime_type(&self) -> String {
        self.inner.config().export_format.mime_type().to_string()
    }
}

impl Default for JsEditorSession {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_without_image_errors() {
        let mut session = JsEditorSession::new();
        assert!(session.apply("mirror").is_err());
    }

    #[wasm_bindgen_test]
    fn test_unknown_operation_errors() {
        let mut session = JsEditorSession::new();
        session.load(&tests_png()).unwrap();
        assert!(session.apply("sharpen").is_err());
    }

    #[wasm_bindgen_test]
    fn test_export_without_changes_errors() {
        let session = JsEditorSession::new();
        assert!(session.export_bytes().is_err());
    }

    #[wasm_bindgen_test]
    fn test_config_round_trip() {
        let session = JsEditorSession::new();
        let json = session.config_json().unwrap();
        let restored = JsEditorSession::with_config(json).unwrap();
        assert_eq!(restored.export_file_name(), "imagem_transformada.png");
    }

    #[wasm_bindgen_test]
    fn test_partial_config_object() {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"export_stem".into(), &"saida".into()).unwrap();
        let session = JsEditorSession::with_config(obj.into()).unwrap();
        assert_eq!(session.export_file_name(), "saida.png");
    }

    #[wasm_bindgen_test]
    fn test_actions_object() {
        let session = JsEditorSession::new();
        let actions = session.actions().unwrap();
        let can_export = js_sys::Reflect::get(&actions, &"can_export".into()).unwrap();
        assert_eq!(can_export.as_bool(), Some(false));
    }

    fn tests_png() -> Vec<u8> {
        rasterlab_core::encode_png(&rasterlab_core::RasterImage::blank(2, 2)).unwrap()
    }
}
