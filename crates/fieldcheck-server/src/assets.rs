// File: src/assets.rs
// Purpose: Serving the fieldcheck-wasm bundle and the script that boots it

use maud::{html, Markup, PreEscaped};
use tower_http::services::ServeDir;

/// URL prefix the wasm-pack output is mounted under
pub const PKG_PATH: &str = "/pkg";

/// JS glue generated by wasm-pack for fieldcheck-wasm
pub const WASM_MODULE: &str = "/pkg/fieldcheck_wasm.js";

/// Service for the wasm-pack output directory
pub fn pkg_service(pkg_dir: &str) -> ServeDir {
    ServeDir::new(pkg_dir)
}

/// Module script loading the WASM validators and attaching them to `form_id`
///
/// The server stays authoritative, so a missing bundle only costs live feedback.
pub fn bootstrap_script(form_id: &str) -> Markup {
    let form_id = serde_json::to_string(form_id).unwrap_or_else(|_| "\"\"".to_string());
    let js = format!(
        r#"
import({module:?})
  .then(async (fieldcheck) => {{
    await fieldcheck.default();
    fieldcheck.attachLiveValidation({form_id});
  }})
  .catch((err) => console.warn("fieldcheck: live validation unavailable", err));
"#,
        module = WASM_MODULE,
        form_id = form_id,
    );

    html! {
        script type="module" { (PreEscaped(js)) }
    }
}
