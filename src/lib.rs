/// Confirm Guard - click confirmation prompts for DOM elements
/// Built with Rust + WASM + Yew

mod dom;
mod guard;
mod options;
pub mod ui;

pub use dom::{Binding, WindowPrompt, bind, bind_guard, bind_selector};
pub use guard::{Cancelable, ConfirmGuard, Decision, Prompt};
pub use options::{ConfirmMessage, DEFAULT_MESSAGE, GuardOptions};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Ask for confirmation on every click of `elem`. Declining cancels the click.
#[wasm_bindgen]
pub fn confirm_button(elem: &web_sys::EventTarget, text: Option<String>) -> Result<(), JsValue> {
    bind(elem, text)?.forget();
    Ok(())
}

/// Same as `confirm_button` for every element matching `selector`.
/// Returns how many elements were bound.
#[wasm_bindgen]
pub fn confirm_selector(selector: &str, text: Option<String>) -> Result<u32, JsValue> {
    let bindings = bind_selector(selector, text)?;
    let count = bindings.len() as u32;
    bindings.into_iter().for_each(Binding::forget);
    Ok(count)
}

/// Handle returned to JavaScript by `bind_confirm`
#[wasm_bindgen]
pub struct ConfirmBinding {
    inner: Option<Binding>,
    message: String,
}

#[wasm_bindgen]
impl ConfirmBinding {
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn bound(&self) -> bool {
        self.inner.is_some()
    }

    pub fn unbind(&mut self) {
        if let Some(binding) = self.inner.take() {
            binding.unbind();
        }
    }
}

/// Bind with an options object (`{ message?: string }`) and get back a
/// handle that can be unbound later.
#[wasm_bindgen]
pub fn bind_confirm(elem: &web_sys::EventTarget, options: JsValue) -> Result<ConfirmBinding, JsValue> {
    let options: GuardOptions = if options.is_null() || options.is_undefined() {
        GuardOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid confirm options: {}", e)))?
    };

    let binding = bind_guard(elem, ConfirmGuard::from(options.resolve()))?;
    let message = binding.message().to_string();

    Ok(ConfirmBinding {
        inner: Some(binding),
        message,
    })
}
