/// Attaching the confirmation guard to DOM elements
use crate::guard::{Cancelable, ConfirmGuard, Prompt};
use crate::options::ConfirmMessage;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

const CLICK: &str = "click";

/// `window.confirm`. Fails closed: if no prompt can be shown the click is
/// treated as declined.
pub struct WindowPrompt;

impl Prompt for WindowPrompt {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            log::warn!("no window available, declining click");
            return false;
        };

        match window.confirm_with_message(message) {
            Ok(accepted) => accepted,
            Err(e) => {
                log::warn!("confirm prompt failed, declining click: {:?}", e);
                false
            }
        }
    }
}

impl Cancelable for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }

    fn stop_immediate_propagation(&self) {
        Event::stop_immediate_propagation(self);
    }
}

/// A confirmation guard attached to one element. The listener is removed
/// when the binding is dropped, unless it was forgotten.
pub struct Binding {
    target: EventTarget,
    message: ConfirmMessage,
    listener: Option<Closure<dyn FnMut(Event)>>,
}

impl Binding {
    pub fn message(&self) -> &ConfirmMessage {
        &self.message
    }

    pub fn target(&self) -> &EventTarget {
        &self.target
    }

    /// Detach the guard now.
    pub fn unbind(mut self) {
        self.detach();
    }

    /// Keep the guard attached for the lifetime of the page.
    pub fn forget(mut self) {
        if let Some(listener) = self.listener.take() {
            listener.forget();
        }
    }

    fn detach(&mut self) {
        if let Some(listener) = self.listener.take() {
            let removed = self.target.remove_event_listener_with_callback_and_bool(
                CLICK,
                listener.as_ref().unchecked_ref(),
                true,
            );
            match removed {
                Ok(()) => log::debug!("unbound confirm guard: {}", self.message),
                Err(e) => log::warn!("failed to unbind confirm guard: {:?}", e),
            }
        }
    }
}

impl Drop for Binding {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Attach a confirmation prompt to clicks on `target`.
///
/// The listener runs in the capture phase, so it sees the click before any
/// bubble-phase handler on the target or its ancestors. Capture listeners on
/// ancestors, and ones registered earlier on the same element, still run first.
pub fn bind(target: &EventTarget, message: Option<String>) -> Result<Binding, JsValue> {
    bind_guard(target, ConfirmGuard::new(message))
}

pub fn bind_guard(target: &EventTarget, guard: ConfirmGuard) -> Result<Binding, JsValue> {
    let message = guard.message().clone();

    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        guard.intercept(&WindowPrompt, &event);
    });

    let options = AddEventListenerOptions::new();
    options.set_capture(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        CLICK,
        listener.as_ref().unchecked_ref(),
        &options,
    )?;

    if message.is_default() {
        log::debug!("bound confirm guard with default message");
    } else {
        log::debug!("bound confirm guard: {}", message);
    }

    Ok(Binding {
        target: target.clone(),
        message,
        listener: Some(listener),
    })
}

/// Attach a confirmation prompt to every element matching `selector`, in
/// document order. No match yields an empty list.
pub fn bind_selector(selector: &str, message: Option<String>) -> Result<Vec<Binding>, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let nodes = document.query_selector_all(selector)?;
    let guard = ConfirmGuard::new(message);

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .map(|node| bind_guard(node.as_ref(), guard.clone()))
        .collect()
}
