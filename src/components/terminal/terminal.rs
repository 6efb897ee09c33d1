//! Terminal view component.
//!
//! Mounts xterm.js, forwards its callbacks into a single event channel and
//! drives a [`Session`] from that channel.

use futures::channel::mpsc::{self, UnboundedSender};
use leptos::ev;
use leptos::prelude::*;
use leptos_use::{use_debounce_fn, use_event_listener, use_window};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::xterm::{
    BrowserPlatform, JsFitAddon, JsImageAddon, JsWebLinksAddon, KeyPayload, XTerm,
    XTermTransport,
};
use crate::config::{RESIZE_DEBOUNCE_MS, TerminalOptions};
use crate::core::{Session, Terminal, output};
use crate::models::{Key, KeyEvent, Mark, TerminalEvent};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Event Forwarding
// ============================================================================

fn send(tx: &UnboundedSender<TerminalEvent>, event: TerminalEvent) {
    if tx.unbounded_send(event).is_err() {
        log::warn!("terminal session is gone; dropping event");
    }
}

fn send_viewport_grid(tx: &UnboundedSender<TerminalEvent>) {
    if let Some((cols, rows)) = dom::viewport_grid() {
        send(tx, TerminalEvent::Resize { cols, rows });
    }
}

/// Subscribe to xterm's data and key callbacks.
///
/// The listeners live as long as the page, so their closures are leaked.
fn forward_input(term: &XTerm, tx: &UnboundedSender<TerminalEvent>) {
    let data_tx = tx.clone();
    let on_data = Closure::<dyn FnMut(String)>::new(move |chunk: String| {
        send(&data_tx, TerminalEvent::Data(chunk));
    });
    term.on_data(&on_data);
    on_data.forget();

    let key_tx = tx.clone();
    let on_key = Closure::<dyn FnMut(KeyPayload)>::new(move |payload: KeyPayload| {
        let dom_event = payload.dom_event();
        let event = KeyEvent {
            key: Key::from_dom(&dom_event.key()),
            ctrl: dom_event.ctrl_key(),
        };
        send(&key_tx, TerminalEvent::Key(event));
    });
    term.on_key(&on_key);
    on_key.forget();
}

/// Create the widget inside `parent` with the configured options.
fn create_xterm(parent: &web_sys::HtmlElement) -> Option<XTerm> {
    let options = match serde_wasm_bindgen::to_value(&TerminalOptions::load()) {
        Ok(options) => options,
        Err(e) => {
            log::error!("failed to convert terminal options: {e}");
            return None;
        }
    };

    let term = XTerm::new(&options);
    let fit = JsFitAddon::new();
    term.load_addon(&fit);
    term.load_addon(&JsImageAddon::new());
    term.load_addon(&JsWebLinksAddon::new());
    term.open(parent);
    fit.fit();
    term.focus();
    Some(term)
}

// ============================================================================
// Terminal Component
// ============================================================================

/// Full-window terminal.
#[component]
pub fn TerminalView() -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let (tx, rx) = mpsc::unbounded::<TerminalEvent>();

    let resize_tx = tx.clone();
    let on_resize = use_debounce_fn(move || send_viewport_grid(&resize_tx), RESIZE_DEBOUNCE_MS);
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        on_resize();
    });

    container.on_load(move |el| {
        let Some(term) = create_xterm(&el) else {
            return;
        };
        forward_input(&term, &tx);

        let transport = XTermTransport::new(term);
        let mut session = match Session::with_builtins(transport.clone(), BrowserPlatform) {
            Ok(session) => session,
            Err(e) => {
                log::error!("failed to register commands: {e}");
                transport.write(&output::mark(&e.to_string(), Mark::Error));
                return;
            }
        };
        spawn_local(async move { session.run(rx).await });
    });

    view! {
        <div class=css::container>
            <div node_ref=container class=css::viewport></div>
        </div>
    }
}
