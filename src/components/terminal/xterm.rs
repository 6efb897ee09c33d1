//! Bindings to xterm.js and the browser-side collaborators of the core.
//!
//! xterm.js and its addons are loaded as globals by `index.html`.

use wasm_bindgen::prelude::*;

use crate::core::error::FetchError;
use crate::core::{FetchedImage, Platform, Terminal};
use crate::utils::{dom, fetch_image};

#[wasm_bindgen]
extern "C" {
    /// The xterm.js `Terminal` widget.
    #[wasm_bindgen(js_name = Terminal)]
    #[derive(Clone)]
    pub type XTerm;

    #[wasm_bindgen(constructor, js_class = Terminal)]
    pub fn new(options: &JsValue) -> XTerm;

    #[wasm_bindgen(method)]
    pub fn open(this: &XTerm, parent: &web_sys::HtmlElement);

    #[wasm_bindgen(method)]
    pub fn write(this: &XTerm, data: &str);

    #[wasm_bindgen(method)]
    pub fn clear(this: &XTerm);

    #[wasm_bindgen(method)]
    pub fn focus(this: &XTerm);

    #[wasm_bindgen(method)]
    pub fn resize(this: &XTerm, cols: u16, rows: u16);

    #[wasm_bindgen(method, js_name = loadAddon)]
    pub fn load_addon(this: &XTerm, addon: &JsValue);

    #[wasm_bindgen(method, js_name = onData)]
    pub fn on_data(this: &XTerm, listener: &Closure<dyn FnMut(String)>) -> JsValue;

    #[wasm_bindgen(method, js_name = onKey)]
    pub fn on_key(this: &XTerm, listener: &Closure<dyn FnMut(KeyPayload)>) -> JsValue;

    /// Argument of the `onKey` listener.
    pub type KeyPayload;

    #[wasm_bindgen(method, getter, js_name = domEvent)]
    pub fn dom_event(this: &KeyPayload) -> web_sys::KeyboardEvent;

    #[wasm_bindgen(js_namespace = FitAddon, js_name = FitAddon)]
    pub type JsFitAddon;

    #[wasm_bindgen(constructor, js_namespace = FitAddon, js_class = "FitAddon")]
    pub fn new() -> JsFitAddon;

    #[wasm_bindgen(method)]
    pub fn fit(this: &JsFitAddon);

    #[wasm_bindgen(js_namespace = ImageAddon, js_name = ImageAddon)]
    pub type JsImageAddon;

    #[wasm_bindgen(constructor, js_namespace = ImageAddon, js_class = "ImageAddon")]
    pub fn new() -> JsImageAddon;

    #[wasm_bindgen(js_namespace = WebLinksAddon, js_name = WebLinksAddon)]
    pub type JsWebLinksAddon;

    #[wasm_bindgen(constructor, js_namespace = WebLinksAddon, js_class = "WebLinksAddon")]
    pub fn new() -> JsWebLinksAddon;
}

/// [`Terminal`] backed by an xterm.js instance.
#[derive(Clone)]
pub struct XTermTransport {
    term: XTerm,
}

impl XTermTransport {
    pub fn new(term: XTerm) -> Self {
        Self { term }
    }
}

impl Terminal for XTermTransport {
    fn write(&self, text: &str) {
        self.term.write(text);
    }

    fn clear(&self) {
        self.term.clear();
    }

    fn resize(&self, cols: u16, rows: u16) {
        self.term.resize(cols, rows);
    }
}

/// [`Platform`] backed by the browser window.
#[derive(Clone, Copy, Default)]
pub struct BrowserPlatform;

impl Platform for BrowserPlatform {
    fn open_url(&self, url: &str) {
        dom::open_in_new_tab(url);
    }

    fn reload(&self) {
        dom::reload();
    }

    async fn fetch_image(&self, url: &str) -> Result<FetchedImage, FetchError> {
        fetch_image(url).await
    }

    // Native paste reaches the terminal as a data chunk.
    async fn read_clipboard(&self) -> Option<String> {
        log::debug!("clipboard read not supported");
        None
    }
}
