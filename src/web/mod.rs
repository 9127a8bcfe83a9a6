//! Browser glue: storage, address bar, clipboard, notifications and the
//! shared DOM helpers used by both views.
//!
//! Each view keeps its state in a thread-local and re-renders its root
//! element after every handled event. Listeners are attached once to the
//! root and dispatch on `data-*` attributes, so re-rendering never has to
//! re-register closures.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window, window};

use crate::config::{AppConfig, View};
use crate::tracker::{KeyValueStore, ShareLocation};
use crate::{Error, Result};

mod fish_view;
mod fossil_view;

const STYLE_ID: &str = "ia-style";
const STYLE: &str = "\
.ia-table { border-collapse: collapse; font-size: 14px; }\
.ia-table th, .ia-table td { padding: 2px 8px; border-bottom: 1px solid #ddd; text-align: left; }\
.ia-table th[data-filtered='true']::after { content: ' \\25BE'; color: #0078d4; }\
.ia-filters { display: flex; flex-wrap: wrap; gap: 4px; margin: 4px 0; }\
.ia-filters button[aria-pressed='true'] { background: #0078d4; color: #fff; }\
.ia-row-mine-only, .ia-row-theirs-only { background: #3a96ddaa; }\
.ia-not-owned { color: #d13438; font-weight: bold; }\
.ia-owned { color: #00a88f; font-weight: bold; }\
.ia-field { display: flex; gap: 8px; align-items: end; margin: 4px 0; }";

/// Mounts the configured view into `config.root_id`.
pub fn start(config: &AppConfig) -> Result<()> {
    let doc = document()?;
    let root = doc
        .get_element_by_id(&config.root_id)
        .ok_or_else(|| Error::Dom(format!("no element #{}", config.root_id)))?;
    install_style(&doc)?;
    match config.view {
        View::Fish => fish_view::mount(&root, config),
        View::Fossil => fossil_view::mount(&root, config),
    }
}

fn browser_window() -> Result<Window> {
    window().ok_or_else(|| Error::Dom("no window".into()))
}

fn document() -> Result<Document> {
    browser_window()?
        .document()
        .ok_or_else(|| Error::Dom("no document".into()))
}

fn install_style(doc: &Document) -> Result<()> {
    if doc.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = doc
        .head()
        .ok_or_else(|| Error::Dom("no <head>".into()))?;
    let style = element(doc, "style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(STYLE));
    head.append_child(&style)
        .map_err(|e| Error::from_js(Error::Dom, &e))?;
    Ok(())
}

/// `document.createElement(tag)`.
fn element(doc: &Document, tag: &str) -> Result<Element> {
    doc.create_element(tag)
        .map_err(|e| Error::from_js(Error::Dom, &e))
}

/// Creates `<tag>` with text content and appends it to `parent`.
fn append_text(doc: &Document, parent: &Element, tag: &str, text: &str) -> Result<Element> {
    let el = element(doc, tag)?;
    el.set_text_content(Some(text));
    append(parent, &el)?;
    Ok(el)
}

fn append(parent: &Element, child: &Element) -> Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| Error::from_js(Error::Dom, &e))
}

fn set_attr(el: &Element, name: &str, value: &str) -> Result<()> {
    el.set_attribute(name, value)
        .map_err(|e| Error::from_js(Error::Dom, &e))
}

/// Nearest element (the target or an ancestor) carrying `attr`, and the attribute value.
fn event_attr(event: &web_sys::Event, attr: &str) -> Option<(Element, String)> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let found = target.closest(&format!("[{attr}]")).ok()??;
    let value = found.get_attribute(attr)?;
    Some((found, value))
}

/// Registers `handler` for `event` on `root` for the life of the page.
fn listen(root: &Element, event: &str, handler: impl FnMut(web_sys::Event) + 'static) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    root.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| Error::from_js(Error::Dom, &e))?;
    closure.forget();
    Ok(())
}

/// Blocking user notification.
fn notify(message: &str) {
    match browser_window().and_then(|w| {
        w.alert_with_message(message)
            .map_err(|e| Error::from_js(Error::Dom, &e))
    }) {
        Ok(()) => {}
        Err(err) => log::error!("could not show notification {message:?}: {err}"),
    }
}

/// Writes `text` to the clipboard; `done` runs once the browser settles the write.
fn copy_to_clipboard(text: &str, done: impl FnOnce(Result<()>) + 'static) -> Result<()> {
    let navigator = browser_window()?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| Error::from_js(Error::Clipboard, &e))?;
    if clipboard.is_undefined() {
        return Err(Error::Clipboard("clipboard is unavailable".into()));
    }
    let write_text: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .and_then(|f| f.dyn_into())
            .map_err(|e| Error::from_js(Error::Clipboard, &e))?;
    let promise: js_sys::Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .and_then(|p| p.dyn_into())
        .map_err(|e| Error::from_js(Error::Clipboard, &e))?;

    let done = std::rc::Rc::new(std::cell::RefCell::new(Some(done)));
    let done_err = done.clone();
    let on_ok = Closure::once(move |_: JsValue| {
        if let Some(f) = done.borrow_mut().take() {
            f(Ok(()));
        }
    });
    let on_err = Closure::once(move |e: JsValue| {
        if let Some(f) = done_err.borrow_mut().take() {
            f(Err(Error::from_js(Error::Clipboard, &e)));
        }
    });
    let _ = promise.then2(&on_ok, &on_err);
    on_ok.forget();
    on_err.forget();
    Ok(())
}

/// `window.localStorage`.
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn open() -> Result<Self> {
        let storage = browser_window()?
            .local_storage()
            .map_err(|e| Error::from_js(Error::Storage, &e))?
            .ok_or_else(|| Error::Storage("localStorage is unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| Error::from_js(Error::Storage, &e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| Error::from_js(Error::Storage, &e))
    }
}

/// `window.location`, rewritten through `history.replaceState`.
pub struct BrowserLocation {
    window: Window,
}

impl BrowserLocation {
    pub fn current() -> Result<Self> {
        Ok(Self {
            window: browser_window()?,
        })
    }

    fn read(&self, part: fn(&web_sys::Location) -> std::result::Result<String, JsValue>) -> String {
        match part(&self.window.location()) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("could not read location: {}", Error::from_js(Error::Dom, &e));
                String::new()
            }
        }
    }
}

impl ShareLocation for BrowserLocation {
    fn origin(&self) -> String {
        self.read(web_sys::Location::origin)
    }

    fn path(&self) -> String {
        self.read(web_sys::Location::pathname)
    }

    fn query(&self) -> String {
        self.read(web_sys::Location::search)
    }

    fn replace_query(&mut self, query: &str) -> Result<()> {
        let url = format!("{}{}{}", self.path(), query, self.read(web_sys::Location::hash));
        self.window
            .history()
            .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(url.as_str())))
            .map_err(|e| Error::from_js(Error::Dom, &e))
    }
}
