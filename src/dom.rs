use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Elements reachable with Tab inside a container.
const FOCUSABLE: &str = "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Create an element with a class name, typed as `HtmlElement`.
pub fn el(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::HtmlElement> {
    let e = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        e.set_class_name(class);
    }
    e.dyn_into::<web::HtmlElement>().map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
pub fn set_attrs(el: &web::Element, attrs: &[(&str, &str)]) {
    for (name, value) in attrs {
        _ = el.set_attribute(name, value);
    }
}

#[inline]
pub fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent.append_child(child).map_err(js_err)?;
    Ok(())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, prop: &str) {
    _ = el.style().remove_property(prop);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

pub fn focusable_elements(container: &web::Element) -> Vec<web::HtmlElement> {
    let Ok(list) = container.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn active_html_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .active_element()
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

/// An event listener that is removed from its target when dropped.
///
/// Never drop a `Listener` from inside its own callback; route teardown
/// through `Widget::dispatch`, which runs after the handler returns.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E, F>(target: &web::EventTarget, event: &'static str, handler: F) -> Self
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        Self::register(target, event, handler, None)
    }

    /// Same as [`Listener::new`] but allows `preventDefault` on events the
    /// browser would otherwise register as passive (wheel, touch).
    pub fn new_active<E, F>(target: &web::EventTarget, event: &'static str, handler: F) -> Self
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        Self::register(target, event, handler, Some(opts))
    }

    fn register<E, F>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: F,
        opts: Option<web::AddEventListenerOptions>,
    ) -> Self
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let added = match &opts {
            Some(o) => target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                o,
            ),
            None => target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()),
        };
        if let Err(e) = added {
            log::warn!("[dom] addEventListener({}) failed: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
