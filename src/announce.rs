use crate::core::ANNOUNCE_CLEAR_MS;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Polite ARIA live region that shows a message briefly, then clears.
pub struct Announcer {
    region: web::HtmlElement,
    timer: Rc<Cell<Option<i32>>>,
    clear: Closure<dyn FnMut()>,
}

impl Announcer {
    pub fn new(document: &web::Document, parent: &web::Node) -> anyhow::Result<Self> {
        let region = dom::el(document, "div", "lab-live sr-only")?;
        dom::set_attrs(&region, &[("role", "status"), ("aria-live", "polite")]);
        dom::append(parent, &region)?;

        let timer = Rc::new(Cell::new(None));
        let region_clear = region.clone();
        let timer_clear = timer.clone();
        let clear = Closure::wrap(Box::new(move || {
            timer_clear.set(None);
            region_clear.set_text_content(None);
        }) as Box<dyn FnMut()>);

        Ok(Self {
            region,
            timer,
            clear,
        })
    }

    pub fn announce(&self, text: &str) {
        self.cancel();
        self.region.set_text_content(Some(text));
        if let Some(w) = web::window() {
            match w.set_timeout_with_callback_and_timeout_and_arguments_0(
                self.clear.as_ref().unchecked_ref(),
                ANNOUNCE_CLEAR_MS,
            ) {
                Ok(id) => self.timer.set(Some(id)),
                Err(e) => log::debug!("[announce] setTimeout failed: {:?}", e),
            }
        }
    }

    fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.timer.take(), web::window()) {
            w.clear_timeout_with_handle(id);
        }
    }
}

impl Drop for Announcer {
    fn drop(&mut self) {
        self.cancel();
        self.region.remove();
    }
}
