//! Lab project carousel: a rotating 3D tile ring with a grid fallback and a
//! lightbox, compiled to WebAssembly.
//!
//! `core` is plain Rust and builds on any target so the interaction logic
//! can be tested on the host. Everything else talks to the DOM and only
//! exists on `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod announce;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod lightbox;
#[cfg(target_arch = "wasm32")]
mod motion;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod widget;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::widget::Widget;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys as web;

    /// Element id the widget mounts into on page load.
    const DEFAULT_MOUNT_ID: &str = "lab-root";

    thread_local! {
        static AUTO_MOUNTED: RefCell<Option<Rc<Widget>>> = const { RefCell::new(None) };
    }

    /// Handle returned to JavaScript for an explicitly mounted widget.
    #[wasm_bindgen]
    pub struct LabHandle {
        widget: Option<Rc<Widget>>,
    }

    #[wasm_bindgen]
    impl LabHandle {
        /// Stop the animation, remove all listeners and the widget's DOM.
        pub fn unmount(&mut self) {
            if let Some(w) = self.widget.take() {
                w.unmount();
            }
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("lab-carousel starting");

        match init(DEFAULT_MOUNT_ID) {
            Ok(Some(widget)) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(widget)),
            Ok(None) => log::info!("no #{} element; waiting for mountLab()", DEFAULT_MOUNT_ID),
            Err(e) => log::error!("init error: {:?}", e),
        }
        Ok(())
    }

    /// Mount a carousel into the element with the given id.
    #[wasm_bindgen(js_name = mountLab)]
    pub fn mount_lab(element_id: &str) -> Result<LabHandle, JsValue> {
        match init(element_id) {
            Ok(Some(widget)) => Ok(LabHandle {
                widget: Some(widget),
            }),
            Ok(None) => Err(JsValue::from_str(&format!("missing #{}", element_id))),
            Err(e) => Err(JsValue::from_str(&format!("{:?}", e))),
        }
    }

    fn init(element_id: &str) -> anyhow::Result<Option<Rc<Widget>>> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let Some(mount) = document.get_element_by_id(element_id) else {
            return Ok(None);
        };
        Widget::mount(&window, mount).map(Some)
    }
}
