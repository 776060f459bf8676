use crate::core::{next_trapped_focus, LabState};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Tiles to step for a key pressed while focus is inside the ring.
#[inline]
pub fn ring_step_for_key(key: &str) -> Option<i32> {
    match key {
        "ArrowRight" => Some(1),
        "ArrowLeft" => Some(-1),
        _ => None,
    }
}

/// Returns true if the key was consumed.
pub fn handle_ring_keydown(
    ev: &web::KeyboardEvent,
    state: &Rc<RefCell<LabState>>,
    now_ms: f64,
) -> bool {
    match ring_step_for_key(&ev.key()) {
        Some(step) => state.borrow_mut().step_tiles(step, now_ms),
        None => false,
    }
}

/// What the lightbox should do with a keydown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Trapped,
    Ignored,
}

pub fn handle_lightbox_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    dialog: &web::Element,
) -> LightboxKey {
    match ev.key().as_str() {
        "Escape" => LightboxKey::Close,
        "Tab" => {
            let focusables = dom::focusable_elements(dialog);
            let active = document.active_element();
            let current = active.as_ref().and_then(|a| {
                let a: &web::Node = a.as_ref();
                focusables.iter().position(|f| f.is_same_node(Some(a)))
            });
            match next_trapped_focus(focusables.len(), current, ev.shift_key()) {
                Some(i) => {
                    ev.prevent_default();
                    if let Some(target) = focusables.get(i) {
                        _ = target.focus();
                    }
                    LightboxKey::Trapped
                }
                None => LightboxKey::Ignored,
            }
        }
        _ => LightboxKey::Ignored,
    }
}
