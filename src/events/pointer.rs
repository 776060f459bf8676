use crate::core::LabState;
use crate::dom::Listener;
use crate::frame::Clock;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    /// `.lab-root`: receives pointer, wheel, hover, focus and key events.
    pub root: web::HtmlElement,
    pub state: Rc<RefCell<LabState>>,
    pub clock: Clock,
}

/// Register every carousel input listener. The returned guards remove the
/// listeners when dropped (view switch or unmount).
pub fn wire_input_handlers(w: &InputWiring) -> Vec<Listener> {
    vec![
        wire_pointerdown(w),
        wire_pointermove(w),
        wire_pointer_end(w, "pointerup"),
        wire_pointer_end(w, "pointercancel"),
        wire_pointerenter(w),
        wire_pointerleave(w),
        wire_wheel(w),
        wire_focusin(w),
        wire_focusout(w),
        wire_keydown(w),
    ]
}

fn wire_pointerdown(w: &InputWiring) -> Listener {
    let w = w.clone();
    let root = w.root.clone();
    Listener::new(&root, "pointerdown", move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        w.state.borrow_mut().pointer_down(ev.client_x() as f64);
        // capture on the element under the pointer so the click still lands
        // on the tile button after release
        if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) {
            _ = target.set_pointer_capture(ev.pointer_id());
        }
        ev.prevent_default();
    })
}

fn wire_pointermove(w: &InputWiring) -> Listener {
    let w = w.clone();
    let root = w.root.clone();
    Listener::new(&root, "pointermove", move |ev: web::PointerEvent| {
        let mut st = w.state.borrow_mut();
        if st.dragging() {
            st.pointer_move(ev.client_x() as f64);
        }
    })
}

fn wire_pointer_end(w: &InputWiring, event: &'static str) -> Listener {
    let w = w.clone();
    let root = w.root.clone();
    Listener::new(&root, event, move |_: web::PointerEvent| {
        w.state.borrow_mut().pointer_up();
    })
}

fn wire_pointerenter(w: &InputWiring) -> Listener {
    let w = w.clone();
    let root = w.root.clone();
    Listener::new(&root, "pointerenter", move |_: web::PointerEvent| {
        w.state.borrow_mut().set_pointer_inside(true);
    })
}

fn wire_pointerleave(w: &InputWiring) -> Listener {
    let w = w.clone();
    let root = w.root.clone();
    Listener::new(&root, "pointerleave", move |_: web::PointerEvent| {
        w.state.borrow_mut().pointer_leave();
    })
}

fn wire_wheel(w: &InputWiring) -> Listener {
    let w = w.clone();
    let root = w.root.clone();
    Listener::new_active(&root, "wheel", move |ev: web::WheelEvent| {
        let now = w.clock.now_ms();
        if w.state.borrow_mut().wheel(ev.delta_x(), ev.delta_y(), now) {
            ev.prevent_default();
        }
    })
}

fn wire_focusin(w: &InputWiring) -> Listener {
    let w = w.clone();
    let root = w.root.clone();
    Listener::new(&root, "focusin", move |_: web::FocusEvent| {
        w.state.borrow_mut().set_focus_within(true);
    })
}

fn wire_focusout(w: &InputWiring) -> Listener {
    let w = w.clone();
    let root = w.root.clone();
    Listener::new(&root, "focusout", move |ev: web::FocusEvent| {
        let next = ev.related_target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let still_inside = next.is_some() && w.root.contains(next.as_ref());
        w.state.borrow_mut().set_focus_within(still_inside);
    })
}

fn wire_keydown(w: &InputWiring) -> Listener {
    let w = w.clone();
    let root = w.root.clone();
    Listener::new(&root, "keydown", move |ev: web::KeyboardEvent| {
        if super::handle_ring_keydown(&ev, &w.state, w.clock.now_ms()) {
            ev.prevent_default();
        }
    })
}
