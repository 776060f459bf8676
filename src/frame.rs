use crate::core::DEFAULT_FRAME_MS;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic milliseconds since the widget was mounted.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    origin: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// The single requestAnimationFrame loop of a widget.
///
/// `on_frame` receives the elapsed milliseconds since the previous frame and
/// returns whether the loop should keep going. While stopped nothing is
/// scheduled at all.
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
    last_ts: Rc<Cell<Option<f64>>>,
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let last_ts = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let last_tick = last_ts.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            handle_tick.set(None);
            let dt = match last_tick.replace(Some(ts)) {
                Some(prev) => ts - prev,
                None => DEFAULT_FRAME_MS,
            };
            if on_frame(dt) {
                request(&tick_clone, &handle_tick);
            } else {
                last_tick.set(None);
            }
        }) as Box<dyn FnMut(f64)>));

        Self {
            tick,
            handle,
            last_ts,
        }
    }

    pub fn running(&self) -> bool {
        self.handle.get().is_some()
    }

    pub fn start(&self) {
        if self.running() {
            return;
        }
        self.last_ts.set(None);
        request(&self.tick, &self.handle);
        log::debug!("[frame] loop started");
    }

    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
            log::debug!("[frame] loop stopped");
        }
        self.last_ts.set(None);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // breaks the closure -> tick Rc cycle
        self.tick.borrow_mut().take();
    }
}

fn request(tick: &Tick, handle: &Rc<Cell<Option<i32>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => handle.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
        }
    }
}
