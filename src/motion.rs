use crate::dom::Listener;
use web_sys as web;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Live view of the OS reduced-motion preference.
///
/// Reads synchronously on creation, then calls `on_change` whenever the
/// media query flips. Dropping the sensor unsubscribes.
pub struct MotionSensor {
    query: Option<web::MediaQueryList>,
    _listener: Option<Listener>,
}

impl MotionSensor {
    pub fn new(window: &web::Window, on_change: impl Fn(bool) + 'static) -> Self {
        let query = match window.match_media(REDUCED_MOTION_QUERY) {
            Ok(q) => q,
            Err(e) => {
                log::warn!("[motion] matchMedia failed: {:?}", e);
                None
            }
        };
        let listener = query.as_ref().map(|q| {
            let q2 = q.clone();
            Listener::new(q, "change", move |_: web::Event| on_change(q2.matches()))
        });
        Self {
            query,
            _listener: listener,
        }
    }

    pub fn reduced(&self) -> bool {
        self.query.as_ref().map(|q| q.matches()).unwrap_or(false)
    }
}
