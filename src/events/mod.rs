pub mod keyboard;
pub mod pointer;

pub use keyboard::{handle_lightbox_keydown, handle_ring_keydown, LightboxKey};
pub use pointer::{wire_input_handlers, InputWiring};
