// Adapters layer: concrete implementations of the ports (live browser page, in-memory page).

pub mod headless;

#[cfg(target_arch = "wasm32")]
pub mod web;
