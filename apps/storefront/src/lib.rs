//! Mason storefront.
//!
//! Client-side Leptos app: product browsing, service booking, order tracking
//! and the payment result pages.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod services;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let ctx = bootstrap();
    leptos::mount::hydrate_body(move || leptos::view! { <App ctx=ctx/> });
}

#[cfg(all(feature = "csr", not(feature = "hydrate")))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let ctx = bootstrap();
    leptos::mount::mount_to_body(move || leptos::view! { <App ctx=ctx/> });
}
