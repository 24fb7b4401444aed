mod web_app;

pub use web_app::{current_config, ShowcaseEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::logging::log!("mounting component showcase");
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
