//! Binary entrypoint for the browser-hosted showcase site.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Serve `crates/site/index.html` with trunk, or build `site_app` for wasm32 with the `csr` feature."
    );
}
