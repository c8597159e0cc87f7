pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, panics are
    // reported to the browser console instead of `unreachable executed`.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn set_tracing_subscriber() {
    // When the `tracing-wasm` feature is enabled, events are written to the
    // browser console. An embedder that installed its own subscriber first
    // keeps it.
    #[cfg(feature = "tracing-wasm")]
    let _ = tracing_wasm::try_set_as_global_default();
}
