use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("site_behavior=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("site_behavior=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Browser logger: same fmt layer, written to `console.log`.
///
/// There is no clock or terminal in the page, so timestamps and ANSI colors are off.
#[cfg(target_arch = "wasm32")]
pub fn init_browser_logger() {
    let filter = EnvFilter::new("site_behavior=debug");

    // A second call (hot reload) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .without_time()
                .with_writer(|| ConsoleWriter)
                .compact(),
        )
        .try_init();
}

#[cfg(target_arch = "wasm32")]
struct ConsoleWriter;

#[cfg(target_arch = "wasm32")]
impl std::io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let line = String::from_utf8_lossy(buf);
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line.trim_end()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
