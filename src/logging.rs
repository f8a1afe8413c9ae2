//! Logging Setup
//!
//! Installs the rolling logger with a browser console sink, and a panic hook
//! that replays the buffered lines after the panic message.

use log::{Level, LevelFilter};
use rolling_logger::{LoggerConfig, RollingLogger};

/// Lines kept for the panic report
const CAPACITY: usize = 500;

fn console_sink(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

pub fn init(level: LevelFilter) -> Option<&'static RollingLogger> {
    let config = LoggerConfig {
        level,
        capacity: CAPACITY,
        sink: Some(console_sink),
    };
    match rolling_logger::init(config) {
        Ok(logger) => Some(logger),
        Err(_) => {
            web_sys::console::warn_1(&"[APP] logger already installed".into());
            None
        }
    }
}

/// Report panics to the console, followed by the recent log history
pub fn install_panic_hook(logger: Option<&'static RollingLogger>) {
    std::panic::set_hook(Box::new(move |info| {
        console_error_panic_hook::hook(info);
        let Some(logger) = logger else { return };
        let recent = logger.recent();
        web_sys::console::error_1(&format!("[APP] last {} log lines before the panic:", recent.len()).into());
        web_sys::console::error_1(&recent.join("\n").into());
    }));
}
