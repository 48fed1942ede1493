use std::panic;
use leptos::logging::{error, log};

/// Logs a tagged line for each panic, then hands over to
/// `console_error_panic_hook` so the browser console keeps the full report.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        error!("[PANIC] {}", message);
        if message.contains("OwnerDisposed") {
            log!("[PANIC] A signal was touched after its component was unmounted.");
            log!("[PANIC] Check async review submissions that outlive the attraction list.");
        }

        console_error_panic_hook::hook(panic_info);
    }));
}

/// Call once from the client entry point.
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}
