//! Logging macros for formalgraph
//!
//! Edge code never depends on a subscriber being present. Natively the macros
//! emit `tracing` events (see [`crate::init`]); in a browser build they print
//! to the console instead.

/// Startup and configuration messages, e.g. the subscriber being installed
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::__private::web_sys::console::log_1(&format!($($arg)*).into());

        #[cfg(not(target_arch = "wasm32"))]
        $crate::__private::tracing::info!($($arg)*);
    }};
}

/// Recoverable configuration problems, such as falling back to defaults
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());

        #[cfg(not(target_arch = "wasm32"))]
        $crate::__private::tracing::warn!($($arg)*);
    }};
}

/// Edge contract violations: rejected constructions, shorthands and accessor misuse
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());

        #[cfg(not(target_arch = "wasm32"))]
        $crate::__private::tracing::debug!($($arg)*);
    }};
}

/// Environment overrides applied while loading the configuration
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::__private::web_sys::console::log_1(&format!("TRACE: {}", format!($($arg)*)).into());

        #[cfg(not(target_arch = "wasm32"))]
        $crate::__private::tracing::trace!($($arg)*);
    }};
}
