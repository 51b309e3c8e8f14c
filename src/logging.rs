/// Conditional logging module for development builds
///
/// The `log!` macro provides debug logging that is compiled out of release
/// builds by default. Warnings and errors go through `log::warn!` and
/// `log::error!` directly so they are always available.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `verbose_logging` feature is explicitly enabled
///
/// Nothing is printed unless the embedding application installs a logger
/// (`env_logger`, for example).
///
/// # Examples
///
/// ```rust
/// let station = "강남역";
/// subway_path::log!("Registered station {}", station);
/// ```
/// Conditionally log at debug level in development builds
///
/// Expands to `log::debug!` in debug builds or when the `verbose_logging`
/// feature is enabled. In production release builds it compiles to nothing.
#[macro_export]
macro_rules! log {
    ($($arg:tt)+) => {
        #[cfg(any(debug_assertions, feature = "verbose_logging"))]
        {
            ::log::debug!($($arg)+);
        }
    };
}
