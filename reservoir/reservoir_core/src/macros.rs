//! Convenience macros.

/// Log a message at a [`LogLevel`](crate::utils::LogLevel) under a target.
///
/// Forwards to the `log` facade, so whatever logger the application installs
/// receives the record. The calling crate does not need its own `log`
/// dependency.
///
/// # Examples
///
/// ```
/// use reservoir_core::log_event;
/// use reservoir_core::utils::LogLevel;
///
/// log_event!(target: "reservoir", LogLevel::Debug, "{} resources", 3);
/// ```
#[macro_export]
macro_rules! log_event {
    (target: $target:expr, $level:expr, $($arg:tt)+) => {
        $crate::__log::log!(
            target: $target,
            $crate::utils::LogLevel::to_log_level($level),
            $($arg)+
        )
    };
}
