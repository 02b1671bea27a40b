//! Logging facilities for numask.
//!
//! numask uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see the logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("numask::gate=debug")
//!     .init();
//! ```
//!
//! Rejected edits are logged at `debug`, every gate decision at `trace`, and
//! edits with malformed selection offsets at `warn`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "numask_core";
    /// Edit gate decisions.
    pub const GATE: &str = "numask::gate";
    /// Masked field wrapper.
    pub const FIELD: &str = "numask::field";
    /// Configuration loading.
    pub const CONFIG: &str = "numask::config";
}

/// Wrapper around `tracing::trace!` with the core crate's target.
#[macro_export]
macro_rules! numask_trace {
    ($($arg:tt)*) => {
        $crate::__tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_targets_share_prefix() {
        let all = [targets::CORE, targets::GATE, targets::FIELD, targets::CONFIG];
        for target in all {
            assert!(target.starts_with("numask"), "{target}");
        }
        assert_eq!(targets::CORE, module_path!().split("::").next().unwrap());
    }

    #[test]
    fn test_trace_macro_expands() {
        let input = "1.5";
        crate::numask_trace!(input, "logging smoke check");
        crate::numask_trace!("no fields");
    }
}
