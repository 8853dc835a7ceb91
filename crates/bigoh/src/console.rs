//! Console output wiring.

use bigoh_config::HarnessConfig;

/// Installs the colorful console layer using the configured log filter.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init(config: &HarnessConfig) {
    bigoh_console::init_with_filter(config.log_filter_or(bigoh_console::DEFAULT_FILTER));
}
