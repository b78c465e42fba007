//! Log backend setup.
//!
//! On Android, `log` records go to logcat through `android_logger`. Elsewhere
//! no backend is installed and the macros are no-ops.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the log backend. Safe to call any number of times.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(target_os = "android")]
        android_logger::init_once(
            android_logger::Config::default()
                .with_tag(crate::binding::LOG_TAG)
                .with_max_level(log::LevelFilter::Info),
        );
    });
}

/// Whether [`init`] has run.
pub fn is_initialized() -> bool {
    INIT.is_completed()
}
