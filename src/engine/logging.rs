//! Logging setup. Library code only uses the `log` macros; the embedding
//! application decides whether to install `env_logger` through these helpers.

/// Install `env_logger`, honouring `RUST_LOG`.
pub fn init() {
    env_logger::init();
}

/// Like [`init`], but does nothing if a logger is already installed.
pub fn try_init() -> bool {
    env_logger::try_init().is_ok()
}

/// Test logger: output goes through the test harness capture, and repeated
/// calls from several tests are harmless.
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
