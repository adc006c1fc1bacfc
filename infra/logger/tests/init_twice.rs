use serial_test::serial;
use shop_logger::{LevelFilter, Logger, LoggerError};

#[test]
#[serial]
fn second_init_returns_subscriber_error() {
    let _logger = Logger::builder()
        .name("storefront-init-twice")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("storefront-init-twice-second")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "unexpected error: {err}");
}
