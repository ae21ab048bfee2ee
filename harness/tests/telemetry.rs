use routebench::telemetry;
use tokio_test::assert_ok;
use tracing::Level;

// Runs alone in this binary so nothing else has installed a subscriber first.
#[test]
fn quiet_silences_everything_and_wins() {
    assert_ok!(telemetry::init_quiet());
    assert!(!tracing::enabled!(Level::ERROR));

    assert_ok!(telemetry::init_quiet());
    assert_ok!(telemetry::init_telemetry());

    assert!(!tracing::enabled!(Level::ERROR));
    assert!(!tracing::enabled!(Level::TRACE));
}
