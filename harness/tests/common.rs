#![allow(dead_code)]

use routebench::{telemetry, BenchRequest, DynContender, ResponseRecorder};
use std::sync::Once;

static LOGGER: Once = Once::new();

pub fn init() {
    LOGGER.call_once(|| {
        telemetry::init_telemetry().expect("Failed to set subscriber");
    });
}

/// Dispatches `req` and keeps whatever the router wrote.
pub async fn dispatch(router: &DynContender, req: &BenchRequest) -> ResponseRecorder {
    let mut recorder = ResponseRecorder::new();
    let status = router.serve(req, &mut recorder).await;
    assert_eq!(status, recorder.status(), "returned and written status differ");
    recorder
}

pub async fn get(router: &DynContender, path: &str) -> anyhow::Result<ResponseRecorder> {
    let req = BenchRequest::get(path)?;
    Ok(dispatch(router, &req).await)
}
