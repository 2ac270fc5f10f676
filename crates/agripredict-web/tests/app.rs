//! Browser smoke tests (run with `wasm-pack test --headless` or trunk's
//! wasm-bindgen-test runner)

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn body_html() -> String {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .map(|body| body.inner_html())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn mounts_landing_page_in_standby() {
    leptos::mount::mount_to_body(agripredict_web::App);

    let html = body_html();
    assert!(html.contains("AGRIPREDICT SYSTEMS"));
    // Idle placeholder and the standby insight set render before any request
    assert!(html.contains("Awaiting system input for biometric analysis."));
    assert!(html.contains("Soil Analysis"));
    assert!(html.contains("EXECUTE ANALYTIC MODEL"));
}
