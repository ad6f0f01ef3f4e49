#![cfg(target_arch = "wasm32")]
use std::rc::Rc;

use leptos::*;
use order_config_wasm::app::App;
use order_config_wasm::application::OrderSubmission;
use order_config_wasm::config::AppConfig;
use order_config_wasm::domain::market_data::Symbol;
use order_config_wasm::infrastructure::AnalysisHttpClient;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn page_renders_three_slot_pickers() {
    let client = Rc::new(AnalysisHttpClient::new(AppConfig::default()));
    let submission = Rc::new(OrderSubmission::new(client));
    mount_to_body(move || view! { <App submission=submission ticker=Symbol::from("AAPL") /> });

    let document = document();
    let count = |selector: &str| document.query_selector_all(selector).unwrap().length();
    assert_eq!(count(".slot"), 3);
    assert_eq!(count(".slot select"), 6);
    // action pickers wait for an indicator
    assert_eq!(count(".slot select[disabled]"), 3);
    assert_eq!(count("#order-area"), 1);
}
