use std::rc::Rc;

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::application::{MarketPoller, OrderSubmission};
use crate::domain::logging::{self, LogComponent, get_logger};
use crate::infrastructure::{AnalysisHttpClient, services};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;

/// Installs the panic hook, console logger and browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        services::ConsoleLogger::new_development()
    } else {
        services::ConsoleLogger::new_production()
    };
    logging::init_logger(Box::new(console_logger));
    logging::init_time_provider(Box::new(services::BrowserTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Order form runtime initialized");
}

/// Mounts the order form and starts the market poll. Called once by the host page.
#[wasm_bindgen]
pub fn mount() {
    let config = services::config_from_location();
    get_logger().info(
        LogComponent::Presentation("Mount"),
        &format!("🔌 Backend {} • ticker {}", config.api_base_url, config.ticker),
    );

    let gateway = Rc::new(AnalysisHttpClient::new(config.clone()));

    MarketPoller::new(gateway.clone(), config.ticker.clone(), config.poll_interval)
        .start(|result| match result {
            Ok(quote) => global_state::current_price().set(Some(quote.current_price)),
            Err(err) => log_warn!(LogComponent::Presentation("MarketPoller"), "📉 {}", err),
        })
        .forget();

    let submission = Rc::new(OrderSubmission::new(gateway));
    let ticker = config.ticker;
    mount_to_body(move || view! { <App submission=submission.clone() ticker=ticker.clone() /> });
}
