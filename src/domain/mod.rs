//! Pure domain layer: no browser APIs are called from here.

pub mod errors;
pub mod logging;
pub mod market_data;
pub mod order_form;
