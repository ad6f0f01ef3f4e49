//! Browser-facing adapters: HTTP via gloo-net, console logging, clock, page config.

pub mod http;
pub mod services;

pub use http::AnalysisHttpClient;
