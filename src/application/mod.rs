pub mod market_poller;
pub mod order_submission;

pub use market_poller::*;
pub use order_submission::*;
