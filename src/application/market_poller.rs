use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use crate::domain::{
    errors::NetworkResult,
    logging::LogComponent,
    market_data::{AnalysisGateway, MarketQuote, Symbol},
};
use crate::log_debug;

/// Fetches the market quote on a fixed period.
///
/// Each tick starts its own request; a slow response does not delay or
/// suppress the next one.
pub struct MarketPoller<G> {
    gateway: Rc<G>,
    symbol: Symbol,
    period: Duration,
}

/// Running poll loop. Dropping it stops the interval, `forget` keeps it for the page lifetime.
pub struct PollHandle {
    interval: Interval,
    ticks: Rc<Cell<u64>>,
}

impl PollHandle {
    pub fn ticks(&self) -> u64 {
        self.ticks.get()
    }

    pub fn forget(self) {
        let _ = self.interval.forget();
    }
}

impl<G: AnalysisGateway + 'static> MarketPoller<G> {
    pub fn new(gateway: Rc<G>, symbol: Symbol, period: Duration) -> Self {
        Self { gateway, symbol, period }
    }

    pub fn start<F>(self, on_result: F) -> PollHandle
    where
        F: Fn(NetworkResult<MarketQuote>) + 'static,
    {
        let ticks = Rc::new(Cell::new(0u64));
        let on_result = Rc::new(on_result);
        let millis = u32::try_from(self.period.as_millis()).unwrap_or(u32::MAX);

        let tick_count = ticks.clone();
        let interval = Interval::new(millis, move || {
            tick_count.set(tick_count.get() + 1);
            log_debug!(
                LogComponent::Application("MarketPoller"),
                "tick {} for {}",
                tick_count.get(),
                self.symbol
            );

            let gateway = self.gateway.clone();
            let symbol = self.symbol.clone();
            let on_result = on_result.clone();
            spawn_local(async move {
                on_result(gateway.bollinger_bands(&symbol).await);
            });
        });

        PollHandle { interval, ticks }
    }
}
