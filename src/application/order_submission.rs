use std::cell::Cell;
use std::rc::Rc;

use crate::domain::{
    errors::AppError,
    logging::{LogComponent, LogLevel, get_logger},
    market_data::{AnalysisGateway, AnalysisSnapshot, OrderDetails},
    order_form::{SelectionSet, build_request_payload},
};
use crate::{log_debug, log_error};

/// Result of one "Place Order" click
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// First result rendered; `results` is the whole response array
    Rendered { details: OrderDetails, results: Vec<AnalysisSnapshot> },
    Failed(AppError),
    /// Another submission was still pending
    Skipped,
}

/// Sends the selection to `/analyze`, one request at a time.
pub struct OrderSubmission<G> {
    gateway: Rc<G>,
    in_flight: Cell<bool>,
}

/// Clears the in-flight flag however the request ends
struct InFlightGuard<'a>(&'a Cell<bool>);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<G: AnalysisGateway> OrderSubmission<G> {
    pub fn new(gateway: Rc<G>) -> Self {
        Self { gateway, in_flight: Cell::new(false) }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    pub async fn submit(&self, selection: &SelectionSet) -> SubmitOutcome {
        if self.in_flight.replace(true) {
            log_debug!(LogComponent::Application("OrderSubmission"), "submission already pending");
            return SubmitOutcome::Skipped;
        }
        let _guard = InFlightGuard(&self.in_flight);

        log_debug!(
            LogComponent::Application("OrderSubmission"),
            "User Selections: {:?}",
            selection.summary_lines()
        );
        let request = build_request_payload(selection);

        let results = match self.gateway.analyze(&request).await {
            Ok(results) => results,
            Err(err) => {
                log_error!(
                    LogComponent::Application("OrderSubmission"),
                    "There was a problem with the fetch operation: {}",
                    err
                );
                return SubmitOutcome::Failed(err);
            }
        };

        let Some(first) = results.first() else {
            log_error!(
                LogComponent::Application("OrderSubmission"),
                "There was a problem with the fetch operation: {}",
                AppError::EmptyResponse
            );
            return SubmitOutcome::Failed(AppError::EmptyResponse);
        };

        let details = OrderDetails::from_snapshot(first);
        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Application("OrderSubmission"),
            "📊 Order details updated",
            &details.price,
        );

        SubmitOutcome::Rendered { details, results }
    }
}

/// Render state of the order area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBoard {
    pub area_visible: bool,
    pub details: Option<OrderDetails>,
    /// Every successful response, oldest first; lives as long as the page
    pub history: Vec<Vec<AnalysisSnapshot>>,
}

impl OrderBoard {
    /// The order area is revealed by the click itself, before any response.
    pub fn reveal(&mut self) {
        self.area_visible = true;
    }

    /// Only a rendered outcome touches the detail fields.
    pub fn apply(&mut self, outcome: &SubmitOutcome) {
        if let SubmitOutcome::Rendered { details, results } = outcome {
            self.details = Some(details.clone());
            self.history.push(results.clone());
        }
    }
}
