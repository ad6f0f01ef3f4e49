use std::fmt::Debug;

use super::entities::SelectionSet;
use super::value_objects::{Action, Indicator, SlotId};
use crate::domain::errors::SelectionError;
use crate::domain::logging::get_time_provider;

pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;

    fn timestamp(&self) -> u64 {
        get_time_provider().current_timestamp()
    }
}

/// Change events raised by the slot pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFormEvent {
    IndicatorChanged { slot: SlotId, indicator: Indicator },
    ActionChanged { slot: SlotId, action: Action },
}

impl DomainEvent for OrderFormEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderFormEvent::IndicatorChanged { .. } => "IndicatorChanged",
            OrderFormEvent::ActionChanged { .. } => "ActionChanged",
        }
    }
}

impl OrderFormEvent {
    pub fn slot(&self) -> SlotId {
        match *self {
            OrderFormEvent::IndicatorChanged { slot, .. } | OrderFormEvent::ActionChanged { slot, .. } => {
                slot
            }
        }
    }
}

/// Pure transition: the next selection set after `event`.
pub fn reduce(selection: &SelectionSet, event: OrderFormEvent) -> Result<SelectionSet, SelectionError> {
    match event {
        OrderFormEvent::IndicatorChanged { slot, indicator } => {
            selection.with_indicator(slot, indicator)
        }
        OrderFormEvent::ActionChanged { slot, action } => selection.with_action(slot, action),
    }
}
