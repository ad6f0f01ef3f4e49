use serde::Serialize;

use super::value_objects::{Action, Indicator, SlotId};
use crate::domain::errors::SelectionError;
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Lifecycle of a single slot. There is no way back to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    IndicatorChosen,
    IndicatorAndActionChosen,
}

/// What one slot currently holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SlotSelection {
    pub indicator: Option<Indicator>,
    pub action: Option<Action>,
}

impl SlotSelection {
    pub fn state(&self) -> SlotState {
        match (self.indicator, self.action) {
            (None, _) => SlotState::Empty,
            (Some(_), None) => SlotState::IndicatorChosen,
            (Some(_), Some(_)) => SlotState::IndicatorAndActionChosen,
        }
    }

    /// Options the action picker shows; empty until an indicator is chosen
    pub fn action_vocabulary(&self) -> &'static [Action] {
        self.indicator.map(Indicator::actions).unwrap_or(&[])
    }
}

/// Immutable snapshot of all three slots.
///
/// Every transition returns a new set, the old one is left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSet {
    slots: [SlotSelection; SlotId::COUNT],
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: SlotId) -> &SlotSelection {
        &self.slots[slot.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &SlotSelection)> {
        SlotId::all().map(move |slot| (slot, self.slot(slot)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.indicator.is_none())
    }

    /// Slot currently holding `indicator`, if any
    pub fn slot_of(&self, indicator: Indicator) -> Option<SlotId> {
        self.iter().find(|(_, s)| s.indicator == Some(indicator)).map(|(slot, _)| slot)
    }

    /// Selection for whichever slot holds `indicator`
    pub fn find(&self, indicator: Indicator) -> Option<&SlotSelection> {
        self.slot_of(indicator).map(|slot| self.slot(slot))
    }

    /// Picks `indicator` for `slot` and resets its action.
    ///
    /// Re-picking the indicator a slot already holds still clears the action,
    /// the same way the picker's change event does.
    pub fn with_indicator(
        &self,
        slot: SlotId,
        indicator: Indicator,
    ) -> Result<Self, SelectionError> {
        if let Some(taken_by) = self.slot_of(indicator).filter(|&other| other != slot) {
            return Err(SelectionError::DuplicateIndicator { indicator, taken_by });
        }

        let mut next = *self;
        next.slots[slot.index()] = SlotSelection { indicator: Some(indicator), action: None };
        Ok(next)
    }

    /// Stores `action` for `slot`. An action for a slot without an indicator is ignored.
    pub fn with_action(&self, slot: SlotId, action: Action) -> Result<Self, SelectionError> {
        let Some(indicator) = self.slot(slot).indicator else {
            log_debug!(
                LogComponent::Domain("Selection"),
                "ignoring action {} for {}: no indicator chosen",
                action,
                slot
            );
            return Ok(*self);
        };

        if !indicator.accepts(action) {
            return Err(SelectionError::ActionNotInVocabulary { indicator, action });
        }

        let mut next = *self;
        next.slots[slot.index()].action = Some(action);
        Ok(next)
    }

    /// An indicator option is disabled in `slot` iff another slot holds it.
    pub fn is_option_disabled(&self, slot: SlotId, indicator: Indicator) -> bool {
        matches!(self.slot_of(indicator), Some(holder) if holder != slot)
    }

    /// Indicators disabled in each slot's picker, indexed by slot
    pub fn disable_state(&self) -> [Vec<Indicator>; SlotId::COUNT] {
        let mut state: [Vec<Indicator>; SlotId::COUNT] = Default::default();
        for (slot, disabled) in SlotId::all().zip(state.iter_mut()) {
            *disabled = self
                .iter()
                .filter(|(other, _)| *other != slot)
                .filter_map(|(_, s)| s.indicator)
                .collect();
        }
        state
    }

    /// `Indicator: <i>, Action: <a>` lines for every slot that has an indicator
    pub fn summary_lines(&self) -> Vec<String> {
        self.iter()
            .filter_map(|(_, s)| {
                s.indicator.map(|indicator| {
                    let action = s.action.map(|a| a.to_string()).unwrap_or_default();
                    format!("Indicator: {}, Action: {}", indicator, action)
                })
            })
            .collect()
    }
}
