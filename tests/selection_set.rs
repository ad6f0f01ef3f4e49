use order_config_wasm::domain::errors::SelectionError;
use order_config_wasm::domain::order_form::{
    Action, Indicator, OrderFormEvent, SelectionSet, SlotId, SlotState, reduce,
};
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

fn slot_at(n: u8) -> SlotId {
    SlotId::iter().nth(n as usize % SlotId::COUNT).unwrap()
}

fn indicator_at(n: u8) -> Indicator {
    let all: Vec<Indicator> = Indicator::iter().collect();
    all[n as usize % all.len()]
}

/// Drives the set the way the form does: disabled options cannot be picked.
#[quickcheck]
fn chosen_indicator_is_enabled_only_in_its_own_slot(picks: Vec<(u8, u8)>) -> bool {
    let mut set = SelectionSet::new();
    for (s, i) in picks {
        let (slot, indicator) = (slot_at(s), indicator_at(i));
        if set.is_option_disabled(slot, indicator) {
            if set.with_indicator(slot, indicator).is_ok() {
                return false;
            }
            continue;
        }
        set = set.with_indicator(slot, indicator).unwrap();

        for indicator in Indicator::iter() {
            let holders: Vec<SlotId> =
                SlotId::all().filter(|&slot| set.slot(slot).indicator == Some(indicator)).collect();
            if holders.len() > 1 {
                return false;
            }
            if let Some(&holder) = holders.first() {
                let enabled: Vec<SlotId> =
                    SlotId::all().filter(|&slot| !set.is_option_disabled(slot, indicator)).collect();
                if enabled != vec![holder] {
                    return false;
                }
            }
        }
    }
    true
}

#[quickcheck]
fn indicator_change_resets_action_and_vocabulary(s: u8, first: u8, second: u8) -> bool {
    let slot = slot_at(s);
    let first = indicator_at(first);
    let second = indicator_at(second);

    let set = SelectionSet::new().with_indicator(slot, first).unwrap();
    let set = set.with_action(slot, first.actions()[0]).unwrap();
    let set = set.with_indicator(slot, second).unwrap();

    set.slot(slot).action.is_none()
        && set.slot(slot).state() == SlotState::IndicatorChosen
        && set.slot(slot).action_vocabulary() == second.actions()
}

#[test]
fn nothing_is_disabled_on_load() {
    let set = SelectionSet::new();
    assert!(set.is_empty());
    assert!(set.disable_state().iter().all(Vec::is_empty));
    for slot in SlotId::all() {
        assert_eq!(set.slot(slot).state(), SlotState::Empty);
        assert!(set.slot(slot).action_vocabulary().is_empty());
    }
}

#[test]
fn disable_state_lists_other_slots_choices() {
    let set = SelectionSet::new()
        .with_indicator(SlotId::One, Indicator::Rsi)
        .unwrap()
        .with_indicator(SlotId::Three, Indicator::Macd)
        .unwrap();

    let [one, two, three] = set.disable_state();
    assert_eq!(one, vec![Indicator::Macd]);
    assert_eq!(two, vec![Indicator::Rsi, Indicator::Macd]);
    assert_eq!(three, vec![Indicator::Rsi]);
    assert_eq!(set.disable_state(), set.disable_state());
}

#[test]
fn moving_an_indicator_frees_the_old_choice() {
    let set = SelectionSet::new()
        .with_indicator(SlotId::One, Indicator::Rsi)
        .unwrap()
        .with_indicator(SlotId::One, Indicator::BollingerBand)
        .unwrap();

    assert!(!set.is_option_disabled(SlotId::Two, Indicator::Rsi));
    assert!(set.is_option_disabled(SlotId::Two, Indicator::BollingerBand));
}

#[test]
fn duplicate_pick_is_rejected() {
    let set = SelectionSet::new().with_indicator(SlotId::Two, Indicator::MovingAverage200).unwrap();
    assert_eq!(
        set.with_indicator(SlotId::Three, Indicator::MovingAverage200),
        Err(SelectionError::DuplicateIndicator {
            indicator: Indicator::MovingAverage200,
            taken_by: SlotId::Two,
        })
    );
}

#[test]
fn action_outside_vocabulary_is_rejected() {
    let set = SelectionSet::new().with_indicator(SlotId::One, Indicator::MovingAverage50).unwrap();
    assert_eq!(
        set.with_action(SlotId::One, Action::GoldenCross),
        Err(SelectionError::ActionNotInVocabulary {
            indicator: Indicator::MovingAverage50,
            action: Action::GoldenCross,
        })
    );
}

#[test]
fn reduce_applies_events_in_order() {
    let events = [
        OrderFormEvent::ActionChanged { slot: SlotId::One, action: Action::Above70 },
        OrderFormEvent::IndicatorChanged { slot: SlotId::One, indicator: Indicator::Rsi },
        OrderFormEvent::ActionChanged { slot: SlotId::One, action: Action::Below30 },
    ];

    let set = events
        .into_iter()
        .try_fold(SelectionSet::new(), |set, event| reduce(&set, event))
        .unwrap();

    assert_eq!(set.slot(SlotId::One).indicator, Some(Indicator::Rsi));
    assert_eq!(set.slot(SlotId::One).action, Some(Action::Below30));
}
