use leptos::*;
use std::rc::Rc;
use strum::IntoEnumIterator;

use crate::{
    application::{OrderSubmission, SubmitOutcome},
    domain::{
        logging::LogComponent,
        market_data::{OrderDetails, Symbol},
        order_form::{Action, DomainEvent, Indicator, OrderFormEvent, SlotId, reduce},
    },
    global_state::{current_price, is_submitting, order_board, selection},
    infrastructure::AnalysisHttpClient,
    log_debug, log_warn,
};

pub type HttpOrderSubmission = OrderSubmission<AnalysisHttpClient>;

/// Runs a picker event through the pure transition and stores the result.
pub fn dispatch(event: OrderFormEvent) {
    log_debug!(
        LogComponent::Presentation("OrderForm"),
        "{} on {}",
        event.event_type(),
        event.slot()
    );

    let current = selection().get_untracked();
    match reduce(&current, event) {
        Ok(next) => selection().set(next),
        Err(err) => log_warn!(LogComponent::Presentation("OrderForm"), "⚠️ {}", err),
    }
}

/// 🦀 Order configuration page
#[component]
pub fn App(submission: Rc<HttpOrderSubmission>, ticker: Symbol) -> impl IntoView {
    view! {
        <style>
            {r#"
            .order-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .header, .order-form, .order-area {
                background: rgba(255, 255, 255, 0.1);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
                margin-bottom: 20px;
            }

            .slot {
                display: flex;
                gap: 10px;
                margin-bottom: 10px;
            }

            .price-value {
                font-family: 'Courier New', monospace;
                font-size: 24px;
                font-weight: 700;
                color: #72c685;
            }

            .place-order {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 8px 16px;
                border-radius: 5px;
                cursor: pointer;
            }

            .place-order:disabled {
                opacity: 0.5;
                cursor: wait;
            }
            "#}
        </style>
        <div class="order-app">
            <Header ticker=ticker />
            <OrderForm submission=submission />
            <SelectionSummary />
            <OrderArea />
        </div>
    }
}

/// 📈 Ticker and the last polled price
#[component]
fn Header(ticker: Symbol) -> impl IntoView {
    view! {
        <div class="header">
            <h1>"Order Configuration"</h1>
            <div class="price-value">
                {move || match current_price().get() {
                    Some(price) => format!("{}: ${:.2}", ticker, price.value()),
                    None => format!("{}: —", ticker),
                }}
            </div>
        </div>
    }
}

#[component]
fn OrderForm(submission: Rc<HttpOrderSubmission>) -> impl IntoView {
    let on_place_order = move |_: web_sys::MouseEvent| {
        order_board().update(|board| board.reveal());
        is_submitting().set(true);

        let submission = submission.clone();
        let snapshot = selection().get_untracked();
        spawn_local(async move {
            let outcome = submission.submit(&snapshot).await;
            if outcome != SubmitOutcome::Skipped {
                order_board().update(|board| board.apply(&outcome));
            }
            is_submitting().set(submission.is_in_flight());
        });
    };

    view! {
        <div class="order-form">
            {SlotId::all().map(|slot| view! { <SlotPicker slot_id=slot /> }).collect_view()}
            <button
                id="place-order"
                class="place-order"
                disabled=move || is_submitting().get()
                on:click=on_place_order
            >
                "Place Order"
            </button>
        </div>
    }
}

/// Indicator picker plus its action picker.
///
/// Option `disabled` flags and the action list are derived from the
/// selection set, so they are recomputed on every change and at first render.
#[component]
fn SlotPicker(slot_id: SlotId) -> impl IntoView {
    let slot_selection = move || selection().with(|s| *s.slot(slot_id));

    let on_indicator = move |ev: web_sys::Event| match event_target_value(&ev).parse::<Indicator>() {
        Ok(indicator) => dispatch(OrderFormEvent::IndicatorChanged { slot: slot_id, indicator }),
        Err(_) => log_warn!(LogComponent::Presentation("SlotPicker"), "unknown indicator option"),
    };

    let on_action = move |ev: web_sys::Event| match event_target_value(&ev).parse::<Action>() {
        Ok(action) => dispatch(OrderFormEvent::ActionChanged { slot: slot_id, action }),
        Err(_) => log_warn!(LogComponent::Presentation("SlotPicker"), "unknown action option"),
    };

    let indicator_options = Indicator::iter()
        .map(|indicator| {
            view! {
                <option
                    value=indicator.value()
                    disabled=move || selection().with(|s| s.is_option_disabled(slot_id, indicator))
                >
                    {indicator.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="slot">
            <select
                class="indicator"
                prop:value=move || {
                    slot_selection().indicator.map(|i| i.value().to_string()).unwrap_or_default()
                }
                on:change=on_indicator
            >
                <option value="" disabled=true>"Choose Indicator"</option>
                {indicator_options}
            </select>
            <select
                class="action"
                disabled=move || slot_selection().indicator.is_none()
                prop:value=move || {
                    slot_selection().action.map(|a| a.to_string()).unwrap_or_default()
                }
                on:change=on_action
            >
                <option value="" disabled=true>"Choose Action"</option>
                {move || {
                    slot_selection()
                        .action_vocabulary()
                        .iter()
                        .map(|action| {
                            let value = action.to_string();
                            view! { <option value=value.clone()>{value}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
fn SelectionSummary() -> impl IntoView {
    view! {
        <div id="statusDiv">
            {move || {
                selection()
                    .with(|s| s.summary_lines())
                    .into_iter()
                    .map(|line| view! { <p>{line}</p> })
                    .collect_view()
            }}
        </div>
    }
}

/// Five labelled fields filled from the first analysis result
#[component]
fn OrderArea() -> impl IntoView {
    let field = move |index: usize| {
        move || {
            order_board().with(|board| {
                board
                    .details
                    .as_ref()
                    .map(|details| details.fields()[index].1.to_string())
                    .unwrap_or_default()
            })
        }
    };

    view! {
        <div
            id="order-area"
            class="order-area"
            style:display=move || if order_board().with(|b| b.area_visible) { "block" } else { "none" }
        >
            {OrderDetails::FIELD_IDS
                .iter()
                .enumerate()
                .map(|(index, id)| view! { <div id=*id>{field(index)}</div> })
                .collect_view()}
            <div class="history">
                {move || format!("Responses received: {}", order_board().with(|b| b.history.len()))}
            </div>
        </div>
    }
}
