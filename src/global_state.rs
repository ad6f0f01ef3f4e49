use leptos::*;
use once_cell::sync::OnceCell;

use crate::application::OrderBoard;
use crate::domain::market_data::Price;
use crate::domain::order_form::SelectionSet;
use crate::global_signals;

pub struct Globals {
    pub selection: RwSignal<SelectionSet>,
    pub order_board: RwSignal<OrderBoard>,
    pub is_submitting: RwSignal<bool>,
    pub current_price: RwSignal<Option<Price>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        selection: create_rw_signal(SelectionSet::new()),
        order_board: create_rw_signal(OrderBoard::default()),
        is_submitting: create_rw_signal(false),
        current_price: create_rw_signal(None),
    })
}

global_signals! {
    pub selection => selection: SelectionSet,
    pub order_board => order_board: OrderBoard,
    pub is_submitting => is_submitting: bool,
    pub current_price => current_price: Option<Price>,
}
