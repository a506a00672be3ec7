use shared::{MonthCursor, NavDirection};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils;

/// One pane's cursor plus its navigation callbacks.
#[derive(Clone)]
pub struct PaneHandle {
    pub cursor: MonthCursor,
    pub on_previous: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

pub struct UseDualCalendarResult {
    pub left: PaneHandle,
    pub right: PaneHandle,
}

/// Two independent month cursors for the picker's panes.
///
/// The left pane starts on the current month and the right pane one month
/// ahead; after that the panes navigate freely, with no ordering enforced
/// between them.
#[hook]
pub fn use_dual_calendar() -> UseDualCalendarResult {
    let left = use_state(|| MonthCursor::for_date(date_utils::today()));
    let right = use_state(|| {
        MonthCursor::for_date(date_utils::today()).advance(NavDirection::Next)
    });

    UseDualCalendarResult {
        left: pane_handle(&left),
        right: pane_handle(&right),
    }
}

fn pane_handle(cursor: &UseStateHandle<MonthCursor>) -> PaneHandle {
    let on_previous = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| {
            cursor.set((*cursor).advance(NavDirection::Previous));
        })
    };
    let on_next = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| {
            cursor.set((*cursor).advance(NavDirection::Next));
        })
    };
    PaneHandle {
        cursor: **cursor,
        on_previous,
        on_next,
    }
}
