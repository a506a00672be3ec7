use chrono::{Datelike, NaiveDate};
use shared::{classify_grid, DayCell, MonthCursor, RangeSelection};
use yew::prelude::*;

use crate::services::date_utils::month_name;

const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Properties, PartialEq)]
pub struct CalendarPaneProps {
    pub cursor: MonthCursor,
    pub selection: RangeSelection,
    pub on_previous: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
    /// Emits the clicked date; the selection state machine decides whether
    /// the click counts.
    pub on_day_click: Callback<NaiveDate>,
}

/// One month pane of the picker: navigation header, weekday row, and the
/// fixed 42-cell day grid.
#[function_component(CalendarPane)]
pub fn calendar_pane(props: &CalendarPaneProps) -> Html {
    let cells = classify_grid(props.cursor, &props.selection);

    html! {
        <div class="calendar-pane">
            <div class="calendar-header">
                <button type="button" class="nav-button" onclick={props.on_previous.clone()}>
                    {"‹"}
                </button>
                <span class="month-year">
                    {format!("{} {}", month_name(props.cursor.month), props.cursor.year)}
                </span>
                <button type="button" class="nav-button" onclick={props.on_next.clone()}>
                    {"›"}
                </button>
            </div>

            <div class="weekday-header">
                {for WEEKDAY_LABELS.iter().map(|label| html! {
                    <span class="weekday">{*label}</span>
                })}
            </div>

            <div class="calendar-days">
                {for cells.iter().map(|cell| render_cell(cell, &props.on_day_click))}
            </div>
        </div>
    }
}

fn render_cell(cell: &DayCell, on_day_click: &Callback<NaiveDate>) -> Html {
    let Some(date) = cell.date else {
        return html! { <div class="calendar-day empty"></div> };
    };

    let onclick = {
        let on_day_click = on_day_click.clone();
        Callback::from(move |_: MouseEvent| on_day_click.emit(date))
    };

    html! {
        <button
            type="button"
            class={classes!(
                "calendar-day",
                cell.is_weekend.then_some("weekend"),
                (cell.in_range && !cell.is_weekend).then_some("in-range"),
            )}
            disabled={cell.is_weekend}
            {onclick}
        >
            {date.day()}
        </button>
    }
}
