use chrono::NaiveDate;
use shared::{ClickOutcome, PredefinedRange, RangeReport, RangeSelection};
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::components::calendar_pane::CalendarPane;
use crate::hooks::use_dual_calendar::use_dual_calendar;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    /// Quick-select ranges supplied by the host, rendered as footer buttons.
    #[prop_or_default]
    pub predefined_ranges: Vec<PredefinedRange>,
    /// Invoked with the committed range and its weekend dates.
    #[prop_or_default]
    pub on_change: Option<Callback<RangeReport>>,
}

/// Dual-month date-range picker restricted to weekday endpoints.
///
/// The collapsed input row shows the current range; clicking it opens a
/// popover with two independently navigable month panes and quick-select
/// shortcuts. The host's `on_change` callback fires each time a range is
/// committed, with the weekend dates falling inside it.
#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let selection = use_state(RangeSelection::default);
    let show_calendar = use_state(|| false);
    let picker_ref = use_node_ref();

    let calendars = use_dual_calendar();

    let toggle_calendar = {
        let show_calendar = show_calendar.clone();
        Callback::from(move |_: MouseEvent| {
            show_calendar.set(!*show_calendar);
        })
    };

    // Close the popover when a click lands outside the picker
    {
        let show_calendar = show_calendar.clone();
        let picker_ref = picker_ref.clone();
        use_effect_with(*show_calendar, move |is_open| {
            let listener = is_open.then(|| {
                let show_calendar = show_calendar.clone();
                let picker_ref = picker_ref.clone();
                gloo::events::EventListener::new(&window().unwrap(), "click", move |event| {
                    let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
                    let picker = picker_ref.cast::<Element>();
                    if let (Some(target), Some(picker)) = (target, picker) {
                        if !picker.contains(Some(&target)) {
                            show_calendar.set(false);
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_day_click = {
        let selection = selection.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |date: NaiveDate| {
            let mut next = *selection;
            match next.apply_click(date) {
                ClickOutcome::Ignored => return,
                ClickOutcome::Started(_) => {}
                ClickOutcome::Completed { .. } => {
                    if let (Some(callback), Some(report)) = (on_change.as_ref(), next.report()) {
                        callback.emit(report);
                    }
                }
            }
            selection.set(next);
        })
    };

    let on_last_seven_days = {
        let selection = selection.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *selection;
            next.select_last_n_days(7, date_utils::today());
            if let (Some(callback), Some(report)) = (on_change.as_ref(), next.report()) {
                callback.emit(report);
            }
            selection.set(next);
        })
    };

    let on_last_thirty_days = {
        let selection = selection.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *selection;
            next.select_last_n_days(30, date_utils::today());
            if let (Some(callback), Some(report)) = (on_change.as_ref(), next.report()) {
                callback.emit(report);
            }
            selection.set(next);
        })
    };

    let on_clear = {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *selection;
            next.clear();
            selection.set(next);
        })
    };

    let on_ok = {
        let show_calendar = show_calendar.clone();
        Callback::from(move |_: MouseEvent| {
            show_calendar.set(false);
        })
    };

    html! {
        <div class="date-range-picker" ref={picker_ref.clone()}>
            <button type="button" class="range-display-button" onclick={toggle_calendar}>
                {date_utils::format_range_label(&selection)}
            </button>

            {if *show_calendar {
                html! {
                    <div class="picker-dropdown">
                        <div class="picker-panes">
                            <CalendarPane
                                cursor={calendars.left.cursor}
                                selection={*selection}
                                on_previous={calendars.left.on_previous.clone()}
                                on_next={calendars.left.on_next.clone()}
                                on_day_click={on_day_click.clone()}
                            />
                            <CalendarPane
                                cursor={calendars.right.cursor}
                                selection={*selection}
                                on_previous={calendars.right.on_previous.clone()}
                                on_next={calendars.right.on_next.clone()}
                                on_day_click={on_day_click.clone()}
                            />
                        </div>

                        <div class="picker-footer">
                            <div class="shortcut-buttons">
                                <button type="button" class="shortcut-button" onclick={on_last_seven_days}>
                                    {"Last 7 days"}
                                </button>
                                <button type="button" class="shortcut-button" onclick={on_last_thirty_days}>
                                    {"Last 30 days"}
                                </button>
                                {for props.predefined_ranges.iter().map(|preset| {
                                    let selection = selection.clone();
                                    let on_change = props.on_change.clone();
                                    let label = preset.label.clone();
                                    let preset = preset.clone();
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        let mut next = *selection;
                                        next.select_range(preset.start, preset.end);
                                        if let (Some(callback), Some(report)) =
                                            (on_change.as_ref(), next.report())
                                        {
                                            callback.emit(report);
                                        }
                                        selection.set(next);
                                    });
                                    html! {
                                        <button type="button" class="shortcut-button" {onclick}>
                                            {label}
                                        </button>
                                    }
                                })}
                                <button type="button" class="shortcut-button" onclick={on_clear}>
                                    {"Clear"}
                                </button>
                            </div>
                            <button type="button" class="ok-button" onclick={on_ok}>
                                {"OK"}
                            </button>
                        </div>
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}
