use chrono::Days;
use gloo::console;
use shared::{MonthCursor, PredefinedRange, RangeReport};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::date_range_picker::DateRangePicker;
use services::date_utils;

#[function_component(App)]
fn app() -> Html {
    let last_report = use_state(|| Option::<RangeReport>::None);

    let on_range_change = {
        let last_report = last_report.clone();
        Callback::from(move |report: RangeReport| {
            console::log!(format!(
                "Selected date range: {} ~ {}",
                report.start, report.end
            ));
            match serde_json::to_string(&report.weekends) {
                Ok(json) => console::log!(format!("Weekend dates in range: {}", json)),
                Err(e) => console::error!(format!("Failed to serialize weekend dates: {}", e)),
            }
            last_report.set(Some(report));
        })
    };

    // Example host-supplied quick-select ranges, anchored to today
    let predefined_ranges = {
        let today = date_utils::today();
        vec![
            PredefinedRange {
                label: "Month to date".to_string(),
                start: MonthCursor::for_date(today).first_day(),
                end: today,
            },
            PredefinedRange {
                label: "Last 90 days".to_string(),
                start: today.checked_sub_days(Days::new(89)).unwrap_or(today),
                end: today,
            },
        ]
    };

    html! {
        <div class="app">
            <h1>{"Weekday Range Picker"}</h1>
            <DateRangePicker {predefined_ranges} on_change={Some(on_range_change)} />

            {match last_report.as_ref() {
                Some(report) => html! {
                    <div class="selection-summary">
                        <p>{format!(
                            "Selected: {} ~ {}",
                            date_utils::format_date(report.start),
                            date_utils::format_date(report.end)
                        )}</p>
                        <p>{format!("{} weekend day(s) inside the range", report.weekends.len())}</p>
                    </div>
                },
                None => html! {
                    <p class="selection-summary">{"No range selected yet."}</p>
                },
            }}
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
