pub mod use_dual_calendar;
