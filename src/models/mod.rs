pub mod date_range;
pub mod hours_notation;
pub mod month_start;
