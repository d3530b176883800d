use crate::cli::parser::HoursAction;
use crate::config::Config;
use crate::core::duration::{
    ParseError, format_decimal_hours, format_hours, parse_duration, render_hours, sum_durations,
};
use crate::errors::{AppError, AppResult};
use crate::models::hours_notation::HoursNotation;
use crate::ui::messages::info;
use tracing::debug;

pub fn handle(action: &HoursAction, cfg: &Config) -> AppResult<()> {
    match action {
        HoursAction::Parse { text } => match parse_duration(text) {
            Ok(hours) => {
                println!("{} ({})", hours, format_hours(hours));
                Ok(())
            }
            // blank field: "unset", not an error
            Err(ParseError::Empty) => {
                info("No value");
                Ok(())
            }
            Err(e) => Err(e.into()),
        },

        HoursAction::Format {
            value,
            decimal,
            hm,
            notation,
        } => {
            let notation = match notation {
                Some(code) => HoursNotation::from_code(code)
                    .ok_or_else(|| AppError::InvalidNotation(code.to_string()))?,
                None if *decimal => HoursNotation::Decimal,
                None if *hm => HoursNotation::HourMinute,
                None => cfg.hours_notation,
            };
            debug!(notation = notation.as_str(), value = *value, "rendering hours");

            let rendered = render_hours(*value, notation);
            if rendered.is_empty() {
                return Err(AppError::InvalidHours(value.to_string()));
            }
            println!("{}", rendered);
            Ok(())
        }

        HoursAction::Sum { texts } => {
            let total = sum_durations(texts.iter().map(String::as_str))?;
            println!(
                "Total: {} ({})",
                render_hours(total, cfg.hours_notation),
                format_decimal_hours(total)
            );
            Ok(())
        }
    }
}
