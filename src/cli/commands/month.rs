use crate::cli::parser::MonthAction;
use crate::config::Config;
use crate::core::period::{BillingWindow, last_completed_month, month_or_fallback, parse_month_token};
use crate::errors::{AppError, AppResult};
use crate::models::month_start::MonthStart;
use crate::utils::date::{now_utc, parse_instant};
use crate::utils::table::Table;
use chrono::SecondsFormat;

pub fn handle(action: &MonthAction, cfg: &Config) -> AppResult<()> {
    let now = now_utc();
    let last_completed = last_completed_month(now, cfg.completed_month_lag);

    match action {
        MonthAction::Parse { token } => {
            let month =
                parse_month_token(token).ok_or_else(|| AppError::InvalidMonth(token.clone()))?;
            println!(
                "{}",
                month.instant().to_rfc3339_opts(SecondsFormat::Millis, true)
            );
        }

        MonthAction::Window {
            selected,
            max,
            json,
        } => {
            let max = month_or_fallback(max.as_deref(), last_completed);
            let selected = month_or_fallback(selected.as_deref(), MonthStart::containing(now));
            let window = BillingWindow::new(selected, max)
                .ok_or_else(|| AppError::InvalidMonth(max.to_string()))?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&window)?);
                return Ok(());
            }

            let mut table = Table::new(["field", "value"]);
            table.add_row(vec!["selected".into(), window.month_start.to_string()]);
            table.add_row(vec!["effective".into(), window.effective_month().to_string()]);
            table.add_row(vec!["max month".into(), window.max_month_start.to_string()]);
            table.add_row(vec![
                "max selectable".into(),
                window
                    .max_selectable_instant
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            ]);
            print!("{}", table.render());
        }

        MonthAction::Clamp { date, max } => {
            let instant = parse_instant(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
            let max = month_or_fallback(max.as_deref(), last_completed);
            let window = BillingWindow::new(max, max)
                .ok_or_else(|| AppError::InvalidMonth(max.to_string()))?;
            println!("{}", window.clamp_to_month_start(instant));
        }

        MonthAction::Last => println!("{}", last_completed),
    }

    Ok(())
}
