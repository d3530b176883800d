use crate::cli::parser::Commands;
use crate::core::range::{parse_range, to_half_open};
use crate::errors::AppResult;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Range { range, json } = cmd {
        let (first, last) = parse_range(range)?;
        let half_open = to_half_open(first, last)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&half_open)?);
            return Ok(());
        }

        let mut table = Table::new(["field", "value"]);
        table.add_row(vec!["first day".into(), first.to_string()]);
        table.add_row(vec!["last day".into(), last.to_string()]);
        table.add_row(vec!["from".into(), half_open.from_rfc3339()]);
        table.add_row(vec!["to_exclusive".into(), half_open.to_exclusive_rfc3339()]);
        print!("{}", table.render());
    }
    Ok(())
}
