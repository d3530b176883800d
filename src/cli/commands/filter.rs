use crate::cli::parser::Commands;
use crate::core::filter::filter_labels;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Filter { query, labels } = cmd {
        let found = filter_labels(query, labels);

        if found.is_empty() {
            info(format!("No label matches '{}'", query));
        }
        for label in found {
            println!("{}", label);
        }
    }
    Ok(())
}
