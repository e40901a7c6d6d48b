//! `stash currencies` command - List accepted currency names.

use stash_filter::CurrencyTable;

use crate::cli::CurrenciesArgs;
use crate::config::Config;
use crate::error::CliResult;
use crate::output::{self, kv_aligned};

/// Run the currencies command
pub async fn run(args: CurrenciesArgs, config: &Config) -> CliResult<()> {
    let table = config.filter.currency_table();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    output::header("Currencies");
    let width = table.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);
    for (name, code) in table.iter() {
        kv_aligned(name, code, width);
    }
    output::newline();
    output::dim(&format!(
        "{} entries, table version {}",
        table.len(),
        CurrencyTable::VERSION
    ));

    Ok(())
}
