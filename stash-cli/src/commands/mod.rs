//! CLI command implementations.

pub mod compile;
pub mod currencies;
pub mod search;
pub mod version;

use std::io::Read;

use stash_filter::{FilterInput, ItemQueryForm};

use crate::cli::InputArgs;
use crate::error::{CliError, CliResult};

/// Read and parse the filter payload named by `args`.
pub(crate) fn read_input(args: &InputArgs) -> CliResult<FilterInput> {
    let content = match &args.input {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            CliError::Input(format!("failed to read {}: {}", path.display(), e))
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_input(&content, args.form)
}

/// Parse a filter payload, either nested or flat web-form shaped.
pub(crate) fn parse_input(content: &str, form: bool) -> CliResult<FilterInput> {
    let parsed = if form {
        ItemQueryForm::from_json(content).map(FilterInput::from)
    } else {
        FilterInput::from_json(content)
    };
    parsed.map_err(|e| CliError::Input(e.to_string()))
}
