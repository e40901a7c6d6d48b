//! `stash compile` command - Compile a filter without touching the database.

use bson::Bson;
use stash_filter::{FilterCompiler, FilterInput};
use stash_mongodb::to_query;

use crate::cli::{CompileArgs, OutputFormat};
use crate::config::Config;
use crate::error::CliResult;

/// Run the compile command
pub async fn run(args: CompileArgs, config: &Config) -> CliResult<()> {
    let input = super::read_input(&args.source)?;
    let compiler = config.filter.build_compiler();
    println!("{}", render(&compiler, &input, args.format)?);
    Ok(())
}

/// Compile `input` and render it in `format`.
pub fn render(compiler: &FilterCompiler, input: &FilterInput, format: OutputFormat) -> CliResult<String> {
    let predicates = compiler.compile(input)?;
    tracing::debug!(predicates = predicates.len(), format = %format, "rendering compiled filter");

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&predicates)?,
        OutputFormat::Mongo => {
            let query = Bson::Document(to_query(&predicates)).into_relaxed_extjson();
            serde_json::to_string_pretty(&query)?
        }
        OutputFormat::Text => predicates
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use pretty_assertions::assert_eq;
    use stash_filter::Bounds;

    fn input() -> FilterInput {
        FilterInput {
            league: Some("Standard".into()),
            item_level: Bounds::between(10, 60),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_json() {
        let out = render(&FilterCompiler::default(), &input(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "path": "league", "op": "equals", "value": "Standard" },
                { "path": "ilvl", "op": "range", "value": { "gte": 10, "lte": 60 } },
            ])
        );
    }

    #[test]
    fn test_render_mongo() {
        let out = render(&FilterCompiler::default(), &input(), OutputFormat::Mongo).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "$and": [
                { "league": "Standard" },
                { "ilvl": { "$gte": 10, "$lte": 60 } },
            ] })
        );
    }

    #[test]
    fn test_render_text() {
        let out = render(&FilterCompiler::default(), &input(), OutputFormat::Text).unwrap();
        assert_eq!(out, "league = \"Standard\"\n10 <= ilvl <= 60");
    }

    #[test]
    fn test_render_rejects_unknown_currency() {
        let input = FilterInput {
            currency_name: Some("Shiny Pebble".into()),
            ..Default::default()
        };
        let err = render(&FilterCompiler::default(), &input, OutputFormat::Json).unwrap_err();
        assert!(matches!(err, CliError::Filter { .. }));
    }
}
