//! `stash search` command - Run a filter against the item collection.

use std::sync::Arc;

use bson::{Bson, Document};
use stash_mongodb::{ItemSearch, MongoClient, MongoError};

use crate::cli::SearchArgs;
use crate::config::Config;
use crate::error::CliResult;
use crate::output;

/// Run the search command
///
/// Matching items are printed to stdout as one JSON document per line.
pub async fn run(args: SearchArgs, config: &Config) -> CliResult<()> {
    let compiler = Arc::new(config.filter.build_compiler());

    // Compile before connecting so a bad filter fails fast.
    let input = if args.latest {
        None
    } else {
        let input = super::read_input(&args.source)?;
        compiler.compile(&input)?;
        Some(input)
    };

    let mut mongo = config.mongodb.clone();
    if let Some(uri) = args.uri {
        mongo.uri = uri;
    }
    let client = MongoClient::new(mongo).await?;
    ensure_reachable(&client).await?;
    let search = ItemSearch::from_client(&client, compiler);

    let items = match &input {
        Some(input) => search.search(input, args.limit).await?,
        None => search.latest(args.limit).await?,
    };

    for item in &items {
        println!("{}", to_json_line(item)?);
    }
    output::note(&format!("{} item(s)", items.len()));

    Ok(())
}

/// Fail with a connection error when the server does not answer a ping.
async fn ensure_reachable(client: &MongoClient) -> CliResult<()> {
    if client.is_healthy().await {
        return Ok(());
    }
    let config = client.config();
    Err(MongoError::connection(format!(
        "no MongoDB server answered at {} within {}s",
        config.uri,
        config.server_selection_timeout_secs.unwrap_or_default()
    ))
    .into())
}

fn to_json_line(item: &Document) -> CliResult<String> {
    let value = Bson::Document(item.clone()).into_relaxed_extjson();
    Ok(serde_json::to_string(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_json_line() {
        let line = to_json_line(&doc! { "_id": "abc", "ilvl": 84_i32, "corrupted": true }).unwrap();
        assert_eq!(line, r#"{"_id":"abc","ilvl":84,"corrupted":true}"#);
    }
}
