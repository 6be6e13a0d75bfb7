use anyhow::Result;
use civicmap::{api::ApiClient, io::json::write_json_file};
use serde_json::Value;

use crate::cli::{Cli, FetchArgs, Resource};

pub fn run(_cli: &Cli, args: &FetchArgs) -> Result<()> {
    let api = ApiClient::new(&args.api_url)?;
    log::info!("[fetch] {:?} from {}", args.resource, api.base_url());

    let payload: Value = match &args.resource {
        Resource::Counties => serde_json::to_value(api.counties()?)?,
        Resource::County { id } => serde_json::to_value(api.county(*id)?)?,
        Resource::Search { place } => {
            let result = api.search(place)?;
            eprintln!("{}", result.summary(place));
            serde_json::to_value(result)?
        }
        Resource::Presidents => serde_json::to_value(api.presidents()?)?,
    };

    match &args.output {
        Some(path) => {
            write_json_file(path, &payload)?;
            log::info!("[fetch] -> {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&payload)?),
    }

    Ok(())
}
