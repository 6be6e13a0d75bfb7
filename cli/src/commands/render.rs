use std::path::PathBuf;

use anyhow::Result;
use civicmap::{
    RenderOptions,
    io::json::read_json_file,
    model::{County, CountyDetail, MapShape, county_shapes},
    write_map_file,
};

use crate::cli::{Cli, RenderArgs};

/// Load the shapes to draw from either payload kind.
fn load_shapes(args: &RenderArgs) -> Result<Vec<MapShape>> {
    if args.counties {
        let counties: Vec<County> = read_json_file(&args.input)?;
        Ok(county_shapes(&counties))
    } else {
        let detail: CountyDetail = read_json_file(&args.input)?;
        log::info!("[render] {} County, {} constituencies", detail.county.name, detail.constituencies.len());
        Ok(detail.shapes())
    }
}

pub fn run(_cli: &Cli, args: &RenderArgs) -> Result<()> {
    let shapes = load_shapes(args)?;
    let output = args.output.clone().unwrap_or_else(|| PathBuf::from("map.svg"));

    let options = RenderOptions {
        width: args.width,
        height: args.height,
        padding: args.padding,
        highlight: args.highlight.clone(),
    };

    if let Some(name) = &options.highlight {
        if !shapes.iter().any(|s| s.name.eq_ignore_ascii_case(name)) {
            log::warn!("[render] no shape named {name:?} to highlight");
        }
    }

    let report = write_map_file(&output, &shapes, &options)?;
    log::info!("[render] viewBox=\"{}\" -> {}", report.view_box, output.display());

    println!("Wrote {} of {} shapes to {}", shapes.len() - report.skipped.len(), shapes.len(), output.display());
    Ok(())
}
