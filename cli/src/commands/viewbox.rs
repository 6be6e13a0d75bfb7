use anyhow::{Context, Result, bail};
use civicmap::{fit_view_box, io::json::read_path_list, try_fit_view_box};

use crate::cli::{Cli, ViewboxArgs};

/// Collect paths from the positional arguments, then the file if given.
fn collect_paths(args: &ViewboxArgs) -> Result<Vec<String>> {
    let mut paths = args.paths.clone();
    if let Some(file) = &args.file {
        paths.extend(read_path_list(file)?);
    }
    if paths.is_empty() && args.file.is_none() {
        bail!("[viewbox] no paths given (pass path strings or --file)");
    }
    Ok(paths)
}

pub fn run(_cli: &Cli, args: &ViewboxArgs) -> Result<()> {
    let paths = collect_paths(args)?;

    log::info!("[viewbox] fitting {} paths", paths.len());

    if args.strict {
        let view_box = try_fit_view_box(&paths).context("[viewbox] strict fit failed")?;
        println!("{view_box}");
        return Ok(());
    }

    let report = fit_view_box(&paths);
    for skipped in &report.skipped {
        eprintln!("skipped path {}: {}", skipped.index, skipped.error);
    }
    println!("{}", report.view_box);

    Ok(())
}
