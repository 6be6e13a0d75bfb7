use anyhow::Result;
use civicmap::{
    io::json::read_json_file,
    model::{NationalLeader, PositionFilter, QueryIssue, Roster, RosterFilter},
};

use crate::cli::{Cli, RosterArgs};

fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

/// One table row: name, position, term, party.
fn row(leader: &NationalLeader) -> String {
    format!(
        "H.E. {:<28} {:<18} {:<14} {}",
        leader.name,
        leader.position,
        leader.term(),
        leader.party_abbreviation.as_deref().unwrap_or("—"),
    )
}

pub fn run(_cli: &Cli, args: &RosterArgs) -> Result<()> {
    let roster: Roster = read_json_file(&args.input)?;

    let filter = RosterFilter {
        name: args.name.clone(),
        position: PositionFilter::parse(&args.position),
        year: args.year,
    };

    // An absent --name means no name filter.
    let issues = filter.validate(current_year()).into_iter()
        .filter(|issue| *issue != QueryIssue::EmptyName);
    for issue in issues {
        eprintln!("warning: {issue}");
    }

    if !roster.current_leaders.is_empty() {
        println!("Current leaders:");
        for leader in &roster.current_leaders {
            println!("  H.E. {} ({})", leader.name, leader.position);
        }
        println!();
    }

    let rows = roster.filter(&filter);
    log::info!("[roster] {} of {} leaders match", rows.len(), roster.all_leaders.len());
    for leader in rows {
        println!("{}", row(leader));
    }

    Ok(())
}
