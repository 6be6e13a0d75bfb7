//! Payload types returned by the civic-data backend, and the view helpers over them.

mod county;
mod position;
pub mod roster;
mod search;

pub use county::{Constituency, County, CountyDetail, CountyLeaders, CountySummary, Leader, MapShape, Party, county_shapes};
pub use position::{Position, format_position, title_case};
pub use roster::{NationalLeader, PositionFilter, QueryIssue, Roster, RosterFilter};
pub use search::{Location, LocationSearch, SearchLeader};
