#[cfg(feature = "download")]
pub mod fetch;
pub mod render;
pub mod roster;
pub mod viewbox;
