pub mod filters;
pub mod header;
pub mod roster_table;
pub mod stats;
