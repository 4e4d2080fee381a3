//! Single-statement data access for the three tables.

pub mod orders;
pub mod providers;
pub mod users;
