//! # Signpost
//!
//! Core dataset and query logic for the Summerville happy-hour directory.
//!
//! Everything here is pure and synchronous: the [`store::Store`] holds an
//! immutable snapshot of venue records, and the [`query`] and [`report`]
//! modules are read-only functions over that snapshot. The HTTP layer and the
//! ingestion binary live in their own crates and only call into this one.

pub mod cuisine;
pub mod error;
pub mod geo;
pub mod neighborhood;
pub mod query;
pub mod report;
pub mod spot;
pub mod store;
