//! Fan-out orchestrator: concurrent source queries with per-source isolation.
//!
//! This module validates the query, starts every configured source at
//! once, reports each source to a sink as it settles, and assembles an
//! ordered report. It also holds the settle-all combinator and the
//! order-preserving deduplication used by multi-query sources.

pub mod dedup;
pub mod fanout;
pub mod settle;
pub mod url_normalize;
