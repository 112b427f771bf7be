//! Terminal presentation layer: prompts, report printing, raw-row paging.
//!
//! Everything here is thin I/O glue; no statistic is computed in this module.

pub mod prompt;
pub mod report;
