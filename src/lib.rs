//! perf-hotspot - Automate `perf annotate` for the hottest functions
//!
//! This library wraps the external `perf` tool: it scrapes the textual
//! `perf report` summary to find the top-N hottest symbols, then requests a
//! per-instruction annotation for each and persists it to disk. All profiling
//! work is delegated to `perf`; this crate is orchestration and text parsing.

pub mod annotate;
pub mod cli;
pub mod perf;
pub mod report;
