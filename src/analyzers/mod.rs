//! The aggregation pipeline: year filter, KPI summary, hour-of-day
//! patterns, and categorical means, assembled into a [`types::UsageReport`].
//!
//! Every function here is a pure transform over immutable row slices; one
//! filter selection means one pass through the stages with no shared state.

pub mod categorical;
pub mod filter;
pub mod hourly;
pub mod kpi;
pub mod report;
pub mod types;
pub mod utility;
