//! Materials Engine for landscaping service estimates
//!
//! This crate calculates how much of each material a job needs and what it
//! costs: bulk materials by volume, surface materials by area coverage, and
//! edging by perimeter, with purchase quantities always rounded up to the
//! nearest tenth of a unit. It also estimates paver patio excavation depth.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
