//! Spreadgate Core — the put-spread entry filter engine.
//!
//! One refresh is one pass through this crate:
//! - `data` fetches daily bars and the latest volatility quote
//! - `indicators` derives the trailing moving average
//! - `filters` evaluates the four entry preconditions
//! - `signal` classifies GREEN / WAITING / RED from pass-count and clock
//! - `snapshot` ties it together into a renderable state tree
//!
//! The calendar and every threshold come from an explicit
//! `DashboardConfig`; nothing reads ambient process state, so two
//! refreshes with the same inputs produce the same snapshot.

pub mod advisory;
pub mod calendar;
pub mod config;
pub mod data;
pub mod domain;
pub mod filters;
pub mod indicators;
pub mod signal;
pub mod snapshot;
