//! Trendix - short-horizon trend intelligence for a fixed instrument set.
//!
//! The analytic core turns a history of closing prices into a trend
//! forecast, a confidence score and a set of trade levels. Presentation
//! front-ends (terminal, HTTP) are thin adapters over [`core::analyzer`].

pub mod config;
pub mod core;
pub mod error;
pub mod forecast;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;
