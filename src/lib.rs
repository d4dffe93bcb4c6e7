//! Pavilion Sports back office
//!
//! Admin HTTP API for the gallery, catalog and customers, plus the run-once
//! migration and diagnostic programs under `src/bin/`. Every handler maps a
//! request onto one parameterized SQL statement and returns the rows as JSON.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod scripts;
pub mod state;
pub mod telemetry;
