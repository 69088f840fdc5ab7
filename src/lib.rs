//! procuraperu-data library
//!
//! In-process data service for the ProcuraPerú platform: filtered and
//! aggregated views over a dataset of Peruvian public procurement tenders
//! and supplier companies, with simulated backend latency.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle different aspects of the data service:
//!
//! - [`service`] - The [`service::ProcurementService`] call surface: queries, aggregates, alerts, export
//! - [`source`] - The pluggable [`source::DataSource`] trait and its in-memory implementation
//! - [`models`] - Data structures for tenders, companies, alerts and query envelopes
//! - [`fixtures`] - The bundled seed dataset
//! - [`export`] - Serialization of query results to files
//! - [`config`] - Service configuration with TOML loading
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! Consumers connect a service over a data source and call its async
//! operations; each one resolves after the configured simulated latency:
//!
//! ```no_run
//! use procuraperu_data::config::ServiceConfig;
//! use procuraperu_data::errors::AppResult;
//! use procuraperu_data::models::TenderFilters;
//! use procuraperu_data::service::ProcurementService;
//!
//! # async fn example() -> AppResult<()> {
//! let service = ProcurementService::seeded(ServiceConfig::default()).await?;
//!
//! let page = service.get_tenders(&TenderFilters::default()).await?;
//! println!("{} licitaciones", page.total);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod export;
pub mod fixtures;
pub mod models;
pub mod service;
pub mod source;
pub mod telemetry;
pub mod utils;
