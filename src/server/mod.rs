//! Server application core modules.
//!
//! This module contains all server-side functionality for the MRV Evo backend: configuration,
//! HTTP routing and controllers, the item service and repository, and startup helpers for the
//! database connection, CORS policy and HTTP listener.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
