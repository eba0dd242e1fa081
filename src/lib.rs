//! MRV Evo backend.
//!
//! A REST API over the `Items` catalogue table. [`model`] holds the wire types shared with API
//! consumers, [`server`] holds everything that runs inside the service.

pub mod model;
pub mod server;
