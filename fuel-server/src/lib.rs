//! Fuel-station price proxy.
//!
//! Fetches the public fuel-station price dataset on each request and
//! re-serves it as JSON, optionally narrowed to the stations nearest a
//! caller-supplied point and filtered by brand.

pub mod config;
pub mod domain;
pub mod query;
pub mod stations;
pub mod web;
