//! Subway line manager server.
//!
//! Maintains each subway line as a single directed chain of stations
//! connected by distance-weighted sections, and exposes HTTP endpoints
//! for editing the chain.

pub mod config;
pub mod domain;
pub mod store;
pub mod web;
