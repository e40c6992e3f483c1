//! Jakarta MRT schedule gateway.
//!
//! A read-only HTTP service that answers: "when is the next train from
//! this station, what does the ride cost, and what is around the station?"

pub mod config;
pub mod domain;
pub mod stations;
pub mod upstream;
pub mod web;
