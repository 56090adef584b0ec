//! Crystal Shipping Core - Tracking number classification.
//!
//! This crate classifies shipping tracking numbers for the Crystal storefront
//! admin. It is used by:
//! - `cli` - Operator tooling for checking and batch-classifying numbers
//! - the admin order fulfillment flow, which stores the raw number and the
//!   detected provider tag on each order
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no logging,
//! no HTTP clients. Callers decide how to surface validation errors.
//!
//! # Modules
//!
//! - [`shipping`] - Carrier detection, validation, tracking links and display formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod shipping;

pub use shipping::*;
