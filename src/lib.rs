//! Vipps Recurring - subscription plans and payment API configuration
//!
//! This crate models recurring billing plans priced in NOK, resolves the
//! credentials and endpoint URLs of the Vipps Recurring API, and keeps
//! agreement and charge records with full revision history.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
