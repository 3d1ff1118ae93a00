//! backend-service: Minimal HTTP backend with an inert MongoDB connection.
pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod services;
pub mod startup;
