//! Core Kernel - Foundational types for the customer onboarding service
//!
//! This crate provides the building blocks shared by every other crate:
//! - Strongly-typed identifiers
//! - Port abstractions for the hexagonal architecture (errors, health checks)

pub mod identifiers;
pub mod ports;

pub use identifiers::CustomerId;
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
