//! HTTP API Layer
//!
//! This crate provides the REST API for the customer onboarding service
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Customer creation and health checks
//! - **Middleware**: Tracing and request logging
//! - **DTOs**: Validated request bodies
//! - **Error Handling**: Consistent error responses
//!
//! The router only knows the inbound `CreateCustomerPort`; which adapters
//! sit behind it is decided by the server binary.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(Arc::new(use_case), config)
//!     .with_health_check(lookup)
//!     .with_health_check(persistence);
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;

use core_kernel::HealthCheckable;
use domain_customer::CreateCustomerPort;

use crate::config::ApiConfig;
use crate::middleware::request_logging_middleware;
use crate::handlers::{customer, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub create_customer: Arc<dyn CreateCustomerPort>,
    pub health_checks: Arc<Vec<Arc<dyn HealthCheckable>>>,
    pub config: ApiConfig,
}

impl AppState {
    /// Creates state with no readiness checks registered
    pub fn new(create_customer: Arc<dyn CreateCustomerPort>, config: ApiConfig) -> Self {
        Self {
            create_customer,
            health_checks: Arc::new(Vec::new()),
            config,
        }
    }

    /// Registers an adapter consulted by `GET /health/ready`
    pub fn with_health_check(mut self, adapter: Arc<dyn HealthCheckable>) -> Self {
        Arc::make_mut(&mut self.health_checks).push(adapter);
        self
    }
}

/// Creates the main API router
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let customer_routes = Router::new()
        .route("/", post(customer::create_customer));

    let api_routes = Router::new()
        .nest("/customers", customer_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
