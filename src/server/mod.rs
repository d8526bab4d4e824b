//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the booking admin service: HTTP
//! endpoints, booking and payment rules, data access, outbound gateway and mail
//! integrations, and the background expiry sweep. The backend uses Axum as the web
//! framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Booking validation, payment reconciliation and notifications
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, gateway client, notifier)
//! - **Startup** (`startup`) - Initialization of database, HTTP client and mailer
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Repeated jobs (stale booking expiry)
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to params, calls service
//! 3. **Service** applies booking rules, opens transactions, calls the gateway or mailer
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** returns domain model to controller
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
