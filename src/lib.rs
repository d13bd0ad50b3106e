//! Kanban board persistence layer.
//!
//! This crate stores kanban tasks, keeps them ordered within their workflow
//! columns and exposes create, read, update, delete and bulk-import
//! operations with defined validation, concurrency and failure semantics.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`board`]: Task model, validation, ordering and repository service
//! - [`config`]: Storage and connection pool configuration

pub mod board;
pub mod config;
