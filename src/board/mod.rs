//! Kanban board task repository.
//!
//! Tasks are created, listed, updated, deleted and bulk-imported through
//! [`services::TaskService`], which enforces column membership, bounded field
//! sizes and per-column ordering. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Payload validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Position allocation in [`allocator`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod allocator;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
