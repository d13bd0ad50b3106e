//! Task payload validation.
//!
//! Validation is pure and deterministic: it never touches storage, so every
//! rule can be exercised without a database.

mod error;
mod limits;
mod payload;
pub mod rules;
mod service;

pub use error::ValidationError;
pub use limits::ValidationLimits;
pub use payload::{TaskPayload, TitleRequirement};
pub use service::{TaskValidator, ValidationResult};
