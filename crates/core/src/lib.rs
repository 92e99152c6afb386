//! `pontual-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod validate;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{ClockEventId, EmployeeId};
pub use validate::{Charset, FieldError, FieldErrors, TextRule, is_email_shape};
pub use value_object::ValueObject;
