//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable domain objects defined entirely by their
/// attribute values. Two value objects with the same values are equal; there
/// is no identity to track.
///
/// Example:
/// - `Cpf("12345678901")` is a value object
/// - `EmployeeProfile { id: EmployeeId(...), .. }` is an entity
///
/// The trait requires `Clone + PartialEq + Debug` so values can be copied,
/// compared and logged like primitives.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
