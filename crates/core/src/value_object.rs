//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Derived view values (report entries, share segments, checklist merge keys)
/// carry no identity of their own. They are recomputed on every pass and two
/// values with the same attributes are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Balance {
///     needed: f64,
///     stock: f64,
/// }
///
/// impl ValueObject for Balance {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
