//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity: two instances holding the same value are
/// interchangeable. Constructors validate, so an instance that exists is
/// always valid, and "changing" one means building a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(2.5), Price(2.5));
/// ```
///
/// In this workspace, a product's `Quantity` and `Price` are value objects.
/// The `Product` itself is an entity keyed by its `ProductId`.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
