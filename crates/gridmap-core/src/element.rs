//! The two capabilities a container asks of the elements it manages.
//!
//! Elements behave like hardware signals and ports: handles whose state
//! changes through a shared reference. Both traits therefore take
//! `&self`, and implementors use interior mutability.

/// An element that accepts a value.
///
/// What a write means (immediate store, deferred update, event) is up to
/// the element.
pub trait Writable<V: ?Sized> {
    /// Apply `value` to this element.
    fn write(&self, value: &V);
}

/// An element that can be connected to a target.
///
/// `Target` is usually another element type (a port binding to a
/// signal), but can be anything the element knows how to attach to.
pub trait Bindable<Target: ?Sized> {
    /// Connect this element to `target`.
    fn bind(&self, target: &Target);
}
