//! Test utilities and mock elements for gridmap development.
//!
//! Provides hardware-flavoured stand-ins for the element traits:
//! [`Signal`] accepts writes, [`Port`] binds to a signal by name, and
//! [`BindLog`] records every target it is bound to.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridmap_core::{Bindable, Writable};
use std::cell::{Cell, RefCell};

/// A named value holder implementing [`Writable`].
///
/// Counts writes so tests can check a broadcast touched each element
/// exactly once.
#[derive(Debug, PartialEq)]
pub struct Signal<V> {
    name: String,
    value: RefCell<V>,
    writes: Cell<usize>,
}

impl<V> Signal<V> {
    pub fn new(name: impl Into<String>, init: V) -> Self {
        Self {
            name: name.into(),
            value: RefCell::new(init),
            writes: Cell::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of writes received so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl<V: Clone> Signal<V> {
    pub fn read(&self) -> V {
        self.value.borrow().clone()
    }
}

impl<V: Clone> Writable<V> for Signal<V> {
    fn write(&self, value: &V) {
        *self.value.borrow_mut() = value.clone();
        self.writes.set(self.writes.get() + 1);
    }
}

/// A named input that binds to a [`Signal`] of the same value type.
///
/// Remembers the name of the last signal it was bound to.
#[derive(Debug)]
pub struct Port<V> {
    name: String,
    bound: RefCell<Option<String>>,
    binds: Cell<usize>,
    _value: std::marker::PhantomData<V>,
}

impl<V> Port<V> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: RefCell::new(None),
            binds: Cell::new(0),
            _value: std::marker::PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the signal this port is bound to, if any.
    pub fn bound_to(&self) -> Option<String> {
        self.bound.borrow().clone()
    }

    pub fn is_bound(&self) -> bool {
        self.bound.borrow().is_some()
    }

    /// Number of bind calls received so far.
    pub fn binds(&self) -> usize {
        self.binds.get()
    }
}

impl<V> Bindable<Signal<V>> for Port<V> {
    fn bind(&self, target: &Signal<V>) {
        *self.bound.borrow_mut() = Some(target.name().to_string());
        self.binds.set(self.binds.get() + 1);
    }
}

/// Records a clone of every target it is bound to, in call order.
#[derive(Debug)]
pub struct BindLog<T> {
    targets: RefCell<Vec<T>>,
}

impl<T> Default for BindLog<T> {
    fn default() -> Self {
        Self {
            targets: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Clone> BindLog<T> {
    pub fn targets(&self) -> Vec<T> {
        self.targets.borrow().clone()
    }
}

impl<T: Clone> Bindable<T> for BindLog<T> {
    fn bind(&self, target: &T) {
        self.targets.borrow_mut().push(target.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_counts_writes() {
        let s = Signal::new("a", 0);
        s.write(&3);
        s.write(&4);
        assert_eq!(s.read(), 4);
        assert_eq!(s.writes(), 2);
    }

    #[test]
    fn port_remembers_last_binding() {
        let p = Port::<u8>::new("p");
        assert!(!p.is_bound());
        p.bind(&Signal::new("first", 0));
        p.bind(&Signal::new("second", 0));
        assert_eq!(p.bound_to(), Some("second".to_string()));
        assert_eq!(p.binds(), 2);
    }
}
