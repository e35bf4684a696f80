// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Deref, DerefMut};

/// Owning stand-in for a reference, used when element access yields a value.
///
/// Cursors that compute their elements rather than borrow them from storage
/// (e.g. a generator over a repeating pattern) cannot hand out `&Item`.
/// [`ReadCursor::capture`] wraps the computed value in this type so member
/// access still reads the way it would through a reference: the proxy derefs
/// to the held value, and `cursor.capture().is_ascii()` calls the method on
/// the element itself.
///
/// The proxy owns a copy and borrows nothing, so it can never dangle. It is
/// meant to live for exactly the access expression that produced it; keeping
/// one around is harmless but pointless, since it will not observe later
/// changes to the sequence.
///
/// Cursors with genuine reference access ([`RefCursor`]) never construct a
/// proxy - their borrows pass through with no extra indirection or copy.
///
/// # Examples
///
/// ```
/// use r3bl_seq_facade::ElementProxy;
///
/// let proxy = ElementProxy::new('f');
/// assert!(proxy.is_alphabetic());        // Deref to char::is_alphabetic.
/// assert_eq!(proxy.into_inner(), 'f');   // Recover the held value.
/// ```
///
/// [`ReadCursor::capture`]: crate::ReadCursor::capture
/// [`RefCursor`]: crate::RefCursor
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ElementProxy<T>(T);

mod impl_core {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> ElementProxy<T> {
        #[must_use]
        pub fn new(arg_value: T) -> Self { Self(arg_value) }

        /// Unwrap the held value.
        #[must_use]
        pub fn into_inner(self) -> T { self.0 }
    }

    impl<T> From<T> for ElementProxy<T> {
        fn from(arg_value: T) -> Self { Self(arg_value) }
    }
}

mod impl_deref {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> Deref for ElementProxy<T> {
        type Target = T;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl<T> DerefMut for ElementProxy<T> {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_access_forwards_to_held_value() {
        let proxy = ElementProxy::new("foof".to_string());
        assert_eq!(proxy.len(), 4);
        assert!(proxy.starts_with("foo"));
    }

    #[test]
    fn test_mutation_through_deref_mut() {
        let mut proxy = ElementProxy::new(vec![1, 2]);
        proxy.push(3);
        assert_eq!(proxy.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn test_proxy_holds_a_copy_not_a_borrow() {
        let source = [10_i32, 20];
        let proxy = ElementProxy::new(source[0]);
        // The array can move while the proxy is alive.
        let moved = source;
        assert_eq!(*proxy, 10);
        assert_eq!(moved[0], 10);
    }

    #[test]
    fn test_from_and_eq() {
        let proxy: ElementProxy<char> = 'x'.into();
        assert_eq!(proxy, ElementProxy::new('x'));
    }
}
