//! Composable comparison strategies.
//!
//! A [Comparator] orders two values of the same type. Strategies are built from a few
//! primitives and combined by wrapping one strategy in another:
//! * [Natural] - the [Ord] implementation of the type
//! * [ByField] - the natural order of a borrowed projection, for example a title
//! * [ByKey] - the natural order of a copied projection, for example a year
//! * [Reversed] - the opposite order of the wrapped strategy
//! * [Composite] - the primary strategy, with ties broken by the secondary strategy
//!
//! # Examples
//! ```
//! use text_record_sort::book::Book;
//! use text_record_sort::comparator::{ByField, Comparator};
//!
//! // author ascending, then title descending
//! let comparator = ByField::new(Book::author).then(ByField::new(Book::title).reversed());
//! let mut books = vec![
//!     Book::new(1, "Rings", "Tolkien"),
//!     Book::new(2, "Hobbit", "Tolkien"),
//! ];
//! books.sort_by(|a, b| comparator.compare(a, b));
//! assert_eq!(books[0].title(), "Rings");
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;

/// Compare two values of the same type.
pub trait Comparator<T: ?Sized> {
    /// Return [Ordering::Less] when `a` goes before `b`, [Ordering::Greater] when it goes after
    /// and [Ordering::Equal] when this strategy does not tell them apart.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Wrap this strategy in [Reversed].
    fn reversed(self) -> Reversed<Self>
        where Self: Sized {
        Reversed::new(self)
    }

    /// Wrap this strategy as the primary of a [Composite] with `secondary` breaking ties.
    fn then<C>(self, secondary: C) -> Composite<Self, C>
        where Self: Sized, C: Comparator<T> {
        Composite::new(self, secondary)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for Box<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// The natural order of `T`, as defined by its [Ord] implementation.
pub struct Natural<T: ?Sized> {
    _marker: PhantomData<fn(&T, &T)>,
}

impl<T: ?Sized> Natural<T> {
    pub fn new() -> Natural<T> {
        Natural {
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for Natural<T> {
    fn default() -> Self {
        Natural::new()
    }
}

impl<T: ?Sized> Clone for Natural<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Natural<T> {}

impl<T: Ord + ?Sized> Comparator<T> for Natural<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Compare by the natural order of a field borrowed from the value.
///
/// # Examples
/// ```
/// use text_record_sort::book::Book;
/// use text_record_sort::comparator::{ByField, Comparator};
///
/// let by_title = ByField::new(Book::title);
/// let rings = Book::new(1, "Rings", "Tolkien");
/// let hobbit = Book::new(2, "Hobbit", "Tolkien");
/// assert!(by_title.compare(&hobbit, &rings).is_lt());
/// ```
pub struct ByField<T: ?Sized, K: ?Sized, F> {
    project: F,
    _marker: PhantomData<fn(&T) -> &K>,
}

impl<T: ?Sized, K: ?Sized, F> ByField<T, K, F> {
    pub fn new(project: F) -> ByField<T, K, F>
        where F: Fn(&T) -> &K {
        ByField {
            project,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, K: Ord + ?Sized, F: Fn(&T) -> &K> Comparator<T> for ByField<T, K, F> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.project)(a).cmp((self.project)(b))
    }
}

/// Compare by the natural order of a key computed from the value.
pub struct ByKey<T: ?Sized, K, F> {
    key: F,
    _marker: PhantomData<fn(&T) -> K>,
}

impl<T: ?Sized, K, F> ByKey<T, K, F> {
    pub fn new(key: F) -> ByKey<T, K, F>
        where F: Fn(&T) -> K {
        ByKey {
            key,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, K: Ord, F: Fn(&T) -> K> Comparator<T> for ByKey<T, K, F> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

/// The opposite order of the wrapped strategy.
///
/// Reversing twice orders exactly like the wrapped strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<C> {
    inner: C,
}

impl<C> Reversed<C> {
    pub fn new(inner: C) -> Reversed<C> {
        Reversed {
            inner,
        }
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner.compare(a, b).reverse()
    }
}

/// Compare with the primary strategy, falling back to the secondary strategy on ties.
///
/// Multi-key chains are built by nesting. Nesting is associative:
/// `(a then b) then c` orders exactly like `a then (b then c)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Composite<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> Composite<P, S> {
    pub fn new(primary: P, secondary: S) -> Composite<P, S> {
        Composite {
            primary,
            secondary,
        }
    }
}

impl<T: ?Sized, P: Comparator<T>, S: Comparator<T>> Comparator<T> for Composite<P, S> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.primary.compare(a, b) {
            Ordering::Equal => {
                self.secondary.compare(a, b)
            }
            ordering => {
                ordering
            }
        }
    }
}
