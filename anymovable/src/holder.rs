//! Storage of the erased object.

use crate::error::{Error, Result};

/// Storage of exactly one object of type `T`.
///
/// A [`Holder`] is what an [`AnyMovable`](crate::AnyMovable) actually allocates. Interfaces are implemented on
/// [`Holder<T>`] rather than on `T`: the implementation reaches the wrapped value with [`Holder::object`] and
/// [`Holder::object_mut`]. Because the implementation is a regular `impl` block, it can either be generic over `T` or
/// target a single concrete type, if a type needs a different behavior.
///
/// # Examples
///
/// ```
/// use anymovable::{interface, Holder};
///
/// #[interface]
/// trait Describe {
///   fn describe(&self) -> String;
/// }
///
/// // every displayable type
/// impl<T> Describe for Holder<T>
/// where
///   T: std::fmt::Display + 'static,
/// {
///   fn describe(&self) -> String {
///     format!("<{}>", self.object())
///   }
/// }
///
/// // a type that is not displayable
/// struct Opaque;
///
/// impl Describe for Holder<Opaque> {
///   fn describe(&self) -> String {
///     "opaque".to_owned()
///   }
/// }
///
/// assert_eq!(Holder::new(3).describe(), "<3>");
/// assert_eq!(Holder::new(Opaque).describe(), "opaque");
/// ```
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Holder<T> {
  object: T,
}

impl<T> Holder<T> {
  /// Wrap an existing object, moving it in.
  pub const fn new(object: T) -> Self {
    Holder { object }
  }

  /// Build the wrapped object in place.
  ///
  /// `f` is the constructor of the object; it’s called exactly once and its result is stored as-is.
  pub fn with(f: impl FnOnce() -> T) -> Self {
    Holder { object: f() }
  }

  /// Access the wrapped object.
  pub fn object(&self) -> &T {
    &self.object
  }

  /// Mutably access the wrapped object.
  pub fn object_mut(&mut self) -> &mut T {
    &mut self.object
  }

  /// Unwrap the object.
  pub fn into_object(self) -> T {
    self.object
  }
}

/// Fixed-size sequences.
///
/// Arrays can be stored like any other type with [`Holder::new`]. On top of that, a holder of `[E; N]` can be built
/// one element at a time and gives access to its elements directly.
impl<E, const N: usize> Holder<[E; N]> {
  /// Build the array by moving each element of `elements` into its slot, in order.
  ///
  /// # Errors
  ///
  /// Fails with [`Error::ElementCount`] if `elements` doesn’t yield exactly `N` elements. At most `N + 1` elements are
  /// pulled from the iterator, so a surplus is reported as `found: N + 1` whatever the actual length. The elements
  /// already moved out of the iterator are dropped.
  pub fn from_elements(elements: impl IntoIterator<Item = E>) -> Result<Self> {
    let mut elements = elements.into_iter();
    let mut slots = Vec::with_capacity(N);

    for index in 0..N {
      match elements.next() {
        Some(element) => slots.push(element),
        None => return Err(Error::ElementCount { expected: N, found: index }),
      }
    }

    if elements.next().is_some() {
      return Err(Error::ElementCount { expected: N, found: N + 1 });
    }

    <[E; N]>::try_from(slots)
      .map(Holder::new)
      .map_err(|slots| Error::ElementCount { expected: N, found: slots.len() })
  }

  /// Number of elements.
  pub const fn len(&self) -> usize {
    N
  }

  /// Whether the array has no element at all.
  pub const fn is_empty(&self) -> bool {
    N == 0
  }

  /// Elements, as a slice.
  pub fn elements(&self) -> &[E] {
    &self.object
  }

  /// Elements, as a mutable slice.
  pub fn elements_mut(&mut self) -> &mut [E] {
    &mut self.object
  }

  /// Element at `index`, if in bounds.
  pub fn get(&self, index: usize) -> Option<&E> {
    self.object.get(index)
  }
}
