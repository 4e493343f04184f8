//! The type-erased container.

use crate::{
  erase::Erase,
  error::{Error, Result},
  holder::Holder,
  root::Root,
};
use std::{
  any, fmt,
  ops::{Deref, DerefMut},
};
use tracing::{debug, trace};

/// A move-only container storing an object of any type behind the interface `I`.
///
/// `I` is the interface object type — e.g. `dyn Print` — and every type `T` such that [`Holder<T>`] implements the
/// interface can be stored. Once stored, `T` doesn’t appear in the type of the container anymore: only the interface
/// is reachable.
///
/// # States
///
/// A container is either _empty_ or _holds exactly one object_. It’s empty when created with [`AnyMovable::empty`]
/// (or [`Default`]), after [`AnyMovable::clear`] and after its object was moved out with [`AnyMovable::take`]. Any
/// construction or emplacement makes it hold an object, replacing the previous one if any.
///
/// # Storage
///
/// The object is always allocated on the heap, whatever its size. Moving a container only moves a pointer.
///
/// # Copy
///
/// Stored types might be move-only, so containers are never [`Clone`].
///
/// # Accessing the interface
///
/// [`AnyMovable`] dereferences to `I`. It’s your responsibility to check [`AnyMovable::is_defined`] first:
/// dereferencing an empty container panics. [`AnyMovable::get_unchecked`] removes even that check, and
/// [`AnyMovable::get`] / [`AnyMovable::try_get`] are the checked variants.
///
/// # Examples
///
/// ```
/// use anymovable::{interface, AnyMovable, Holder};
/// use std::fmt::Display;
///
/// #[interface]
/// trait Print {
///   fn print(&self) -> String;
/// }
///
/// impl<T> Print for Holder<T>
/// where
///   T: Display + 'static,
/// {
///   fn print(&self) -> String {
///     format!("data = {}", self.object())
///   }
/// }
///
/// let mut x = AnyMovable::<dyn Print>::new('c');
/// assert_eq!(x.print(), "data = c");
///
/// x = AnyMovable::new("123");
/// assert_eq!(x.print(), "data = 123");
///
/// x = AnyMovable::new(1.45);
/// assert_eq!(x.print(), "data = 1.45");
/// ```
///
/// Storing a type that doesn’t implement the interface doesn’t compile:
///
/// ```compile_fail
/// use anymovable::{interface, AnyMovable, Holder};
///
/// #[interface]
/// trait Print {
///   fn print(&self) -> String;
/// }
///
/// impl Print for Holder<i32> {
///   fn print(&self) -> String {
///     self.object().to_string()
///   }
/// }
///
/// struct NotPrintable;
///
/// let x = AnyMovable::<dyn Print>::new(NotPrintable);
/// ```
pub struct AnyMovable<I>
where
  I: ?Sized + Root,
{
  stored: Option<Box<I>>,
}

impl<I> AnyMovable<I>
where
  I: ?Sized + Root,
{
  /// Create an empty container.
  pub const fn empty() -> Self {
    AnyMovable { stored: None }
  }

  /// Store `object`, moving it in.
  pub fn new<T>(object: T) -> Self
  where
    T: 'static,
    Holder<T>: Erase<I>,
  {
    AnyMovable {
      stored: Some(Self::erase(Holder::new(object))),
    }
  }

  /// Store an object of type `T` built from `args`.
  ///
  /// The object is built once, by [`From::from`], and ends up in the container directly.
  ///
  /// # Examples
  ///
  /// ```
  /// use anymovable::{interface, AnyMovable, Holder};
  ///
  /// #[interface]
  /// trait Len {
  ///   fn len(&self) -> usize;
  /// }
  ///
  /// impl Len for Holder<Vec<u8>> {
  ///   fn len(&self) -> usize {
  ///     self.object().len()
  ///   }
  /// }
  ///
  /// let x = AnyMovable::<dyn Len>::in_place::<Vec<u8>, _>("hello");
  /// assert_eq!(x.len(), 5);
  /// ```
  pub fn in_place<T, A>(args: A) -> Self
  where
    T: From<A> + 'static,
    Holder<T>: Erase<I>,
  {
    Self::in_place_with(|| T::from(args))
  }

  /// Store an object of type `T` built by the constructor `f`.
  pub fn in_place_with<T>(f: impl FnOnce() -> T) -> Self
  where
    T: 'static,
    Holder<T>: Erase<I>,
  {
    AnyMovable {
      stored: Some(Self::erase(Holder::with(f))),
    }
  }

  /// Store an object of type `T` built by the fallible constructor `f`.
  ///
  /// # Errors
  ///
  /// The error of `f`, untouched.
  pub fn try_in_place_with<T, E>(f: impl FnOnce() -> std::result::Result<T, E>) -> std::result::Result<Self, E>
  where
    T: 'static,
    Holder<T>: Erase<I>,
  {
    let object = f()?;
    Ok(Self::new(object))
  }

  /// Store an array of type `[E; N]`, moving the elements in one by one.
  ///
  /// # Errors
  ///
  /// [`Error::ElementCount`] if `elements` doesn’t yield exactly `N` elements.
  pub fn from_elements<E, const N: usize>(elements: impl IntoIterator<Item = E>) -> Result<Self>
  where
    E: 'static,
    Holder<[E; N]>: Erase<I>,
  {
    let holder = Holder::<[E; N]>::from_elements(elements)?;

    Ok(AnyMovable {
      stored: Some(Self::erase(holder)),
    })
  }

  fn erase<T>(holder: Holder<T>) -> Box<I>
  where
    T: 'static,
    Holder<T>: Erase<I>,
  {
    trace!(object = any::type_name::<T>(), "storing object");
    <Holder<T> as Erase<I>>::erase(Box::new(holder))
  }

  /// Whether an object is held.
  pub fn is_defined(&self) -> bool {
    self.stored.is_some()
  }

  /// Access the interface of the held object, if any.
  pub fn get(&self) -> Option<&I> {
    self.stored.as_deref()
  }

  /// Mutably access the interface of the held object, if any.
  pub fn get_mut(&mut self) -> Option<&mut I> {
    self.stored.as_deref_mut()
  }

  /// Access the interface of the held object.
  ///
  /// # Errors
  ///
  /// [`Error::Empty`] if the container is empty.
  pub fn try_get(&self) -> Result<&I> {
    self.get().ok_or(Error::Empty)
  }

  /// Mutably access the interface of the held object.
  ///
  /// # Errors
  ///
  /// [`Error::Empty`] if the container is empty.
  pub fn try_get_mut(&mut self) -> Result<&mut I> {
    self.get_mut().ok_or(Error::Empty)
  }

  /// Access the interface of the held object without checking the container holds one.
  ///
  /// # Safety
  ///
  /// The container must not be empty — see [`AnyMovable::is_defined`].
  pub unsafe fn get_unchecked(&self) -> &I {
    // SAFETY: the caller guarantees an object is held
    self.stored.as_deref().unwrap_unchecked()
  }

  /// Mutably access the interface of the held object without checking the container holds one.
  ///
  /// # Safety
  ///
  /// The container must not be empty — see [`AnyMovable::is_defined`].
  pub unsafe fn get_unchecked_mut(&mut self) -> &mut I {
    // SAFETY: the caller guarantees an object is held
    self.stored.as_deref_mut().unwrap_unchecked()
  }

  /// Replace the held object, if any, by an object of type `T` built from `args`.
  ///
  /// The previous object is dropped _before_ the new one is built. If building panics, the container is left empty.
  pub fn emplace<T, A>(&mut self, args: A) -> &mut I
  where
    T: From<A> + 'static,
    Holder<T>: Erase<I>,
  {
    self.emplace_with(|| T::from(args))
  }

  /// Replace the held object, if any, by an object of type `T` built by the constructor `f`.
  ///
  /// The previous object is dropped _before_ `f` is called.
  pub fn emplace_with<T>(&mut self, f: impl FnOnce() -> T) -> &mut I
  where
    T: 'static,
    Holder<T>: Erase<I>,
  {
    self.clear();
    &mut **self.stored.insert(Self::erase(Holder::with(f)))
  }

  /// Replace the held object, if any, by an object of type `T` built by the fallible constructor `f`.
  ///
  /// The previous object is dropped _before_ `f` is called and is not restored if `f` fails.
  ///
  /// # Errors
  ///
  /// The error of `f`, untouched. The container is then empty.
  pub fn try_emplace_with<T, E>(
    &mut self,
    f: impl FnOnce() -> std::result::Result<T, E>,
  ) -> std::result::Result<&mut I, E>
  where
    T: 'static,
    Holder<T>: Erase<I>,
  {
    self.clear();

    match f() {
      Ok(object) => Ok(&mut **self.stored.insert(Self::erase(Holder::new(object)))),
      Err(err) => {
        debug!(object = any::type_name::<T>(), "construction failed, container left empty");
        Err(err)
      }
    }
  }

  /// Drop the held object, if any.
  pub fn clear(&mut self) {
    if let Some(stored) = self.stored.take() {
      trace!(object = stored._type_name(), "releasing object");
    }
  }

  /// Move the held object out in a new container, leaving this one empty.
  pub fn take(&mut self) -> Self {
    AnyMovable {
      stored: self.stored.take(),
    }
  }
}

impl<I> Drop for AnyMovable<I>
where
  I: ?Sized + Root,
{
  fn drop(&mut self) {
    self.clear();
  }
}

impl<I> Default for AnyMovable<I>
where
  I: ?Sized + Root,
{
  fn default() -> Self {
    Self::empty()
  }
}

impl<I> Deref for AnyMovable<I>
where
  I: ?Sized + Root,
{
  type Target = I;

  /// # Panics
  ///
  /// If the container is empty.
  fn deref(&self) -> &Self::Target {
    match self.get() {
      Some(stored) => stored,
      None => panic!("{}", Error::Empty),
    }
  }
}

impl<I> DerefMut for AnyMovable<I>
where
  I: ?Sized + Root,
{
  /// # Panics
  ///
  /// If the container is empty.
  fn deref_mut(&mut self) -> &mut Self::Target {
    match self.get_mut() {
      Some(stored) => stored,
      None => panic!("{}", Error::Empty),
    }
  }
}

impl<I> fmt::Debug for AnyMovable<I>
where
  I: ?Sized + Root,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.stored {
      Some(ref stored) => f.debug_tuple("AnyMovable").field(&stored._type_name()).finish(),
      None => f.write_str("AnyMovable(<empty>)"),
    }
  }
}
