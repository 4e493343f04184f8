use crate::holder::Holder;
use std::any;

/// Dispatch root of every interface.
///
/// Interfaces stored in an [`AnyMovable`](crate::AnyMovable) have [`Root`] as supertrait. The
/// [`interface`](crate::interface) attribute adds it for you, so an interface only ever lists its own methods. Dropping
/// the stored object goes through the trait object’s vtable, so nothing has to be declared for destruction.
///
/// Every method of [`Root`] starts with an underscore. That prefix is reserved: interfaces must not declare methods
/// starting with `_`.
pub trait Root: 'static {
  /// Name of the stored type.
  ///
  /// Only meant for diagnostics (logs, [`Debug`](std::fmt::Debug)); two different types might share the same name.
  #[doc(hidden)]
  fn _type_name(&self) -> &'static str;
}

impl<T> Root for Holder<T>
where
  T: 'static,
{
  fn _type_name(&self) -> &'static str {
    any::type_name::<T>()
  }
}
