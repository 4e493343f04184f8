//! Types that can be erased behind an interface.

/// Conversion of a boxed object into its interface object `I`.
///
/// This is the glue between the storage ([`Holder`](crate::Holder)) and the interface implemented on it: for every
/// interface `dyn Interface`, [`Holder<T>`](crate::Holder) implements `Erase<dyn Interface>` as soon as it implements
/// `Interface`. The conversion itself is a plain unsizing coercion.
///
/// You shouldn’t have to implement this trait by hand: use either the [`interface`](crate::interface) attribute or the
/// [`erasable!`](crate::erasable) macro.
pub trait Erase<I>
where
  I: ?Sized,
{
  /// Turn the boxed object into its interface object.
  fn erase(self: Box<Self>) -> Box<I>;
}

/// Implement [`Erase`] for a list of interfaces.
///
/// This is what the [`interface`](crate::interface) attribute generates. Use it when the `derive` feature is disabled,
/// or for interfaces declared outside of your control.
///
/// # Examples
///
/// ```
/// use anymovable::{erasable, AnyMovable, Holder, Root};
///
/// trait Area: Root {
///   fn area(&self) -> f32;
/// }
///
/// erasable!(Area);
///
/// impl Area for Holder<(f32, f32)> {
///   fn area(&self) -> f32 {
///     let (w, h) = self.object();
///     w * h
///   }
/// }
///
/// let rect = AnyMovable::<dyn Area>::new((2., 3.));
/// assert_eq!(rect.area(), 6.);
/// ```
#[macro_export]
macro_rules! erasable {
  ($($interface:path),+ $(,)?) => {
    $(
      impl<T> $crate::Erase<dyn $interface> for $crate::Holder<T>
      where
        T: 'static,
        $crate::Holder<T>: $interface,
      {
        fn erase(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn $interface> {
          self
        }
      }
    )+
  };
}
