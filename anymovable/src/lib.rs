//! Anymovable, value-semantic type erasure for move-only types.
//!
//! This crate provides [`AnyMovable`], a container able to store an object of _any_ type behind an interface of your
//! choice. The stored type doesn’t need to implement [`Clone`], doesn’t need to be known by the container and doesn’t
//! need to share anything with the other types you store in the same container: all it needs is an implementation of
//! the interface.
//!
//! # Motivation
//!
//! Rust already has trait objects: `Box<dyn Trait>` erases the type of a value behind `Trait`. However, the trait
//! must be implemented by the stored type itself, which is not always possible (foreign types, foreign traits) nor
//! desirable (the same type might need different behaviors in different interfaces). [`AnyMovable`] splits the
//! problem in two axes, in the spirit of Sean Parent’s _runtime polymorphism_:
//!
//! - The _interface_: a trait describing what you can do with a stored object.
//! - The _implementation_: how the interface behaves for a given stored type. Implementations are written for
//!   [`Holder<T>`], the storage of the object, and reach the object with [`Holder::object`] and
//!   [`Holder::object_mut`]. Because [`Holder`] is defined by this crate, you can implement your own interfaces for
//!   any `T` — including types you don’t own — either generically or one type at a time.
//!
//! # How to use
//!
//! First, declare an interface with the [`interface`] attribute. Do not use method names starting with an underscore:
//! those are reserved for this crate.
//!
//! ```
//! # use anymovable::interface;
//! #[interface]
//! trait Print {
//!   fn print(&self) -> String;
//! }
//! ```
//!
//! Then, implement it for the types you want to store, on [`Holder`]. The implementation can target every type
//! meeting some bounds and be refined for specific types:
//!
//! ```
//! # use anymovable::interface;
//! # #[interface]
//! # trait Print {
//! #   fn print(&self) -> String;
//! # }
//! use anymovable::Holder;
//! use std::fmt::Display;
//!
//! impl<T> Print for Holder<T>
//! where
//!   T: Display + 'static,
//! {
//!   fn print(&self) -> String {
//!     format!("data = {}", self.object())
//!   }
//! }
//! ```
//!
//! Finally, store your objects:
//!
//! ```
//! # use anymovable::{interface, Holder};
//! # use std::fmt::Display;
//! # #[interface]
//! # trait Print {
//! #   fn print(&self) -> String;
//! # }
//! # impl<T> Print for Holder<T> where T: Display + 'static {
//! #   fn print(&self) -> String {
//! #     format!("data = {}", self.object())
//! #   }
//! # }
//! use anymovable::AnyMovable;
//!
//! let mut x = AnyMovable::<dyn Print>::new('c');
//! assert_eq!(x.print(), "data = c");
//!
//! x = AnyMovable::new(String::from("123"));
//! assert_eq!(x.print(), "data = 123");
//!
//! // build the object right in the container
//! x.emplace::<String, _>("456");
//! assert_eq!(x.print(), "data = 456");
//! ```
//!
//! You can wrap [`AnyMovable`] in your own type to add more features — such as comparison operators — as long as
//! they are implemented with the interface only.
//!
//! # What you get, what you don’t
//!
//! - Objects are always allocated on the heap. There is no small-object optimization, so moving a container is
//!   always as cheap as moving a pointer.
//! - Containers are move-only: the stored types might not be [`Clone`].
//! - Accessing the interface of an empty container panics. Check [`AnyMovable::is_defined`] first, or use the checked
//!   accessors.
//! - Once stored, the type of the object is gone: there is no downcasting.
//! - Nothing is synchronized. A container is a regular value, shared across threads the same way as any other.
//!
//! # Feature flags
//!
//! - `derive` (default): the [`interface`] attribute. Without it, use the [`erasable!`] macro.
//!
//! # Logging
//!
//! Storing and releasing objects emit [`tracing`] events at the `trace` level, carrying the name of the stored
//! type. Releasing covers every way an object goes away: [`AnyMovable::clear`], emplacement, and dropping or
//! overwriting the container. Failed emplacements are reported at the `debug` level.
//!
//! [`tracing`]: https://crates.io/crates/tracing

pub mod any;
pub mod erase;
pub mod error;
pub mod holder;
pub mod root;

pub use crate::{
  any::AnyMovable,
  erase::Erase,
  error::{Error, Result},
  holder::Holder,
  root::Root,
};

/// Declare an interface.
///
/// The attribute goes on a trait declaring the methods of the interface. It:
///
/// - adds [`Root`] as supertrait, if not already present;
/// - rejects methods starting with an underscore, which are reserved;
/// - implements [`Erase`] for every [`Holder<T>`] implementing the trait, so that `AnyMovable<dyn Trait>` can store
///   `T`.
///
/// Generic traits are not supported.
///
/// If this crate is re-exported under another name, pass its path with `#[interface(crate = path::to::anymovable)]`.
///
/// ```compile_fail
/// use anymovable::interface;
///
/// #[interface]
/// trait Print {
///   fn _print(&self);
/// }
/// ```
#[cfg(feature = "derive")]
pub use anymovable_derive::interface;
