//! Procedural macros for [anymovable](https://crates.io/crates/anymovable).
//!
//! You shouldn’t depend on this crate directly: its macros are re-exported by `anymovable` under the `derive`
//! feature, enabled by default.

mod interface;

use interface::{Interface, InterfaceArgs};
use proc_macro::TokenStream;
use quote::ToTokens;
use syn::{parse_macro_input, ItemTrait};

/// Declare an interface storable in an `AnyMovable`.
///
/// See the documentation of `anymovable::interface` for further details.
#[proc_macro_attribute]
pub fn interface(args: TokenStream, item: TokenStream) -> TokenStream {
  let args = parse_macro_input!(args as InterfaceArgs);
  let item = parse_macro_input!(item as ItemTrait);

  match Interface::new(args, item) {
    Ok(interface) => interface.into_token_stream().into(),
    Err(err) => err.to_compile_error().into(),
  }
}
