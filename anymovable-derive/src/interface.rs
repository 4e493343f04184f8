use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{
  parse::{Parse, ParseStream},
  parse_quote,
  punctuated::Punctuated,
  Error, Ident, ItemTrait, Path, Token, TraitItem, TypeParamBound,
};

/// Arguments of the attribute.
#[derive(Debug)]
pub struct InterfaceArgs {
  krate: Path,
}

impl Default for InterfaceArgs {
  fn default() -> Self {
    Self {
      krate: parse_quote! { ::anymovable },
    }
  }
}

impl Parse for InterfaceArgs {
  fn parse(input: ParseStream) -> Result<Self, Error> {
    let mut args = Self::default();

    if input.is_empty() {
      return Ok(args);
    }

    let _: Token![crate] = input.parse()?;
    let _: Token![=] = input.parse()?;
    args.krate = input.parse()?;

    if !input.is_empty() {
      return Err(input.error("unexpected argument; only `crate = path` is supported"));
    }

    Ok(args)
  }
}

/// An interface declaration, validated.
#[derive(Debug)]
pub struct Interface {
  krate: Path,
  item: ItemTrait,
}

impl Interface {
  pub fn new(args: InterfaceArgs, mut item: ItemTrait) -> Result<Self, Error> {
    let krate = args.krate;

    if !item.generics.params.is_empty() {
      return Err(Error::new_spanned(&item.generics, "generic interfaces are not supported"));
    }

    for trait_item in &item.items {
      if let TraitItem::Method(method) = trait_item {
        let ident = &method.sig.ident;

        if ident.to_string().starts_with('_') {
          return Err(Error::new_spanned(ident, "method names starting with `_` are reserved"));
        }
      }
    }

    if !has_root(&krate, &item.supertraits) {
      let root: TypeParamBound = parse_quote! { #krate::Root };
      item.colon_token.get_or_insert_with(Default::default);
      item.supertraits.push(root);
    }

    Ok(Self { krate, item })
  }

  pub fn ident(&self) -> &Ident {
    &self.item.ident
  }
}

// `#krate::Root` or `anymovable::Root`, with or without leading `::`; a bare `Root` might be any trait
fn has_root(krate: &Path, supertraits: &Punctuated<TypeParamBound, Token![+]>) -> bool {
  let krate_root = segments(krate).chain(Some("Root".to_owned())).collect::<Vec<_>>();
  let default_root = ["anymovable", "Root"];

  supertraits.iter().any(|bound| match bound {
    TypeParamBound::Trait(bound) => {
      let path = segments(&bound.path).collect::<Vec<_>>();
      path == krate_root || path == default_root
    }
    _ => false,
  })
}

fn segments(path: &Path) -> impl Iterator<Item = String> + '_ {
  path.segments.iter().map(|segment| segment.ident.to_string())
}

impl ToTokens for Interface {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let krate = &self.krate;
    let item = &self.item;
    let ident = self.ident();

    let q = quote! {
      #item

      impl<T> #krate::Erase<dyn #ident> for #krate::Holder<T>
      where
        T: 'static,
        #krate::Holder<T>: #ident,
      {
        fn erase(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn #ident> {
          self
        }
      }
    };

    q.to_tokens(tokens);
  }
}
