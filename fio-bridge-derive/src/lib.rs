extern crate proc_macro;

use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Implements `Display` (rendering the value through its `Debug` form) and
/// `std::error::Error` for the annotated type, carrying over any generics
#[proc_macro_derive(Error)]
pub fn derive_error(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) =
        input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::std::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{:?}", self)
            }
        }
        impl #impl_generics ::std::error::Error for #name #ty_generics #where_clause {}
    };

    proc_macro::TokenStream::from(expanded)
}
