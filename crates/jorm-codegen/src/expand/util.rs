use proc_macro2::TokenStream;

/// Unsuffixed integer literal, usable as a match pattern.
pub(crate) fn int(v: usize) -> TokenStream {
    let lit = proc_macro2::Literal::usize_unsuffixed(v);
    quote::quote!(#lit)
}
