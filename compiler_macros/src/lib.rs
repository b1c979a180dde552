use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, parse_macro_input};

/// Derive an inherent `name()` method for an enum that returns the variant
/// name.
///
/// For unit variants, the match arm uses `Type::Variant`.
/// For tuple variants, it uses `Type::Variant(..)`.
/// For struct variants, it uses `Type::Variant { .. }`.
///
/// # Example
///
/// ```rust
/// #[derive(EnumKindName)]
/// enum FieldKind { Scalar, Relation { target: String } }
/// # impl FieldKind { /* name() generated */ }
/// ```
#[proc_macro_derive(EnumKindName)]
pub fn derive_enum_kind_name(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(
            &input,
            "EnumKindName can only be derived for enums",
        )
        .to_compile_error()
        .into();
    };

    let arms = data_enum.variants.iter().map(|v| {
        let v_ident = &v.ident;
        let v_name = v_ident.to_string();
        match &v.fields {
            Fields::Unit => quote! { #name::#v_ident => #v_name },
            Fields::Unnamed(_) => quote! { #name::#v_ident(..) => #v_name },
            Fields::Named(_) => quote! { #name::#v_ident { .. } => #v_name },
        }
    });

    let expanded = quote! {
        impl #name {
            /// Return the enum variant name.
            #[must_use]
            pub fn name(&self) -> &'static str {
                match self {
                    #( #arms, )*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive a keyword mapping for a fieldless enum.
///
/// Each variant maps to its name in lowercase. The derive generates
/// `keyword(&self) -> &'static str` and
/// `from_keyword(&str) -> Option<Self>`; matching is case-sensitive and
/// unknown keywords yield `None`.
///
/// # Example
///
/// ```rust
/// #[derive(Keyword)]
/// enum DirectiveKey { Strict, Readonly }
/// // DirectiveKey::from_keyword("readonly") == Some(DirectiveKey::Readonly)
/// ```
#[proc_macro_derive(Keyword)]
pub fn derive_keyword(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(
            &input,
            "Keyword can only be derived for enums",
        )
        .to_compile_error()
        .into();
    };

    if let Some(variant) =
        variants.iter().find(|v| !matches!(v.fields, Fields::Unit))
    {
        return syn::Error::new_spanned(
            variant,
            "Keyword variants must not carry fields",
        )
        .to_compile_error()
        .into();
    }

    let idents: Vec<_> = variants.iter().map(|v| &v.ident).collect();
    let keywords: Vec<String> = idents
        .iter()
        .map(|ident| ident.to_string().to_lowercase())
        .collect();

    let expanded = quote! {
        impl #name {
            /// Return the keyword spelling of this variant.
            #[must_use]
            pub fn keyword(&self) -> &'static str {
                match self {
                    #( #name::#idents => #keywords, )*
                }
            }

            /// Look up a variant by its keyword spelling.
            #[must_use]
            pub fn from_keyword(keyword: &str) -> Option<Self> {
                match keyword {
                    #( #keywords => Some(#name::#idents), )*
                    _ => None,
                }
            }
        }
    };

    TokenStream::from(expanded)
}
