//! Derive macro implementation for yaepl

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, Type, Visibility};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// Types with a string conversion in `yaepl::EnvValue`.
const SUPPORTED_TYPES: &[&str] = &[
    "bool", "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize", "f32", "f64",
    "String",
];

/// `Populate` derive macro
///
/// Implements `yaepl::Populate` by generating the record's field table.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[yaepl(prefix = "PREFIX_")]`: Prepend a prefix to every key
///
/// **Field-level**:
/// - `#[yaepl = "key:NAME;required"]`: Annotation read at run time
///
/// Only `pub` fields are populated. Fields of types without a conversion are
/// described as unsupported and rejected at run time when annotated.
///
/// # Example
///
/// See the `yaepl` crate documentation for usage examples.
#[proc_macro_derive(Populate, attributes(yaepl))]
pub fn derive_populate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(not_a_record(input)),
        },
        _ => return Err(not_a_record(input)),
    };

    let prefix = StructAttrs::from_input(input)?.prefix;

    let descriptors = fields
        .iter()
        .map(field_descriptor)
        .collect::<syn::Result<Vec<_>>>()?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::yaepl::Populate for #struct_name #ty_generics #where_clause {
            const KEY_PREFIX: &'static str = #prefix;

            fn fields() -> ::std::vec::Vec<::yaepl::FieldDescriptor<Self>> {
                ::std::vec![#(#descriptors),*]
            }
        }
    })
}

fn not_a_record(input: &DeriveInput) -> syn::Error {
    syn::Error::new_spanned(
        &input.ident,
        "Populate can only be derived for structs with named fields",
    )
}

fn field_descriptor(field: &Field) -> syn::Result<TokenStream2> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };
    let field_type = &field.ty;

    let attrs = FieldAttrs::from_field(field)?;

    let name = ident.to_string();
    let type_name = type_name(field_type);
    let exported = matches!(field.vis, Visibility::Public(_));
    let annotation = match attrs.annotation {
        Some(annotation) => quote!(::core::option::Option::Some(#annotation)),
        None => quote!(::core::option::Option::None),
    };

    let (kind, assign) = if is_supported(field_type) {
        (
            quote!(<#field_type as ::yaepl::EnvValue>::KIND),
            quote! {
                ::core::option::Option::Some(
                    |record: &mut Self, raw: &str| -> ::core::result::Result<(), ::yaepl::ConversionError> {
                        record.#ident = <#field_type as ::yaepl::EnvValue>::parse_env(raw)?;
                        ::core::result::Result::Ok(())
                    }
                )
            },
        )
    } else {
        (
            quote!(::yaepl::FieldKind::Unsupported),
            quote!(::core::option::Option::None),
        )
    };

    Ok(quote! {
        ::yaepl::FieldDescriptor {
            name: #name,
            kind: #kind,
            type_name: #type_name,
            exported: #exported,
            annotation: #annotation,
            assign: #assign,
        }
    })
}

/// Whether `ty` names one of [`SUPPORTED_TYPES`].
///
/// Matching is syntactic: aliases of supported types are unsupported.
fn is_supported(ty: &Type) -> bool {
    let ty = match ty {
        Type::Group(group) => &*group.elem,
        Type::Paren(paren) => &*paren.elem,
        ty => ty,
    };
    let Type::Path(type_path) = ty else {
        return false;
    };
    if type_path.qself.is_some() {
        return false;
    }

    let segments: Vec<String> = type_path
        .path
        .segments
        .iter()
        .map(|seg| seg.ident.to_string())
        .collect();
    let plain = type_path
        .path
        .segments
        .iter()
        .all(|seg| seg.arguments.is_empty());
    if !plain {
        return false;
    }

    match segments.as_slice() {
        [single] => SUPPORTED_TYPES.contains(&single.as_str()),
        [krate, module, last] => {
            matches!(krate.as_str(), "std" | "alloc") && module == "string" && last == "String"
        }
        _ => false,
    }
}

/// Source text of a type without the spacing added by token printing.
fn type_name(ty: &Type) -> String {
    let printed = quote!(#ty).to_string();
    let chars: Vec<char> = printed.chars().collect();
    let tight = |c: Option<char>| {
        matches!(
            c,
            Some('<' | '>' | ':' | '&' | '(' | ')' | '[' | ']' | ';' | ',')
        )
    };

    let mut name = String::with_capacity(printed.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = name.chars().last();
            let next = chars.get(i + 1).copied();
            if prev != Some(',') && (tight(prev) || tight(next)) {
                continue;
            }
        }
        name.push(c);
    }
    name
}
