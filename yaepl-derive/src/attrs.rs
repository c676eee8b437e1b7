//! Attribute parsing for `#[yaepl ...]` annotations.
//!
//! Field annotations are kept verbatim; their clauses are interpreted at
//! run time by `yaepl::Directive::parse`.

use syn::{Attribute, DeriveInput, Expr, ExprLit, Field, Lit, Meta};

const ATTR: &str = "yaepl";

/// Parsed `#[yaepl = "..."]` attribute of a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Annotation string, e.g. `"key:DATABASE_URL;required"`.
    pub annotation: Option<String>,
}

impl FieldAttrs {
    /// Extract the annotation from a struct field.
    ///
    /// Attributes other than `yaepl` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in yaepl_attrs(&field.attrs) {
            let Meta::NameValue(name_value) = &attr.meta else {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected a field annotation like `#[yaepl = \"key:NAME\"]`",
                ));
            };

            let Expr::Lit(ExprLit {
                lit: Lit::Str(annotation),
                ..
            }) = &name_value.value
            else {
                return Err(syn::Error::new_spanned(
                    &name_value.value,
                    "expected a string literal like `#[yaepl = \"key:NAME\"]`",
                ));
            };

            if attrs.annotation.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate `yaepl` annotation on field",
                ));
            }
            attrs.annotation = Some(annotation.value());
        }

        Ok(attrs)
    }
}

/// Parsed `#[yaepl(...)]` attributes of the struct itself.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prepended to every key before lookup.
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in yaepl_attrs(&input.attrs) {
            attr.parse_nested_meta(|meta| {
                // prefix = "..."
                if meta.path.is_ident("prefix") {
                    let value = meta.value()?;
                    let prefix: syn::LitStr = value.parse()?;
                    attrs.prefix = prefix.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level yaepl attribute"))
            })?;
        }

        Ok(attrs)
    }
}

fn yaepl_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident(ATTR))
}
