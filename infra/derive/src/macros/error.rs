use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Fields, FieldsNamed, Ident, Type, Variant};

/// What the expansion needs to know about one enum variant.
struct VariantInfo<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    /// Named fields other than `source` and `context`.
    extra_fields: usize,
    cfg_attrs: Vec<Attribute>,
}

impl VariantInfo<'_> {
    /// A `From<Source>` conversion is only possible when the variant can be
    /// built from the source alone.
    const fn is_convertible(&self) -> bool {
        self.source.is_some() && self.has_context && self.extra_fields == 0
    }
}

pub(crate) fn expand(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let ext_trait = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("interop_error can only be applied to enums"); };
    };

    let variants = match data.variants.iter().map(inspect_variant).collect::<Result<Vec<_>, _>>() {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };
    if let Err(err) = require_context_for_sources(&variants) {
        return err.to_compile_error();
    }

    let derives = missing_derives(&input);
    let context_trait = context_trait(name, &ext_trait, &variants);
    let conversions =
        variants.iter().filter(|v| v.is_convertible()).map(|v| conversion(name, &ext_trait, v));
    let internal = internal_conversions(name, &variants);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #context_trait
        #(#conversions)*
        #internal

        #[allow(dead_code)]
        fn format_context(
            context: &Option<std::borrow::Cow<'static, str>>,
        ) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| {
                std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    }
}

fn inspect_variant(variant: &Variant) -> syn::Result<VariantInfo<'_>> {
    const NAMED_ONLY: &str = "interop_error variants must use named fields";
    let fields = match &variant.fields {
        Fields::Named(fields) => fields,
        Fields::Unnamed(fields) => return Err(syn::Error::new_spanned(fields, NAMED_ONLY)),
        Fields::Unit => return Err(syn::Error::new(variant.ident.span(), NAMED_ONLY)),
    };

    let has_context = context_field(fields)?;
    let source = fields
        .named
        .iter()
        .find(|field| {
            field.ident.as_ref().is_some_and(|ident| ident == "source")
                || has_attr(field, "source")
                || has_attr(field, "from")
        })
        .and_then(|field| field.ident.as_ref().map(|ident| (ident, &field.ty)));

    let extra_fields = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .filter(|ident| *ident != "context" && source.is_none_or(|(src, _)| *ident != src))
        .count();

    Ok(VariantInfo {
        ident: &variant.ident,
        source,
        has_context,
        extra_fields,
        cfg_attrs: variant
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("cfg"))
            .cloned()
            .collect(),
    })
}

fn context_field(fields: &FieldsNamed) -> syn::Result<bool> {
    let is_context =
        |field: &&syn::Field| field.ident.as_ref().is_some_and(|ident| ident == "context");
    let Some(field) = fields.named.iter().find(is_context) else {
        return Ok(false);
    };

    if is_optional_cow_str(&field.ty) {
        Ok(true)
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn require_context_for_sources(variants: &[VariantInfo<'_>]) -> syn::Result<()> {
    match variants.iter().find(|v| v.source.is_some() && !v.has_context) {
        Some(v) => Err(syn::Error::new_spanned(
            v.ident,
            "interop_error variants with a source need `context: Option<Cow<'static, str>>`",
        )),
        None => Ok(()),
    }
}

fn missing_derives(input: &DeriveInput) -> TokenStream {
    let present = derived_traits(input);
    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !present.contains("Error") {
        derives.push(quote! { ::thiserror::Error });
    }

    if derives.is_empty() { quote! {} } else { quote! { #[derive(#(#derives),*)] } }
}

fn context_trait(name: &Ident, ext_trait: &Ident, variants: &[VariantInfo<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let cfg_attrs = &v.cfg_attrs;
        let ident = v.ident;
        quote! { #(#cfg_attrs)* #name::#ident { context: c, .. } => *c = Some(context.into()), }
    });

    quote! {
        pub trait #ext_trait<T> {
            fn context(
                self,
                context: impl Into<std::borrow::Cow<'static, str>>,
            ) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext_trait<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut e| {
                    match &mut e {
                        #( #arms )*
                        _ => {}
                    }
                    e
                })
            }
        }
    }
}

fn conversion(name: &Ident, ext_trait: &Ident, v: &VariantInfo<'_>) -> TokenStream {
    let Some((field, ty)) = v.source else {
        return quote! {};
    };
    let ident = v.ident;
    let cfg_attrs = &v.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfg_attrs)*
        impl<T> #ext_trait<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(
                self,
                context: impl Into<std::borrow::Cow<'static, str>>,
            ) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    }
}

fn internal_conversions(name: &Ident, variants: &[VariantInfo<'_>]) -> TokenStream {
    let Some(internal) = variants.iter().find(|v| v.ident == "Internal") else {
        return quote! {};
    };
    let cfg_attrs = &internal.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self {
                Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None }
            }
        }
        #(#cfg_attrs)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self {
                Self::Internal { message: std::borrow::Cow::Owned(s), context: None }
            }
        }
    }
}

fn has_attr(field: &syn::Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

fn derived_traits(input: &DeriveInput) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}

/// Matches `Option<Cow<'static, str>>`, with or without leading paths.
fn is_optional_cow_str(ty: &Type) -> bool {
    let Some(inner) = single_generic(ty, "Option") else {
        return false;
    };
    let Type::Path(path) = inner else {
        return false;
    };
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if segment.ident != "Cow" {
        return false;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };

    let mut args = args.args.iter();
    let is_static =
        matches!(args.next(), Some(syn::GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let is_str = matches!(
        args.next(),
        Some(syn::GenericArgument::Type(Type::Path(p)))
            if p.path.segments.last().is_some_and(|s| s.ident == "str")
    );

    is_static && is_str
}

fn single_generic<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
