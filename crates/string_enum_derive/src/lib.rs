//! Derive macro for string-backed enumerations.
//!
//! `#[derive(Enumeration)]` turns a field-less enum into a closed set of string-backed members:
//! - a `static` member table in declaration order (`Enumeration::members()`)
//! - the `Enumeration` trait impl (`values()`, `value_of()`, `equals()`, ...)
//! - `Display`, `AsRef<str>` and `FromStr` over the backing value
//! - value-based `PartialEq`, `Eq` and `Hash`, plus comparisons against `str`
//!
//! Do not also derive `PartialEq`, `Eq` or `Hash` on the same enum; the generated impls compare backing values,
//! so two variants sharing a value are equal.
//!
//! ## Attributes
//! - container `#[enumeration(rename_all = "snake_case")]`: default spelling of every value.
//! - variant `#[enumeration(value = "...")]`: explicit backing value.
//! - variant `#[enumeration(name = "...")]`: explicit registry key (defaults to the identifier).

use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Variant, parse_macro_input};

use string_enum_core::lang::rename::{self, RenameRule};
use string_enum_core::lang::reserved;

/// Generates the member table and trait impls for a string-backed enumeration.
///
/// # Example
/// ```ignore
/// #[derive(Debug, Clone, Copy, Enumeration)]
/// #[enumeration(rename_all = "SCREAMING_SNAKE_CASE")]
/// enum Status {
///     Active,
///     #[enumeration(value = "on-hold")]
///     OnHold,
/// }
///
/// // Generates (abridged):
/// impl Enumeration for Status {
///     const TYPE_NAME: &'static str = "Status";
///     fn members() -> &'static [Member<Self>] {
///         static MEMBERS: [Member<Status>; 2] = [
///             Member::new("Active", Status::Active, EnumValue::new("ACTIVE")),
///             Member::new("OnHold", Status::OnHold, EnumValue::new("on-hold")),
///         ];
///         &MEMBERS
///     }
///     // ...
/// }
/// ```
///
/// # Compile errors
///
/// A well-formed declaration compiles:
/// ```rust
/// use string_enum::prelude::*;
///
/// #[derive(Enumeration)]
/// #[enumeration(rename_all = "lowercase")]
/// enum Light {
///     Red,
///     #[enumeration(value = "amber", name = "Amber")]
///     Yellow,
/// }
///
/// assert_eq!(Light::Yellow.as_str(), "amber");
/// ```
///
/// Structs and unions are rejected:
/// ```compile_fail
/// use string_enum::prelude::*;
///
/// #[derive(Enumeration)]
/// struct Light;
/// ```
///
/// ```compile_fail
/// use string_enum::prelude::*;
///
/// #[derive(Enumeration)]
/// union Light {
///     bits: u8,
/// }
/// ```
///
/// Variants cannot carry fields:
/// ```compile_fail
/// use string_enum::prelude::*;
///
/// #[derive(Enumeration)]
/// enum Light {
///     Red,
///     Blinking(u8),
/// }
/// ```
///
/// Generic enums are rejected:
/// ```compile_fail
/// use string_enum::prelude::*;
///
/// #[derive(Enumeration)]
/// enum Light<const N: usize> {
///     Red,
/// }
/// ```
///
/// Unknown attribute keys are rejected, on the container and on variants:
/// ```compile_fail
/// use string_enum::prelude::*;
///
/// #[derive(Enumeration)]
/// #[enumeration(rename = "lowercase")]
/// enum Light {
///     Red,
/// }
/// ```
///
/// ```compile_fail
/// use string_enum::prelude::*;
///
/// #[derive(Enumeration)]
/// enum Light {
///     #[enumeration(alias = "crimson")]
///     Red,
/// }
/// ```
///
/// Unknown rename rules are rejected:
/// ```compile_fail
/// use string_enum::prelude::*;
///
/// #[derive(Enumeration)]
/// #[enumeration(rename_all = "Title Case")]
/// enum Light {
///     Red,
/// }
/// ```
///
/// Reserved member names are rejected, whether spelled by the identifier or by `name`:
/// ```compile_fail
/// use string_enum::prelude::*;
///
/// #[derive(Enumeration)]
/// #[allow(non_camel_case_types)]
/// enum Light {
///     values,
/// }
/// ```
///
/// ```compile_fail
/// use string_enum::prelude::*;
///
/// #[derive(Enumeration)]
/// enum Light {
///     #[enumeration(name = "valueOf")]
///     Red,
/// }
/// ```
///
/// Member names must be unique:
/// ```compile_fail
/// use string_enum::prelude::*;
///
/// #[derive(Enumeration)]
/// enum Light {
///     Red,
///     #[enumeration(name = "Red")]
///     Crimson,
/// }
/// ```
#[proc_macro_derive(Enumeration, attributes(enumeration))]
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_enumeration(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// One declared member, after attributes are applied.
struct MemberSpec {
    ident: Ident,
    name: String,
    value: String,
}

fn expand_enumeration(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let name_str = name.unraw().to_string();

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Enumeration can only be derived for field-less enums",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Enumeration cannot be derived for generic enums (member tables are `static`)",
        ));
    }

    let rule = parse_container_attrs(&input.attrs)?;

    let mut members: Vec<MemberSpec> = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        let member = parse_member(variant, rule)?;
        if members.iter().any(|m| m.name == member.name) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("duplicate member name `{}`", member.name),
            ));
        }
        members.push(member);
    }

    let count = members.len();
    let idents: Vec<&Ident> = members.iter().map(|m| &m.ident).collect();

    let entries = members.iter().map(|m| {
        let ident = &m.ident;
        let key = &m.name;
        let value = &m.value;
        quote! {
            ::string_enum::Member::new(#key, #name::#ident, ::string_enum::EnumValue::new(#value))
        }
    });

    let value_arms = idents.iter().enumerate().map(|(i, ident)| {
        quote! {
            #name::#ident => <Self as ::string_enum::Enumeration>::members()[#i].value()
        }
    });

    let expanded = quote! {
        #[automatically_derived]
        impl ::string_enum::Enumeration for #name {
            const TYPE_NAME: &'static str = #name_str;

            fn members() -> &'static [::string_enum::Member<Self>] {
                static MEMBERS: [::string_enum::Member<#name>; #count] = [#(#entries),*];
                &MEMBERS
            }

            fn enum_value(&self) -> &'static ::string_enum::EnumValue {
                match *self {
                    #(#value_arms,)*
                }
            }
        }

        #[automatically_derived]
        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as ::string_enum::Enumeration>::as_str(self))
            }
        }

        #[automatically_derived]
        impl ::core::convert::AsRef<str> for #name {
            fn as_ref(&self) -> &str {
                <Self as ::string_enum::Enumeration>::as_str(self)
            }
        }

        #[automatically_derived]
        impl ::core::str::FromStr for #name {
            type Err = ::string_enum::EnumError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                let member = <Self as ::string_enum::Enumeration>::try_value_of(s)?;
                ::core::result::Result::Ok(match *member {
                    #(#name::#idents => #name::#idents,)*
                })
            }
        }

        #[automatically_derived]
        impl ::core::cmp::PartialEq for #name {
            fn eq(&self, other: &Self) -> bool {
                <Self as ::string_enum::Enumeration>::strict_equals(self, other)
            }
        }

        #[automatically_derived]
        impl ::core::cmp::Eq for #name {}

        #[automatically_derived]
        impl ::core::hash::Hash for #name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(<Self as ::string_enum::Enumeration>::as_str(self), state)
            }
        }

        #[automatically_derived]
        impl ::core::cmp::PartialEq<str> for #name {
            fn eq(&self, other: &str) -> bool {
                <Self as ::string_enum::Enumeration>::as_str(self) == other
            }
        }

        #[automatically_derived]
        impl ::core::cmp::PartialEq<&str> for #name {
            fn eq(&self, other: &&str) -> bool {
                <Self as ::string_enum::Enumeration>::as_str(self) == *other
            }
        }

        #[automatically_derived]
        impl ::core::cmp::PartialEq<#name> for str {
            fn eq(&self, other: &#name) -> bool {
                self == <#name as ::string_enum::Enumeration>::as_str(other)
            }
        }

        #[automatically_derived]
        impl ::core::cmp::PartialEq<#name> for &str {
            fn eq(&self, other: &#name) -> bool {
                *self == <#name as ::string_enum::Enumeration>::as_str(other)
            }
        }
    };

    Ok(expanded)
}

fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<RenameRule> {
    let mut rule = RenameRule::default();

    for attr in attrs {
        if !attr.path().is_ident("enumeration") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let lit: LitStr = meta.value()?.parse()?;
                rule = rename::from_str(&lit.value()).ok_or_else(|| {
                    syn::Error::new_spanned(
                        &lit,
                        format!(
                            "unknown rename rule `{}`; expected one of {}",
                            lit.value(),
                            rename::accepted_spellings()
                        ),
                    )
                })?;
                Ok(())
            } else {
                Err(meta.error("unknown enumeration attribute; expected `rename_all`"))
            }
        })?;
    }

    Ok(rule)
}

fn parse_member(variant: &Variant, rule: RenameRule) -> syn::Result<MemberSpec> {
    if !matches!(variant.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            &variant.fields,
            "Enumeration members cannot carry fields; the backing value is set with `#[enumeration(value = \"...\")]`",
        ));
    }

    let ident = variant.ident.clone();
    let ident_str = ident.unraw().to_string();
    let mut name: Option<LitStr> = None;
    let mut value: Option<LitStr> = None;

    for attr in &variant.attrs {
        if !attr.path().is_ident("enumeration") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("value") {
                value = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("name") {
                name = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unknown enumeration attribute; expected `value` or `name`"))
            }
        })?;
    }

    let name = match name {
        Some(lit) => {
            check_not_reserved(&lit.value(), &lit)?;
            lit.value()
        }
        None => {
            check_not_reserved(&ident_str, &variant.ident)?;
            ident_str.clone()
        }
    };
    let value = value.map_or_else(|| rule.apply(&ident_str), |lit| lit.value());

    Ok(MemberSpec { ident, name, value })
}

fn check_not_reserved(name: &str, span: &impl quote::ToTokens) -> syn::Result<()> {
    match reserved::from_str(name) {
        Some(id) => Err(syn::Error::new_spanned(
            span,
            format!(
                "`{name}` is reserved (`{}` is a registry method); pick another name with `#[enumeration(name = \"...\")]`",
                reserved::as_str(id)
            ),
        )),
        None => Ok(()),
    }
}
