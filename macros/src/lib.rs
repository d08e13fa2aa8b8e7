//! Derive macros for the todo store.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates helpers for action enums (commands/events)
//! - `#[derive(State)]` - Generates version accessors for state structs
//!
//! # Example
//!
//! ```ignore
//! use todo_store_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     #[command]
//!     AddTodo { name: String },
//!
//!     #[event]
//!     ValidationFailed { error: String },
//! }
//!
//! assert!(TodoAction::AddTodo { name: "Buy milk".into() }.is_command());
//! assert!(TodoAction::ValidationFailed { error: "empty".into() }.is_event());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_command()` - Returns true if this variant is a command
/// - `is_event()` - Returns true if this variant is an event
///
/// Unmarked variants are neither.
///
/// # Attributes
///
/// - `#[command]` - Mark a variant as a command
/// - `#[event]` - Mark a variant as an event
///
/// Applying it to anything but an enum, or marking a variant as both a
/// command and an event, is a compile error.
#[proc_macro_derive(Action, attributes(command, event))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(&input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut command_patterns = Vec::new();
    let mut event_patterns = Vec::new();

    for variant in &data_enum.variants {
        let is_command = has_attribute(&variant.attrs, "command");
        let is_event = has_attribute(&variant.attrs, "event");

        if is_command && is_event {
            return syn::Error::new_spanned(variant, "Variant cannot be both #[command] and #[event]")
                .to_compile_error()
                .into();
        }

        let pattern = variant_pattern(&variant.ident, &variant.fields);

        if is_command {
            command_patterns.push(pattern);
        } else if is_event {
            event_patterns.push(pattern);
        }
    }

    let expanded = quote! {
        impl #name {
            /// Returns true if this action is a command
            #[must_use]
            pub const fn is_command(&self) -> bool {
                match self {
                    #(#command_patterns => true,)*
                    _ => false,
                }
            }

            /// Returns true if this action is an event
            #[must_use]
            pub const fn is_event(&self) -> bool {
                match self {
                    #(#event_patterns => true,)*
                    _ => false,
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for State structs
///
/// A field marked `#[version]` (of type `Option<Version>`) gets accessors:
/// - `version()` - current version, `None` until the state first changes
/// - `set_version(v)` - overwrite the version
/// - `bump_version()` - advance to the next version (`1` from `None`)
///
/// Structs without a `#[version]` field derive nothing. Applying it to
/// anything but a struct is a compile error.
///
/// # Example
///
/// ```ignore
/// use todo_store_macros::State;
/// use todo_store_core::version::Version;
///
/// #[derive(State, Clone, Debug)]
/// struct TodoState {
///     pub todos: Vec<String>,
///     #[version]
///     pub version: Option<Version>,
/// }
/// ```
#[proc_macro_derive(State, attributes(version))]
pub fn derive_state(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new_spanned(&input, "#[derive(State)] can only be used on structs")
            .to_compile_error()
            .into();
    };

    let Some(field) = data_struct
        .fields
        .iter()
        .find(|field| has_attribute(&field.attrs, "version"))
    else {
        return TokenStream::new();
    };

    let Some(field_name) = field.ident.as_ref() else {
        return syn::Error::new_spanned(field, "#[version] requires a named field")
            .to_compile_error()
            .into();
    };

    let expanded = quote! {
        impl #name {
            /// Get the current version of this state
            #[must_use]
            pub const fn version(&self) -> Option<todo_store_core::version::Version> {
                self.#field_name
            }

            /// Set the version of this state
            pub fn set_version(&mut self, version: todo_store_core::version::Version) {
                self.#field_name = Some(version);
            }

            /// Advance the version, starting at 1 for unversioned state
            pub fn bump_version(&mut self) {
                let next = self
                    .#field_name
                    .map_or(todo_store_core::version::Version::new(1), todo_store_core::version::Version::next);
                self.#field_name = Some(next);
            }
        }
    };

    TokenStream::from(expanded)
}

/// Match pattern that ignores a variant's fields
fn variant_pattern(variant: &Ident, fields: &Fields) -> proc_macro2::TokenStream {
    match fields {
        Fields::Named(_) => quote! { Self::#variant { .. } },
        Fields::Unnamed(_) => quote! { Self::#variant(..) },
        Fields::Unit => quote! { Self::#variant },
    }
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
