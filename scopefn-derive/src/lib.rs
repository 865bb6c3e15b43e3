//! Derive macro for scopefn.
//!
//! `#[derive(ScopeFunctions)]` opts a type into `scopefn::ScopeFunctions`,
//! giving it the `let`, `run`, `apply` and `also` methods. The generated
//! code is an empty trait implementation: no fields, no vtable, no change
//! to the type's layout.
//!
//! # Example
//!
//! ```rust,ignore
//! use scopefn::ScopeFunctions;
//!
//! #[derive(Default, ScopeFunctions)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut person = Person::default();
//! person.also(|it| it.age = 8).also(|it| it.name.push_str("Alice"));
//! assert_eq!(person.age, 8);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod scope_functions;

use proc_macro::TokenStream;

/// Derive macro implementing `scopefn::ScopeFunctions` for a type.
///
/// Works on structs, enums and unions, with or without generic parameters.
/// Generic bounds and where clauses of the type are carried over unchanged.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl<T: Bound> ::scopefn::ScopeFunctions for Name<T> where ... {}
/// ```
///
/// # Attributes
///
/// `#[scopefn(crate = "path")]` overrides the path of the `scopefn` crate,
/// for code that re-exports it under another name.
///
/// ```rust,ignore
/// #[derive(ScopeFunctions)]
/// #[scopefn(crate = "my_reexport::scopefn")]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
/// ```
#[proc_macro_derive(ScopeFunctions, attributes(scopefn))]
pub fn derive_scope_functions(input: TokenStream) -> TokenStream {
    scope_functions::derive_scope_functions_impl(input)
}
