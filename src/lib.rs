//! # scopefn
//!
//! Zero-cost scope functions for Rust: thread a value through `let`, `run`,
//! `apply`, `also` and `with` at the point of use, without named
//! intermediates, boxing or dynamic dispatch.
//!
//! ## Overview
//!
//! - **Signature introspection** ([`signature`]): compile-time parameter and
//!   return types of zero- and one-parameter callables.
//! - **Capability trait** ([`ScopeFunctions`]): opt a host type into the four
//!   combinators as methods.
//! - **Free-standing wrappers** ([`wrapper`]): the same combinators as values,
//!   for types that cannot implement the trait.
//! - **Chaining operator** ([`chain`]): `scope(&mut value) | also(..) | r#let(..)`.
//!
//! Every contract is a type constraint. A callable whose parameter does not
//! match the context type, or whose arity does not match the combinator,
//! is rejected by the compiler.
//!
//! ## Feature Flags
//!
//! - `wrappers`: free-standing wrappers and the chaining operator
//! - `derive`: `#[derive(ScopeFunctions)]`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use scopefn::prelude::*;
//!
//! #[derive(Debug, ScopeFunctions)]
//! struct Person {
//!     name: String,
//!     location: String,
//!     age: u32,
//! }
//!
//! let age = Scope::owned(vec![1, 2, 3])
//!     | also(|it: &mut Vec<u32>| it.push(4))
//!     | r#let(|it: &mut Vec<u32>| it.iter().copied().max().unwrap_or_default())
//!     | also(|it: &mut u32| *it *= 2);
//!
//! let mut person = Person { name: "Alice".into(), location: "London".into(), age: 20 };
//! person
//!     .also(|it| it.age = *age)
//!     .also(|it| it.name.clear())
//!     .also(|it| it.location.clear());
//!
//! assert_eq!(person.age, 8);
//! assert!(person.name.is_empty() && person.location.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets `::scopefn` paths emitted by the derive macro resolve inside this crate.
extern crate self as scopefn;

/// Prelude module for convenient imports.
///
/// Re-exports the capability trait, the wrapper constructors and the
/// chaining entry points.
///
/// # Usage
///
/// ```rust
/// use scopefn::prelude::*;
/// ```
pub mod prelude {
    pub use crate::scope_functions::ScopeFunctions;
    pub use crate::signature::{Nullary, Signature, Unary};

    #[cfg(feature = "wrappers")]
    pub use crate::chain::{Scope, scope};

    #[cfg(feature = "wrappers")]
    pub use crate::wrapper::{Also, Apply, Let, Run, With, also, apply, r#let, run, with};

    #[cfg(feature = "derive")]
    pub use scopefn_derive::ScopeFunctions;
}

pub mod scope_functions;
pub mod signature;

#[cfg(feature = "wrappers")]
pub mod chain;

#[cfg(feature = "wrappers")]
pub mod wrapper;

pub use scope_functions::ScopeFunctions;

#[cfg(feature = "derive")]
pub use scopefn_derive::ScopeFunctions;
