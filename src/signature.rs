//! Compile-time signature introspection for callables.
//!
//! Every combinator in this crate needs two facts about the callable it is
//! given: whether it takes zero parameters or exactly one, and what it
//! returns. This module exposes those facts through a single trait,
//! [`Signature`], parameterised by an arity marker:
//!
//! - [`Nullary`]: the callable takes no parameter (`FnOnce() -> R`).
//! - [`Unary<A>`]: the callable takes the context object by exclusive
//!   reference (`FnOnce(&mut A) -> R`).
//!
//! "No parameter" is not an ordinary deducible type, so the zero-arity case
//! is a distinct instantiation of the same trait rather than `Unary<()>`.
//! Closures implement exactly one `FnOnce` signature, which makes the two
//! instantiations mutually exclusive for any real callable.
//!
//! # Examples
//!
//! ```rust
//! use scopefn::signature::{Nullary, Output, Param, Signature, Unary};
//!
//! fn arity_of<F: Signature<S>, S>(_: &F) -> usize {
//!     F::ARITY
//! }
//!
//! let thunk = || 42;
//! let receiver = |values: &mut Vec<i32>| values.len();
//!
//! assert_eq!(arity_of::<_, Nullary>(&thunk), 0);
//! assert_eq!(arity_of::<_, Unary<Vec<i32>>>(&receiver), 1);
//!
//! // Deduced types are available as ordinary type aliases.
//! let length: Output<fn(&mut Vec<i32>) -> usize, Unary<Vec<i32>>> = 3;
//! let _: Option<&Param<fn(&mut Vec<i32>) -> usize, Unary<Vec<i32>>>> = None;
//! assert_eq!(length, 3);
//! ```
//!
//! Generic code that invokes a nullary callable names the empty parameter
//! explicitly, since a bare `F: Signature<Nullary>` bound does not reveal
//! `F::Param`:
//!
//! ```rust
//! use scopefn::signature::{Nullary, Signature};
//!
//! fn call_thunk<F: Signature<Nullary, Param = ()>>(function: F) -> F::Output {
//!     function.invoke(&mut ())
//! }
//!
//! assert_eq!(call_thunk(|| 7), 7);
//! ```

use std::marker::PhantomData;

/// Arity marker for callables that take no parameter.
///
/// Uninhabited: it only ever appears as a type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nullary {}

/// Arity marker for callables that take one parameter, `&mut A`.
///
/// The parameter type is recorded with its reference and qualifiers
/// stripped, so `Unary<Person>` describes `FnOnce(&mut Person) -> R`.
pub struct Unary<A: ?Sized>(PhantomData<fn(&mut A)>);

impl<A: ?Sized> std::fmt::Debug for Unary<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Unary")
    }
}

/// The deduced signature of a callable with arity marker `Shape`.
///
/// Implemented automatically for every `FnOnce() -> R` (as
/// `Signature<Nullary>`) and every `FnOnce(&mut A) -> R` (as
/// `Signature<Unary<A>>`). Manual implementations are neither needed nor
/// expected.
///
/// # Associated Items
///
/// - `Param`: the parameter type, `()` for [`Nullary`].
/// - `Output`: the return type, possibly `()`.
/// - `ARITY`: `0` or `1`.
/// - `invoke`: calls the callable exactly once.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not have the callable shape `{Shape}`",
    label = "expected a callable taking no parameter (`Nullary`) or exactly `&mut A` (`Unary<A>`)",
    note = "`let`/`also` need `FnOnce(&mut Context) -> R`; `run`/`apply`/`with` need `FnOnce() -> R`"
)]
pub trait Signature<Shape>: Sized {
    /// Parameter type with reference stripped.
    type Param: ?Sized;

    /// Return type.
    type Output;

    /// Number of parameters, `0` or `1`.
    const ARITY: usize;

    /// Invokes the callable once. Nullary callables ignore `param`.
    fn invoke(self, param: &mut Self::Param) -> Self::Output;
}

impl<F, R> Signature<Nullary> for F
where
    F: FnOnce() -> R,
{
    type Param = ();
    type Output = R;
    const ARITY: usize = 0;

    #[inline]
    fn invoke(self, _param: &mut ()) -> R {
        self()
    }
}

impl<F, A, R> Signature<Unary<A>> for F
where
    A: ?Sized,
    F: FnOnce(&mut A) -> R,
{
    type Param = A;
    type Output = R;
    const ARITY: usize = 1;

    #[inline]
    fn invoke(self, param: &mut A) -> R {
        self(param)
    }
}

/// Parameter type deduced for `F` under arity marker `Shape`.
pub type Param<F, Shape> = <F as Signature<Shape>>::Param;

/// Return type deduced for `F` under arity marker `Shape`.
pub type Output<F, Shape> = <F as Signature<Shape>>::Output;
