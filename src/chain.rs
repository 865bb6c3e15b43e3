//! The chaining operator.
//!
//! A [`Scope`] is the left operand of `|`; a wrapper from
//! [`crate::wrapper`] is the right operand. Each application runs the
//! wrapper's callable once, immediately, and yields the `Scope` consumed by
//! the next `|`, so pipelines read left to right:
//!
//! ```rust
//! use scopefn::prelude::*;
//!
//! let mut values = vec![1, 2, 3];
//!
//! let result = scope(&mut values)
//!     | also(|it: &mut Vec<i32>| it.push(4))
//!     | r#let(|it: &mut Vec<i32>| it.iter().copied().max().unwrap_or_default())
//!     | r#let(|max: &mut i32| *max * 2);
//!
//! assert_eq!(*result, 8);
//! assert_eq!(values, vec![1, 2, 3, 4]);
//! ```
//!
//! | Right operand | Callable receives | Next scope                  |
//! |---------------|-------------------|-----------------------------|
//! | `Let<F, T>`   | `&mut T`          | `Owned(result)`             |
//! | `Run<F>`      | nothing           | `Owned(result)`             |
//! | `Also<F, T>`  | `&mut T`          | the same scope              |
//! | `Apply<F>`    | nothing           | the same scope              |
//!
//! For `Let` and `Also` the callable's parameter type must be exactly the
//! scope's value type; no deref or unsizing coercion applies. A mismatch is
//! reported through [`SameAs`] at the `|` that joins the two.

use std::ops::{BitOr, Deref, DerefMut};

use crate::signature::{Nullary, Signature, Unary};
use crate::wrapper::{Also, Apply, Let, Run};

/// A context value threaded through a chain.
///
/// `Borrowed` aliases a value owned by the caller, so mutations made along
/// the chain are visible through the caller's handle. `Owned` holds a value
/// produced inside the chain (the result of `let` or `run`), or a temporary
/// handed to [`Scope::owned`].
#[derive(Debug)]
pub enum Scope<'a, T> {
    /// Exclusive borrow of a caller-owned value.
    Borrowed(&'a mut T),
    /// Value owned by the chain itself.
    Owned(T),
}

/// Starts a chain on a caller-owned value.
///
/// # Examples
///
/// ```rust
/// use scopefn::prelude::*;
///
/// let mut name = String::from("Alice");
/// let _ = scope(&mut name) | also(|it: &mut String| it.push_str(" Smith"));
/// assert_eq!(name, "Alice Smith");
/// ```
#[inline]
pub fn scope<T>(value: &mut T) -> Scope<'_, T> {
    Scope::Borrowed(value)
}

impl<'a, T> Scope<'a, T> {
    /// Starts a chain on a caller-owned value.
    #[inline]
    pub fn borrowed(value: &'a mut T) -> Self {
        Self::Borrowed(value)
    }

    /// Starts a chain on a temporary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scopefn::prelude::*;
    ///
    /// let largest = Scope::owned(vec![3, 9, 4])
    ///     | r#let(|it: &mut Vec<i32>| it.iter().copied().max());
    ///
    /// assert_eq!(largest.into_owned(), Some(9));
    /// ```
    #[inline]
    pub const fn owned(value: T) -> Self {
        Self::Owned(value)
    }

    /// Returns `true` if the scope aliases a caller-owned value.
    #[inline]
    pub const fn is_borrowed(&self) -> bool {
        matches!(self, Self::Borrowed(_))
    }

    /// Returns `true` if the scope owns its value.
    #[inline]
    pub const fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Returns a shared reference to the value.
    #[inline]
    pub fn get(&self) -> &T {
        match self {
            Self::Borrowed(value) => value,
            Self::Owned(value) => value,
        }
    }

    /// Returns an exclusive reference to the value.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        match self {
            Self::Borrowed(value) => value,
            Self::Owned(value) => value,
        }
    }

    /// Extracts the value, cloning it if the scope is borrowed.
    #[inline]
    pub fn into_owned(self) -> T
    where
        T: Clone,
    {
        match self {
            Self::Borrowed(value) => value.clone(),
            Self::Owned(value) => value,
        }
    }

    /// Extracts an owned value, or hands back the borrow.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the original reference if the scope is borrowed.
    #[inline]
    pub fn try_into_owned(self) -> Result<T, &'a mut T> {
        match self {
            Self::Borrowed(value) => Err(value),
            Self::Owned(value) => Ok(value),
        }
    }

    /// Extracts the original reference, or hands back the owned value.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the value if the scope owns it.
    #[inline]
    pub fn into_borrowed(self) -> Result<&'a mut T, T> {
        match self {
            Self::Borrowed(value) => Ok(value),
            Self::Owned(value) => Err(value),
        }
    }
}

impl<'a, T> From<&'a mut T> for Scope<'a, T> {
    #[inline]
    fn from(value: &'a mut T) -> Self {
        Self::Borrowed(value)
    }
}

impl<T> Deref for Scope<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T> DerefMut for Scope<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T> AsRef<T> for Scope<'_, T> {
    #[inline]
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<T> AsMut<T> for Scope<'_, T> {
    #[inline]
    fn as_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

/// Exact type equality between a wrapper's parameter type and the context
/// type of the scope it is chained onto.
///
/// Implemented only for `T: SameAs<T>`.
#[diagnostic::on_unimplemented(
    message = "`let`/`also` parameter type `{Self}` does not match the context type `{T}`",
    label = "callable must take `&mut {T}`",
    note = "the parameter type must equal the context type exactly"
)]
pub trait SameAs<T: ?Sized> {
    /// Views the context as the parameter type.
    fn same_mut(context: &mut T) -> &mut Self;
}

impl<T: ?Sized> SameAs<T> for T {
    #[inline]
    fn same_mut(context: &mut T) -> &mut T {
        context
    }
}

impl<'a, T, U, F> BitOr<Let<F, U>> for Scope<'a, T>
where
    U: SameAs<T> + ?Sized,
    F: Signature<Unary<U>, Param = U>,
    F::Output: 'a,
{
    type Output = Scope<'a, F::Output>;

    #[inline]
    fn bitor(mut self, wrapper: Let<F, U>) -> Self::Output {
        Scope::Owned(wrapper.call(U::same_mut(self.get_mut())))
    }
}

impl<'a, T, F> BitOr<Run<F>> for Scope<'a, T>
where
    F: Signature<Nullary, Param = ()>,
    F::Output: 'a,
{
    type Output = Scope<'a, F::Output>;

    #[inline]
    fn bitor(self, wrapper: Run<F>) -> Self::Output {
        Scope::Owned(wrapper.call())
    }
}

impl<T, U, F> BitOr<Also<F, U>> for Scope<'_, T>
where
    U: SameAs<T> + ?Sized,
    F: Signature<Unary<U>, Param = U>,
{
    type Output = Self;

    #[inline]
    fn bitor(mut self, wrapper: Also<F, U>) -> Self {
        wrapper.call(U::same_mut(self.get_mut()));
        self
    }
}

impl<T, F> BitOr<Apply<F>> for Scope<'_, T>
where
    F: Signature<Nullary, Param = ()>,
{
    type Output = Self;

    #[inline]
    fn bitor(mut self, wrapper: Apply<F>) -> Self {
        wrapper.call(self.get_mut());
        self
    }
}
