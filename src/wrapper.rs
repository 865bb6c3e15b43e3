//! Free-standing combinator wrappers.
//!
//! For types that cannot implement [`ScopeFunctions`](crate::ScopeFunctions)
//! (foreign types such as `Vec<T>` or `String`), each combinator is also
//! available as a small value that owns its callable. A wrapper is built at
//! the call site and consumed right away, either by its `call` method or as
//! the right operand of the chaining operator `|` (see [`crate::chain`]).
//!
//! | Constructor | Callable receives | Produces                        |
//! |-------------|-------------------|---------------------------------|
//! | [`r#let`]   | the context       | the callable's result           |
//! | [`run`]     | nothing           | the callable's result           |
//! | [`also`]    | the context       | the context                     |
//! | [`apply`]   | nothing           | the context                     |
//! | [`with`]    | nothing           | the result, computed at once    |
//!
//! A wrapper is exactly as large as the callable it holds.

use std::marker::PhantomData;
use std::ops::Deref;

use crate::signature::{Nullary, Signature, Unary};

/// Wrapper for `let`: passes the context to the callable and yields its
/// result.
///
/// `T` is the parameter type deduced from the callable. When used with
/// `|`, it must equal the context type exactly.
#[must_use = "a wrapper does nothing until it is called or chained"]
pub struct Let<F, T: ?Sized> {
    function: F,
    context: PhantomData<fn(&mut T)>,
}

/// Wrapper for `run`: calls the callable with no argument and yields its
/// result. The context, if any, is ignored.
#[must_use = "a wrapper does nothing until it is called or chained"]
pub struct Run<F> {
    function: F,
}

/// Wrapper for `also`: passes the context to the callable and yields the
/// context itself.
#[must_use = "a wrapper does nothing until it is called or chained"]
pub struct Also<F, T: ?Sized> {
    function: F,
    context: PhantomData<fn(&mut T)>,
}

/// Wrapper for `apply`: calls the callable with no argument and yields the
/// context itself.
#[must_use = "a wrapper does nothing until it is called or chained"]
pub struct Apply<F> {
    function: F,
}

/// Result of [`with`]: the callable has already run.
///
/// `With` has no operator implementation, so it cannot be chained with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct With<R>(R);

/// Builds a [`Let`] wrapper.
///
/// # Examples
///
/// ```rust
/// use scopefn::wrapper::r#let;
///
/// let mut values = vec![1, 2, 3];
/// let largest = r#let(|it: &mut Vec<i32>| {
///     it.push(4);
///     it.iter().copied().max()
/// })
/// .call(&mut values);
///
/// assert_eq!(largest, Some(4));
/// assert_eq!(values.len(), 4);
/// ```
#[inline]
pub fn r#let<T, R, F>(function: F) -> Let<F, T>
where
    T: ?Sized,
    F: FnOnce(&mut T) -> R,
{
    Let {
        function,
        context: PhantomData,
    }
}

/// Builds a [`Run`] wrapper.
///
/// # Examples
///
/// ```rust
/// use scopefn::wrapper::run;
///
/// let greeting = String::from("hello world");
/// let shouted = run(|| greeting.to_uppercase()).call();
/// assert_eq!(shouted, "HELLO WORLD");
/// ```
#[inline]
pub fn run<R, F>(function: F) -> Run<F>
where
    F: FnOnce() -> R,
{
    Run { function }
}

/// Builds an [`Also`] wrapper.
///
/// # Examples
///
/// ```rust
/// use scopefn::wrapper::also;
///
/// let mut values = vec![3, 1, 2];
/// let sorted = also(|it: &mut Vec<i32>| it.sort()).call(&mut values);
/// sorted.push(4);
///
/// assert_eq!(values, vec![1, 2, 3, 4]);
/// ```
#[inline]
pub fn also<T, R, F>(function: F) -> Also<F, T>
where
    T: ?Sized,
    F: FnOnce(&mut T) -> R,
{
    Also {
        function,
        context: PhantomData,
    }
}

/// Builds an [`Apply`] wrapper.
///
/// # Examples
///
/// ```rust
/// use scopefn::wrapper::apply;
///
/// let mut calls = 0;
/// let mut label = String::from("ready");
///
/// let same = apply(|| calls += 1).call(&mut label);
/// same.push('!');
///
/// assert_eq!(calls, 1);
/// assert_eq!(label, "ready!");
/// ```
#[inline]
pub fn apply<R, F>(function: F) -> Apply<F>
where
    F: FnOnce() -> R,
{
    Apply { function }
}

/// Runs `function` immediately and wraps its result.
///
/// The callable is invoked exactly once, before `with` returns.
///
/// # Examples
///
/// ```rust
/// use scopefn::wrapper::with;
///
/// let mut name = String::from("Alice");
/// let cleared = with(|| {
///     name.clear();
///     name.is_empty()
/// });
///
/// assert!(cleared.into_inner());
/// assert_eq!(name, "");
/// ```
#[inline]
pub fn with<R, F>(function: F) -> With<R>
where
    F: FnOnce() -> R,
{
    With(<F as Signature<Nullary>>::invoke(function, &mut ()))
}

impl<F, T: ?Sized> Let<F, T>
where
    F: Signature<Unary<T>, Param = T>,
{
    /// Calls the wrapped function with `context` and returns its result.
    #[inline]
    pub fn call(self, context: &mut T) -> F::Output {
        self.function.invoke(context)
    }
}

impl<F> Run<F>
where
    F: Signature<Nullary, Param = ()>,
{
    /// Calls the wrapped function and returns its result.
    #[inline]
    pub fn call(self) -> F::Output {
        self.function.invoke(&mut ())
    }
}

impl<F, T: ?Sized> Also<F, T>
where
    F: Signature<Unary<T>, Param = T>,
{
    /// Calls the wrapped function with `context` and returns `context`.
    #[inline]
    pub fn call(self, context: &mut T) -> &mut T {
        self.function.invoke(context);
        context
    }
}

impl<F> Apply<F>
where
    F: Signature<Nullary, Param = ()>,
{
    /// Calls the wrapped function and returns `context` untouched.
    #[inline]
    pub fn call<T: ?Sized>(self, context: &mut T) -> &mut T {
        self.function.invoke(&mut ());
        context
    }
}

impl<R> With<R> {
    /// Consumes the wrapper and returns the computed value.
    #[inline]
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R> Deref for With<R> {
    type Target = R;

    #[inline]
    fn deref(&self) -> &R {
        &self.0
    }
}

impl<R> AsRef<R> for With<R> {
    #[inline]
    fn as_ref(&self) -> &R {
        &self.0
    }
}

macro_rules! impl_wrapper_debug {
    ($($wrapper:ident $(<$context:ident>)?),+ $(,)?) => {
        $(
            impl<F $(, $context: ?Sized)?> std::fmt::Debug for $wrapper<F $(, $context)?> {
                fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    formatter
                        .debug_struct(stringify!($wrapper))
                        .field("function", &std::any::type_name::<F>())
                        .finish()
                }
            }
        )+
    };
}

impl_wrapper_debug!(Let<T>, Run, Also<T>, Apply);

// Wrappers add no storage beyond the callable.
static_assertions::assert_eq_size!(Let<fn(&mut u8) -> u8, u8>, fn(&mut u8) -> u8);
static_assertions::assert_eq_size!(Also<fn(&mut u8), u8>, fn(&mut u8));
static_assertions::assert_eq_size!(Run<fn() -> u8>, fn() -> u8);
static_assertions::assert_eq_size!(Apply<fn()>, fn());
static_assertions::assert_eq_size!(With<u64>, u64);
