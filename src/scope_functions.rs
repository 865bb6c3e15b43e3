//! The scope-function capability for host types.
//!
//! A host type opts in by implementing [`ScopeFunctions`], either with an
//! empty `impl` block or with `#[derive(ScopeFunctions)]`. All four methods
//! are provided; the trait has no associated data, so opting in changes
//! neither the size nor the layout of the host and every call is statically
//! dispatched.
//!
//! | Method  | Callable receives | Returns               |
//! |---------|-------------------|-----------------------|
//! | `let`   | `&mut self`       | the callable's result |
//! | `run`   | nothing           | the callable's result |
//! | `apply` | nothing           | `&mut self`           |
//! | `also`  | `&mut self`       | `&mut self`           |
//!
//! `let` is a reserved word, so it is spelled `r#let` at definition and
//! call sites.
//!
//! # Examples
//!
//! ```rust
//! use scopefn::ScopeFunctions;
//!
//! #[derive(Debug, Default)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl ScopeFunctions for Person {}
//!
//! let mut person = Person { name: "Alice".into(), age: 20 };
//!
//! let greeting = person.r#let(|it| format!("hi {}", it.name));
//! assert_eq!(greeting, "hi Alice");
//!
//! person
//!     .also(|it| it.name.clear())
//!     .also(|it| it.age += 1);
//! assert_eq!(person.name, "");
//! assert_eq!(person.age, 21);
//! ```

use crate::signature::{Nullary, Signature, Unary};

#[cfg(feature = "wrappers")]
use crate::chain::Scope;

/// Adds `let`, `run`, `apply` and `also` to a host type.
///
/// Callables that receive the context must take exactly `&mut Self`;
/// a callable written for any other type is a type error at the call site.
/// Callables for `run` and `apply` take no parameter and capture what they
/// need from the enclosing scope.
///
/// Because `apply` holds `&mut self` for the duration of the call, its
/// callable cannot also capture the same host. It typically captures other
/// state: a shared handle to the data, a counter, or a value produced earlier
/// in the chain.
///
/// # Examples
///
/// ```rust
/// use scopefn::ScopeFunctions;
///
/// struct Counter(u32);
/// impl ScopeFunctions for Counter {}
///
/// let mut counter = Counter(1);
/// let mut log = Vec::new();
///
/// counter
///     .apply(|| log.push("start"))
///     .also(|it| it.0 *= 10)
///     .apply(|| log.push("end"));
///
/// assert_eq!(counter.0, 10);
/// assert_eq!(log, ["start", "end"]);
/// ```
pub trait ScopeFunctions {
    /// Passes `self` to `function` and returns its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scopefn::ScopeFunctions;
    ///
    /// struct Basket(Vec<u32>);
    /// impl ScopeFunctions for Basket {}
    ///
    /// let mut basket = Basket(vec![3, 1]);
    /// let largest = basket.r#let(|it| {
    ///     it.0.push(7);
    ///     it.0.iter().copied().max()
    /// });
    ///
    /// assert_eq!(largest, Some(7));
    /// assert_eq!(basket.0, vec![3, 1, 7]);
    /// ```
    #[inline]
    fn r#let<F, R>(&mut self, function: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        <F as Signature<Unary<Self>>>::invoke(function, self)
    }

    /// Calls `function` with no argument and returns its result.
    ///
    /// Takes `&self` so the callable may read the host through a shared
    /// capture.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scopefn::ScopeFunctions;
    ///
    /// struct Name(String);
    /// impl ScopeFunctions for Name {}
    ///
    /// let name = Name("Alice".into());
    /// let length = name.run(|| name.0.len());
    /// assert_eq!(length, 5);
    /// ```
    #[inline]
    fn run<F, R>(&self, function: F) -> R
    where
        F: FnOnce() -> R,
    {
        <F as Signature<Nullary>>::invoke(function, &mut ())
    }

    /// Calls `function` with no argument, discards its result and returns
    /// `self`.
    #[inline]
    fn apply<F, R>(&mut self, function: F) -> &mut Self
    where
        F: FnOnce() -> R,
    {
        <F as Signature<Nullary>>::invoke(function, &mut ());
        self
    }

    /// Passes `self` to `function`, discards its result and returns `self`.
    #[inline]
    fn also<F, R>(&mut self, function: F) -> &mut Self
    where
        F: FnOnce(&mut Self) -> R,
    {
        <F as Signature<Unary<Self>>>::invoke(function, self);
        self
    }

    /// Borrows `self` as the start of an operator chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scopefn::prelude::*;
    ///
    /// struct Tally(u32);
    /// impl ScopeFunctions for Tally {}
    ///
    /// let mut tally = Tally(2);
    /// let doubled = tally.scope()
    ///     | also(|it: &mut Tally| it.0 += 1)
    ///     | r#let(|it: &mut Tally| it.0 * 2);
    ///
    /// assert_eq!(*doubled, 6);
    /// ```
    #[cfg(feature = "wrappers")]
    #[inline]
    fn scope(&mut self) -> Scope<'_, Self>
    where
        Self: Sized,
    {
        Scope::Borrowed(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    struct Person {
        name: String,
        location: String,
        age: u32,
    }

    impl Person {
        fn move_to(&mut self, location: &str) {
            self.location = location.to_string();
        }
    }

    impl ScopeFunctions for Person {}

    fn alice() -> Person {
        Person {
            name: "Alice".to_string(),
            location: "London".to_string(),
            age: 20,
        }
    }

    #[rstest]
    fn let_returns_result_and_keeps_mutations() {
        let mut person = Person::default();

        let moved = person.r#let(|it| {
            it.name = "Alice".to_string();
            it.age = 20;
            it.location = "Amsterdam".to_string();
            it.move_to("London");
            it.location.clone()
        });

        assert_eq!(moved, "London");
        assert_eq!(person, alice());
    }

    #[rstest]
    fn run_reads_host_through_shared_capture() {
        let person = alice();
        let summary = person.run(|| format!("{} ({})", person.name, person.age));
        assert_eq!(summary, "Alice (20)");
    }

    #[rstest]
    fn run_invokes_exactly_once() {
        let person = alice();
        let calls = Cell::new(0);

        person.run(|| calls.set(calls.get() + 1));

        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn apply_returns_same_instance() {
        let mut person = alice();
        let original: *const Person = &person;

        let returned: *const Person = person.apply(|| ());

        assert!(std::ptr::eq(original, returned));
    }

    #[rstest]
    fn also_chain_mutates_one_instance() {
        let mut person = alice();

        person
            .also(|it| it.name.clear())
            .also(|it| it.location.clear())
            .also(|it| it.age = 0);

        assert_eq!(person, Person::default());
    }

    #[rstest]
    fn also_discards_callable_result() {
        let mut person = alice();
        let returned = person.also(|it| it.age * 2);
        assert_eq!(returned.age, 20);
    }

    #[cfg(feature = "derive")]
    #[rstest]
    fn derived_impl_resolves_inside_crate() {
        #[derive(scopefn_derive::ScopeFunctions)]
        struct Flag(bool);

        let mut flag = Flag(false);
        flag.also(|it| it.0 = true);

        assert!(flag.0);
    }
}
