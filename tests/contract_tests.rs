//! Compile-time contract checks.
//!
//! Each assertion below is evaluated by the compiler: a regression turns
//! into a build failure of this test crate rather than a runtime failure.
//!
//! - Parameter mismatch: `let`/`also` wrappers only chain onto a scope of
//!   exactly their parameter type.
//! - Arity mismatch: zero-parameter callables are not `Unary`, one-parameter
//!   callables are not `Nullary`.
//! - `with` is never a chain operand.
//!
//! The diagnostics for the same contracts are pinned in `compile_fail_tests.rs`.

#![cfg(feature = "wrappers")]

use rstest::rstest;
use scopefn::prelude::*;
use scopefn::chain::SameAs;
use scopefn::signature::{Output, Param};
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};
use std::ops::BitOr;

type LenOfVec = fn(&mut Vec<i32>) -> usize;
type LenOfString = fn(&mut String) -> usize;
type SortSlice = fn(&mut [i32]);
type Thunk = fn() -> bool;

// =============================================================================
// Signature
// =============================================================================

assert_impl_all!(LenOfVec: Signature<Unary<Vec<i32>>>);
assert_impl_all!(Thunk: Signature<Nullary>);
assert_not_impl_any!(LenOfVec: Signature<Nullary>, Signature<Unary<String>>, Signature<Unary<[i32]>>);
assert_not_impl_any!(Thunk: Signature<Unary<bool>>, Signature<Unary<()>>);

assert_type_eq_all!(Param<LenOfVec, Unary<Vec<i32>>>, Vec<i32>);
assert_type_eq_all!(Output<LenOfVec, Unary<Vec<i32>>>, usize);
assert_type_eq_all!(Output<Thunk, Nullary>, bool);

// =============================================================================
// Chaining operator
// =============================================================================

assert_impl_all!(Vec<i32>: SameAs<Vec<i32>>);
assert_impl_all!(str: SameAs<str>);
assert_not_impl_any!(String: SameAs<Vec<i32>>, SameAs<str>);
assert_not_impl_any!(Vec<i32>: SameAs<String>);

assert_impl_all!(
    Scope<'static, Vec<i32>>:
    BitOr<Let<LenOfVec, Vec<i32>>>,
    BitOr<Also<LenOfVec, Vec<i32>>>,
    BitOr<Run<Thunk>>,
    BitOr<Apply<Thunk>>,
);

assert_not_impl_any!(
    Scope<'static, Vec<i32>>:
    BitOr<Let<LenOfString, String>>,
    BitOr<Also<LenOfString, String>>,
    BitOr<Also<SortSlice, [i32]>>,
    BitOr<With<bool>>,
    BitOr<With<Vec<i32>>>,
);

assert_type_eq_all!(
    <Scope<'static, Vec<i32>> as BitOr<Let<LenOfVec, Vec<i32>>>>::Output,
    Scope<'static, usize>
);
assert_type_eq_all!(
    <Scope<'static, Vec<i32>> as BitOr<Also<LenOfVec, Vec<i32>>>>::Output,
    Scope<'static, Vec<i32>>
);
assert_type_eq_all!(
    <Scope<'static, Vec<i32>> as BitOr<Run<Thunk>>>::Output,
    Scope<'static, bool>
);

// =============================================================================
// Runtime counterparts
// =============================================================================

#[rstest]
fn function_pointers_chain_like_closures() {
    fn length(values: &mut Vec<i32>) -> usize {
        values.len()
    }

    let mut values = vec![1, 2, 3];
    let result = scope(&mut values) | r#let(length as LenOfVec);

    assert_eq!(*result, 3);
}

#[rstest]
fn function_items_deduce_their_signature() {
    fn double(value: &mut u32) {
        *value *= 2;
    }

    fn seed() -> u32 {
        21
    }

    let result = Scope::owned(()) | run(seed) | also(double);

    assert_eq!(result.into_owned(), 42);
}
