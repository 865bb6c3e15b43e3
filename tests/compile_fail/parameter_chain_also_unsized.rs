//! An `also` callable does not accept a coercible parameter type.

use scopefn::prelude::{also, scope};

fn sort_in_place(values: &mut [i32]) {
    values.sort_unstable();
}

fn main() {
    let mut values: Vec<i32> = vec![3, 1, 2];
    let _ = scope(&mut values) | also(sort_in_place);
}
