//! A `run` callable takes no parameter.

use scopefn::prelude::run;

fn length(values: &mut Vec<i32>) -> usize {
    values.len()
}

fn main() {
    let _ = run(length);
}
