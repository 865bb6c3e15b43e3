//! A `let` callable chained onto a scope must take exactly the context type.

use scopefn::prelude::{r#let, scope};

fn length(text: &mut String) -> usize {
    text.len()
}

fn main() {
    let mut values: Vec<i32> = vec![1, 2, 3];
    let _ = scope(&mut values) | r#let(length);
}
