//! A `let` callable takes the host as its parameter.

use scopefn::ScopeFunctions;

struct Person;

impl ScopeFunctions for Person {}

fn answer() -> u32 {
    42
}

fn main() {
    let mut person = Person;
    let _ = person.r#let(answer);
}
