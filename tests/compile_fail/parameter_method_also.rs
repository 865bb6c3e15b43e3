//! A trait method callable must take exactly the host type.

use scopefn::ScopeFunctions;

struct Person;

impl ScopeFunctions for Person {}

fn main() {
    let mut person = Person;
    person.also(|it: &mut String| it.clear());
}
