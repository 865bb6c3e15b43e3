//! `with` runs its callable at once and is not a chain operand.

use scopefn::prelude::{scope, with};

fn main() {
    let mut value: i32 = 1;
    let _ = scope(&mut value) | with(|| 2_i32);
}
