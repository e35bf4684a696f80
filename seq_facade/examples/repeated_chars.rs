// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The classic repeated-pattern walk, declared from scratch: two jump
//! primitives plus a value access, and the basis macro fills in stepping,
//! copying, and equality. Copying `[first, last)` out of a sequence that
//! stores nothing but a pattern and an offset prints `"foofoof"`.
//!
//! Run with: `cargo run --example repeated_chars`

use miette::IntoDiagnostic;
use r3bl_seq_facade::{Cursor, RandomAccessCursor, ReadCursor,
                      create_random_access_basis, pos};

/// Element `n` is `pattern[n % pattern.len()]`, computed on access.
#[derive(Debug, Clone, Copy)]
struct Repeated {
    pattern: &'static [u8],
    offset: isize,
}

impl RandomAccessCursor for Repeated {
    fn advance_by(&mut self, arg_delta: isize) { self.offset += arg_delta; }

    fn distance_to(&self, arg_other: &Self) -> isize {
        arg_other.offset - self.offset
    }
}

create_random_access_basis!(Repeated, item: u8);

impl ReadCursor for Repeated {
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn read(&self) -> u8 {
        let len = self.pattern.len() as isize;
        self.pattern[self.offset.rem_euclid(len) as usize]
    }
}

fn main() -> miette::Result<()> {
    let first = pos(Repeated { pattern: b"foo", offset: 0 });
    let last = first + 7;

    let mut bytes = Vec::new();
    let mut walk = first;
    while walk != last {
        bytes.push(walk.read());
        walk.step();
    }

    let text = String::from_utf8(bytes).into_diagnostic()?;
    println!("pattern \"foo\", [0, 7) => {text:?}");
    assert_eq!(text, "foofoof");

    println!("last - first = {}, first.at(4) reads {:?}",
             last - first,
             char::from(first.at(4)));
    Ok(())
}
