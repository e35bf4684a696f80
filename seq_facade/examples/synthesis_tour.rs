// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A tour of the synthesis layer, using the crate's own fixtures: a computed
//! sequence assembled through iteration, the operator surface bought by a
//! two-method declaration, whole-sequence operations from a range facade, a
//! write-then-release pass, and the capability audit with its diagnostic.
//!
//! Run with: `cargo run --example synthesis_tour`

use miette::IntoDiagnostic;
use r3bl_seq_facade::{CursorCaps, IntoReadOnly, Position, RandomAccessCursor,
                      RangeFacade, RefCursor, Strength, pos,
                      test_fixtures::{RepeatedChars, RepeatedCharsSpan, Window,
                                      WriteCursor},
                      verify_profile};

fn main() -> miette::Result<()> {
    println!("----> A sequence with no storage <----");
    assembled_from_a_pattern()?;

    println!("\n----> Operators from two primitives <----");
    operator_surface();

    println!("\n----> Whole-sequence operations <----");
    whole_sequence_facade();

    println!("\n----> Write, then release to readers <----");
    write_then_release();

    println!("\n----> The capability audit <----");
    descriptor_audit()?;

    Ok(())
}

/// Element `n` of [`RepeatedChars`] is computed, not stored; collecting the
/// first seven over the pattern `"foo"` assembles the classic string.
fn assembled_from_a_pattern() -> miette::Result<()> {
    let span = RepeatedCharsSpan::new("foo", 7);
    let bytes: Vec<u8> = span.iter().collect();
    let text = String::from_utf8(bytes).into_diagnostic()?;

    println!("pattern \"foo\" x 7 => {text:?}");
    println!("len = {}, front = {:?}, back = {:?}",
             span.len(),
             span.front().map(char::from),
             span.back().map(char::from));
    Ok(())
}

/// The declaration wrote `advance_by` and `distance_to`; everything below is
/// synthesized.
fn operator_surface() {
    let p: Position<RepeatedChars> = pos(RepeatedChars::new("abc", 0));
    let q = p + 4;

    println!("p + 4 is {} steps ahead (reads {:?})",
             q - p,
             char::from(q.at(0)));
    println!("p < q: {}", p < q);
    println!("(q - 4) == p: {}", q - 4 == p);
}

/// A facade over borrowed storage: subscript sugar ties borrows to the
/// receiver, while `iter_ref` lends straight from storage.
fn whole_sequence_facade() {
    let scores = [12_u16, 7, 30, 22];
    let window = Window::over(&scores);

    println!("{window:?}: front = {:?}, back = {:?}, window[2] = {}",
             window.front(),
             window.back(),
             window[2]);

    let total: u16 = window.iter().sum();
    println!("sum = {total}");

    let highest = window.iter_ref().max();
    println!("highest (borrowed from storage) = {highest:?}");
}

/// A single-pass writer fills the slots it can, then hands the ground to
/// readers by releasing its exclusive borrow.
fn write_then_release() {
    let mut buffer = [0_u8; 5];
    let mut writer = WriteCursor::start_of(&mut buffer);

    for value in [b'h', b'i', b'!'] {
        writer.put(value).ok();
    }

    let view = writer.into_read_only();
    println!("first unwritten slot reads {:?}", view.current());
    println!("buffer is now {buffer:?}");
}

/// The fixtures' published descriptors pass; a deliberately overclaimed one
/// shows the diagnostic a disagreement produces.
fn descriptor_audit() -> miette::Result<()> {
    verify_profile::<RepeatedChars>()?;
    println!("RepeatedChars descriptor agrees with its contract row");

    let overclaimed = CursorCaps {
        step_back: false,
        ..CursorCaps::for_strength(Strength::Bidirectional)
    };
    if let Err(violation) = overclaimed.validate() {
        println!("an overclaimed descriptor reports:\n");
        println!("{:?}", miette::Report::new(violation));
    }
    Ok(())
}
