//! End-to-end tests for the arena and the string views together.

use arenakit::tracing_config::{LogFormat, init_tracing_with};
use arenakit::{Arena, ArenaConfig, ArenaState, Comparison, ErrorKind, StrView, equals};

/// Copy each line of `source` into the arena as NUL-terminated text.
fn intern_lines(arena: &mut Arena, source: &str) -> Vec<arenakit::Allocation> {
    source
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| StrView::from(line).to_text_in(arena).unwrap())
        .collect()
}

#[test]
fn test_lines_survive_chunk_growth() {
    let source = "  alpha\n\tbeta\n gamma delta epsilon\nzeta\n";
    let mut arena = Arena::with_config(ArenaConfig::debug(16));
    let handles = intern_lines(&mut arena, source);
    assert!(arena.chunk_count() > 1);

    let words: Vec<String> = handles
        .iter()
        .map(|handle| {
            StrView::from_allocation(&arena, handle)
                .unwrap()
                .skip_leading_whitespace()
                .to_string()
        })
        .collect();
    assert_eq!(words, ["alpha", "beta", "gamma delta epsilon", "zeta"]);
}

#[test]
fn test_reset_cycles_reuse_the_same_chunks() {
    let source = "one\ntwo\nthree\nfour\nfive\nsix\n";
    let mut arena = Arena::with_config(ArenaConfig::debug(12));

    intern_lines(&mut arena, source);
    let capacity = arena.stats().capacity_bytes;
    for _ in 0..10 {
        arena.reset();
        let handles = intern_lines(&mut arena, source);
        let first = StrView::from_allocation(&arena, &handles[0]).unwrap();
        assert_eq!(equals(&first, &StrView::from("one")), Comparison::Equal);
    }
    assert_eq!(arena.stats().capacity_bytes, capacity);
    assert_eq!(arena.stats().resets, 10);
}

#[test]
fn test_default_arena_lifecycle() {
    let mut arena = Arena::default();
    assert_eq!(arena.state(), ArenaState::Empty);
    arena.allocate(1).unwrap();
    arena.allocate(4096).unwrap();
    assert_eq!(arena.chunk_count(), 1);
    arena.reset();
    assert_eq!(arena.state(), ArenaState::Populated);
    assert_eq!(arena.teardown(), 1);
}

#[test]
fn test_error_kinds_surface_through_facade() {
    let mut arena = Arena::with_config(ArenaConfig::debug(8).with_max_total_bytes(8));
    assert_eq!(
        arena.allocate(0).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    arena.allocate(8).unwrap();
    assert_eq!(arena.allocate(1).unwrap_err().kind(), ErrorKind::OutOfMemory);
    assert_eq!(
        StrView::from("hello").substring(3, 10).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn test_tracing_subscriber_installs_once() {
    init_tracing_with("arenakit_arena=trace", LogFormat::Text);
    assert!(!init_tracing_with("debug", LogFormat::Json));

    // Allocation paths run with the subscriber active.
    let mut arena = Arena::with_config(ArenaConfig::debug(4));
    arena.allocate(4).unwrap();
    arena.allocate(4).unwrap();
    arena.reset();
    assert_eq!(arena.teardown(), 2);
}
