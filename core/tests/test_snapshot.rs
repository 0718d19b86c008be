//! Tests for snapshot/restore of generator state
//!
//! The state words are the only persistence surface; serde round-trips
//! must reproduce the exact sequence.

use xoshiro_rs::{RngError, Xoshiro256PlusPlus};

#[test]
fn test_serde_roundtrip_preserves_sequence() {
    let mut rng = Xoshiro256PlusPlus::new(12345);
    for _ in 0..20 {
        rng.next();
    }

    let json = serde_json::to_string(&rng).expect("serialize generator");
    let mut restored: Xoshiro256PlusPlus =
        serde_json::from_str(&json).expect("deserialize generator");

    for _ in 0..100 {
        assert_eq!(
            rng.next(),
            restored.next(),
            "restored generator diverged from original"
        );
    }
}

#[test]
fn test_state_words_roundtrip() {
    let mut rng = Xoshiro256PlusPlus::new(777);
    rng.jump();
    rng.next();

    let words = rng.state();
    let restored = Xoshiro256PlusPlus::from_state(words).unwrap();

    assert_eq!(restored.state(), words);
}

#[test]
fn test_from_state_rejects_all_zero() {
    assert_eq!(
        Xoshiro256PlusPlus::from_state([0, 0, 0, 0]).unwrap_err(),
        RngError::ZeroState
    );
}

#[test]
fn test_from_state_accepts_single_nonzero_word() {
    for i in 0..4 {
        let mut words = [0u64; 4];
        words[i] = 1;
        assert!(
            Xoshiro256PlusPlus::from_state(words).is_ok(),
            "state with nonzero word {} was rejected",
            i
        );
    }
}

#[test]
fn test_zero_state_error_message() {
    let err = Xoshiro256PlusPlus::from_state([0; 4]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "all-zero state is degenerate: the generator would only ever return 0"
    );
}
