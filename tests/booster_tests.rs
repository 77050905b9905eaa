//! Booster lifecycle through the public API

use match_qube::core::{Booster, BoosterPhase};

/// Call `update` until the phase changes, returning the clock afterwards.
fn run_until_phase_change(b: &mut Booster, mut now: u64, step_ms: u64) -> u64 {
    let start = b.phase();
    for _ in 0..10_000 {
        b.update(now);
        if b.phase() != start {
            return now;
        }
        now += step_ms;
    }
    panic!("phase stuck in {:?}", start);
}

#[test]
fn test_single_charge_full_cycle() {
    let mut b = Booster::new();
    b.charge();
    assert_eq!(b.multiplier(), 2);

    // 36 updates fill 360 degrees.
    for i in 0..36 {
        assert_eq!(b.phase(), BoosterPhase::Charging, "update {i}");
        b.update(0);
    }
    assert_eq!(b.phase(), BoosterPhase::Armed);
    assert_eq!(b.progress_degrees(), 360);

    b.update(499);
    assert_eq!(b.phase(), BoosterPhase::Armed);
    b.update(500);
    assert_eq!(b.phase(), BoosterPhase::Decaying);

    let now = run_until_phase_change(&mut b, 500, 16);
    assert!(now > 500);
    assert_eq!(b.phase(), BoosterPhase::Idle);
    assert_eq!(b.multiplier(), 1);
    assert_eq!(b.progress_degrees(), 0);
}

#[test]
fn test_multiplier_steps_down_one_at_a_time() {
    let mut b = Booster::new();
    b.charge();
    b.charge();
    b.charge();
    assert_eq!(b.multiplier(), 4);

    let mut now = 0;
    let mut seen = vec![b.multiplier()];
    while b.phase() != BoosterPhase::Idle {
        now = run_until_phase_change(&mut b, now, 16);
        if seen.last() != Some(&b.multiplier()) {
            seen.push(b.multiplier());
        }
    }
    assert_eq!(seen, vec![4, 3, 2, 1]);
}

#[test]
fn test_charge_during_cooldown_restarts_fill() {
    let mut b = Booster::with_delays(0, 1_000);
    b.charge();
    b.charge();
    let mut now = 0;
    while b.phase() != BoosterPhase::Cooldown {
        now = run_until_phase_change(&mut b, now, 1);
    }
    assert_eq!(b.multiplier(), 2);

    b.charge();
    assert_eq!(b.multiplier(), 3);
    assert_eq!(b.phase(), BoosterPhase::Charging);

    // The old cooldown deadline must not pull the booster anywhere.
    b.update(now + 1_000);
    assert_eq!(b.phase(), BoosterPhase::Charging);
    assert_eq!(b.progress_degrees(), 10);
}

#[test]
fn test_reset_returns_to_idle() {
    let mut b = Booster::new();
    b.charge();
    b.update(0);
    b.reset();
    assert_eq!(b.multiplier(), 1);
    assert_eq!(b.phase(), BoosterPhase::Idle);
    b.update(10_000);
    assert_eq!(b.phase(), BoosterPhase::Idle);
}
