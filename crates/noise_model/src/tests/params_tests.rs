use super::*;

fn state_with_volume(volume: f64) -> ParameterState {
    ParameterState::new(NoiseColor::Pink, volume, None, true).expect("valid volume")
}

#[test]
fn defaults_match_startup_values() {
    let state = ParameterState::default();
    assert_eq!(state.color(), NoiseColor::Pink);
    assert_eq!(state.volume(), 1.0);
    assert_eq!(state.center_frequency_hz(), 1786);
    assert_eq!(state.reverb_depth(), 19);
    assert!(state.duration().is_none());
    assert!(state.ui_enabled());
}

#[test]
fn rejects_negative_or_non_finite_volume() {
    assert_eq!(
        ParameterState::new(NoiseColor::Pink, -0.5, None, true),
        Err(ParamError::InvalidVolume(-0.5))
    );
    assert!(ParameterState::new(NoiseColor::Pink, f64::NAN, None, true).is_err());
    assert!(ParameterState::new(NoiseColor::Pink, f64::INFINITY, None, true).is_err());
}

#[test]
fn decrease_from_one_step_snaps_to_zero() {
    let mut state = state_with_volume(0.25);
    assert!(state.decrease_volume());
    assert_eq!(state.volume(), 0.0);
}

#[test]
fn decrease_below_one_step_snaps_to_zero() {
    let mut state = state_with_volume(0.1);
    assert!(state.decrease_volume());
    assert_eq!(state.volume(), 0.0);
}

#[test]
fn volume_never_goes_negative() {
    for start in [0.0, 0.1, 0.25, 0.3, 1.0, 2.7, 10.0] {
        let mut state = state_with_volume(start);
        for _ in 0..100 {
            state.decrease_volume();
            assert!(state.volume() >= 0.0, "start {start} went negative");
        }
        assert_eq!(state.volume(), 0.0);
        assert!(!state.decrease_volume());
    }
}

#[test]
fn volume_steps_by_quarter() {
    let mut state = state_with_volume(1.0);
    state.increase_volume();
    assert_eq!(state.volume(), 1.25);
    state.decrease_volume();
    state.decrease_volume();
    assert_eq!(state.volume(), 0.75);
}

#[test]
fn volume_increase_stops_at_ceiling() {
    let mut state = state_with_volume(MAX_VOLUME - 0.1);
    assert!(state.increase_volume());
    assert_eq!(state.volume(), MAX_VOLUME);
    assert!(!state.increase_volume());
    assert_eq!(state.volume(), MAX_VOLUME);
}

#[test]
fn mute_toggle_restores_fixed_level_not_previous() {
    let mut state = state_with_volume(3.5);
    assert!(state.toggle_mute());
    assert!(state.is_muted());
    assert!(state.toggle_mute());
    assert_eq!(state.volume(), 1.0);
}

#[test]
fn mute_toggle_round_trips_when_volume_was_one() {
    let mut state = state_with_volume(1.0);
    state.toggle_mute();
    state.toggle_mute();
    assert_eq!(state.volume(), 1.0);
}

#[test]
fn frequency_stays_within_band() {
    let mut state = ParameterState::default();
    for _ in 0..100 {
        state.raise_frequency();
        assert!(state.center_frequency_hz() <= MAX_CENTER_HZ);
    }
    assert_eq!(state.center_frequency_hz(), MAX_CENTER_HZ);
    assert!(!state.raise_frequency());

    for _ in 0..100 {
        state.lower_frequency();
        assert!(state.center_frequency_hz() >= MIN_CENTER_HZ);
    }
    assert_eq!(state.center_frequency_hz(), MIN_CENTER_HZ);
    assert!(!state.lower_frequency());
    assert_eq!(state.center_frequency_hz(), MIN_CENTER_HZ);
}

#[test]
fn frequency_steps_by_hundred() {
    let mut state = ParameterState::default();
    state.raise_frequency();
    assert_eq!(state.center_frequency_hz(), 1886);
    for _ in 0..5 {
        state.lower_frequency();
    }
    assert_eq!(state.center_frequency_hz(), 1386);
}

#[test]
fn reverb_stays_within_range() {
    let mut state = ParameterState::default();
    state.raise_reverb();
    assert_eq!(state.reverb_depth(), 29);
    for _ in 0..20 {
        state.raise_reverb();
    }
    assert_eq!(state.reverb_depth(), MAX_REVERB);
    assert!(!state.raise_reverb());

    for _ in 0..20 {
        state.lower_reverb();
    }
    assert_eq!(state.reverb_depth(), MIN_REVERB);
    assert!(!state.lower_reverb());
}

#[test]
fn set_color_reports_change() {
    let mut state = ParameterState::default();
    assert!(!state.set_color(NoiseColor::Pink));
    assert!(state.set_color(NoiseColor::White));
    assert_eq!(state.color(), NoiseColor::White);
}
