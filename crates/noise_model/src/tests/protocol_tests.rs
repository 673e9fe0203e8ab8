use super::*;
use crate::{NoiseColor, PlayDuration};

fn args_of(state: &ParameterState) -> Vec<String> {
    build_args(state)
}

#[test]
fn interactive_invocation_is_quiet_and_ordered() {
    let state = ParameterState::default();
    assert_eq!(
        args_of(&state),
        vec![
            "-q", "-b", "16", "-c", "2", "--null", "synth", "pinknoise", "band", "-n", "1786",
            "499", "tremolo", "0.00", "43", "reverb", "19", "bass", "-11", "treble", "-1", "vol",
            "1",
        ]
    );
}

#[test]
fn foreground_invocation_keeps_synth_output() {
    let state = ParameterState::new(NoiseColor::Brown, 0.5, None, false).expect("state");
    let args = args_of(&state);
    assert_eq!(args[0], "-b");
    assert!(!args.contains(&"-q".to_string()));
    assert!(args.contains(&"brownnoise".to_string()));
    assert_eq!(args.last().map(String::as_str), Some("0.5"));
}

#[test]
fn duration_follows_synth_keyword() {
    let duration = PlayDuration::parse("00:10:00").expect("duration");
    let state = ParameterState::new(NoiseColor::White, 1.0, Some(duration), true).expect("state");
    let args = args_of(&state);
    let synth_at = args.iter().position(|a| a == "synth").expect("synth");
    assert_eq!(args[synth_at + 1], "00:10:00");
    assert_eq!(args[synth_at + 2], "whitenoise");
}

#[test]
fn adjusted_state_flows_into_arguments() {
    let mut state = ParameterState::default();
    state.raise_frequency();
    state.lower_reverb();
    state.increase_volume();
    let args = args_of(&state);
    let band_at = args.iter().position(|a| a == "band").expect("band");
    assert_eq!(args[band_at + 2], "1886");
    let reverb_at = args.iter().position(|a| a == "reverb").expect("reverb");
    assert_eq!(args[reverb_at + 1], "10");
    assert_eq!(args.last().map(String::as_str), Some("1.25"));
}

#[test]
fn muted_volume_renders_as_zero() {
    let mut state = ParameterState::default();
    state.toggle_mute();
    assert_eq!(args_of(&state).last().map(String::as_str), Some("0"));
}

#[test]
fn command_mode_follows_ui_flag() {
    let state = ParameterState::default();
    let command = SynthCommand::for_state(DEFAULT_PLAYER, &state);
    assert_eq!(command.program, "play");
    assert_eq!(command.mode, InvocationMode::Interactive);
    assert!(command.display_line().starts_with("play -q -b 16"));

    let headless = ParameterState::new(NoiseColor::Pink, 1.0, None, false).expect("state");
    assert_eq!(
        SynthCommand::for_state("/usr/bin/play", &headless).mode,
        InvocationMode::Foreground
    );
}
