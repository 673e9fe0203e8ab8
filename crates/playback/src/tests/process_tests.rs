use super::*;
use crate::{terminate, PlaybackController};
use noise_model::ParameterState;
use std::time::Duration;

fn sleep_command(secs: &str) -> SynthCommand {
    SynthCommand {
        program: "sleep".into(),
        args: vec![secs.into()],
        mode: InvocationMode::Interactive,
    }
}

#[test]
fn spawned_child_can_be_killed_and_reaped() {
    let mut launcher = SystemLauncher;
    let mut child = launcher.launch(&sleep_command("30")).expect("spawn sleep");
    assert_eq!(child.try_exit().expect("poll"), None);

    let outcome = terminate(&mut child, Duration::from_secs(2)).expect("terminate");
    assert!(!outcome.success);
}

#[test]
fn short_child_exits_on_its_own() {
    let mut launcher = SystemLauncher;
    let mut child = launcher.launch(&sleep_command("0")).expect("spawn sleep");
    let outcome = child.wait().expect("wait");
    assert_eq!(outcome.code, Some(0));
    assert!(outcome.success);
}

#[test]
fn missing_program_surfaces_spawn_error() {
    let mut controller = PlaybackController::new(
        SystemLauncher,
        "soxnoise-definitely-not-installed",
        Duration::from_millis(100),
    );
    let err = controller
        .restart(&ParameterState::default())
        .expect_err("spawn should fail");
    assert!(err.is_missing_program());
    assert!(!controller.has_live_process());
}
