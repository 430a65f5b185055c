use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use phosphor_remote::{CommandEndpoint, CommandReply, CommandRequest, RemoteError};
use rand::rngs::mock::StepRng;

use super::*;
use crate::types::{KeyInput, KeyOutcome, NamedKey, PhaseSignal};
use crate::{FALLBACK_PREFIX, MAX_BOOT_LINES, NOT_RECOGNIZED};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Never triggers the glitch teleport.
fn steady_rng() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn fresh() -> (TerminalState, Instant) {
    let t0 = Instant::now();
    (TerminalState::new(TerminalSettings::default(), t0), t0)
}

fn post_boot() -> (TerminalState, Instant) {
    let (mut state, t0) = fresh();
    assert!(state.transition_to_post_boot(t0));
    (state, t0)
}

fn type_text(state: &mut TerminalState, text: &str, now: Instant) {
    for c in text.chars() {
        state.handle_key(&KeyInput::Character(c.to_string()), now);
    }
}

fn reply(message: Option<&str>) -> Result<CommandReply, RemoteError> {
    Ok(CommandReply {
        message: message.map(str::to_string),
    })
}

// -- boot playback --

#[test]
fn new_state_starts_in_boot() {
    let (state, t0) = fresh();
    assert_eq!(state.phase(), Phase::Boot);
    assert_eq!(state.boot_index(), 0);
    assert_eq!(state.boot_lines().len(), 0);
    assert_eq!(state.boot_end(), None);
    assert_eq!(state.next_deadline(), Some(t0));
}

#[test]
fn boot_lines_cap_at_sixteen() {
    let (mut state, _) = fresh();
    for i in 0..=MAX_BOOT_LINES {
        state.add_boot_line(format!("line {i}"));
    }
    assert_eq!(state.boot_lines().len(), MAX_BOOT_LINES);
    assert_eq!(state.boot_lines().next(), Some("line 1"));
    assert_eq!(state.boot_lines().last(), Some("line 16"));
}

#[test]
fn lines_and_blocks_are_paced() {
    let (mut state, t0) = fresh();

    state.run_timers(t0);
    assert_eq!(state.boot_lines().len(), 1);

    state.run_timers(t0 + ms(149));
    assert_eq!(state.boot_lines().len(), 1);

    state.run_timers(t0 + ms(150));
    state.run_timers(t0 + ms(300));
    assert_eq!(state.boot_index(), 3);

    // Fourth entry is a four-line block.
    state.run_timers(t0 + ms(450));
    assert_eq!(state.boot_lines().len(), 7);

    state.run_timers(t0 + ms(949));
    assert_eq!(state.boot_index(), 4);
    state.run_timers(t0 + ms(950));
    assert_eq!(state.boot_index(), 5);
}

#[test]
fn scenario_boot_countdown_then_post_boot() {
    let (mut state, t0) = fresh();
    let mut rng = steady_rng();
    let entries = state.settings().boot_script.len();

    let mut now = t0;
    loop {
        assert!(now < t0 + Duration::from_secs(10), "boot script never finished");
        assert_eq!(state.tick(now, 600.0, &mut rng), None);
        if state.boot_end().is_some() {
            break;
        }
        now += ms(10);
    }
    assert_eq!(state.boot_index(), entries);
    let end = state.boot_end().unwrap();
    assert_eq!(end, now + state.settings().boot_duration);

    // Further script steps must not reschedule the countdown.
    state.advance_boot_script(now + ms(500));
    assert_eq!(state.boot_end(), Some(end));

    assert_eq!(state.tick(end - ms(1), 600.0, &mut rng), None);
    assert_eq!(state.phase(), Phase::Boot);
    assert_eq!(state.boot_end(), Some(end));

    assert_eq!(
        state.tick(end, 600.0, &mut rng),
        Some(PhaseSignal::EnteredPostBoot)
    );
    assert_eq!(state.phase(), Phase::PostBoot);
}

#[test]
fn transition_is_idempotent() {
    let (mut state, t0) = fresh();
    assert!(state.transition_to_post_boot(t0));
    let first = state.post_boot_end();
    assert_eq!(first, Some(t0 + state.settings().post_boot_duration));

    assert!(!state.transition_to_post_boot(t0 + ms(5000)));
    assert_eq!(state.post_boot_end(), first);
}

#[test]
fn key_skips_boot_only_past_threshold() {
    let (mut state, t0) = fresh();
    state.run_timers(t0);
    let any = KeyInput::Character("x".into());
    assert_eq!(state.handle_key(&any, t0), KeyOutcome::Ignored);
    assert_eq!(state.phase(), Phase::Boot);

    let mut now = t0;
    while state.boot_index() <= crate::BOOT_SKIP_THRESHOLD {
        now += ms(50);
        state.run_timers(now);
    }
    assert_eq!(state.handle_key(&any, now), KeyOutcome::EnteredPostBoot);
    assert_eq!(state.phase(), Phase::PostBoot);
    // The skipping key does not land in the prompt.
    assert_eq!(state.command_input(), "");
}

#[test]
fn post_boot_stops_boot_playback() {
    let (mut state, t0) = fresh();
    state.run_timers(t0);
    state.transition_to_post_boot(t0);
    state.run_timers(t0 + Duration::from_secs(30));
    assert_eq!(state.boot_index(), 1);
    assert_eq!(state.boot_end(), None);
}

#[test]
fn post_boot_expiry_is_signalled() {
    let (mut state, t0) = post_boot();
    let end = state.post_boot_end().unwrap();
    assert_eq!(state.evaluate_phase(end - ms(1)), None);
    assert_eq!(
        state.evaluate_phase(end),
        Some(PhaseSignal::PostBootExpired)
    );
    assert!(t0 < end);
}

// -- commands --

#[test]
fn blank_submit_is_noop() {
    let (mut state, t0) = post_boot();
    state.response = "previous".into();
    state.command_input = "   ".into();

    assert_eq!(state.submit_command("", t0), None);
    assert_eq!(state.submit_command(" \t ", t0), None);
    assert_eq!(
        state.handle_key(&KeyInput::Named(NamedKey::Enter), t0),
        KeyOutcome::Ignored
    );
    assert_eq!(state.response(), "previous");
    assert!(!state.has_pending_command());
}

#[test]
fn submit_normalizes_and_shows_spinner() {
    let (mut state, t0) = post_boot();
    let submitted = state.submit_command("  GIAD ", t0).unwrap();
    assert_eq!(submitted.command, "giad");
    assert_eq!(state.response(), "LOADING –");
    assert!(state.has_pending_command());
}

#[test]
fn giad_failure_uses_fallback() {
    let (mut state, t0) = post_boot();
    let submitted = state.submit_command("giad", t0).unwrap();
    assert!(state.apply_reply(submitted.id, Err(RemoteError::Network("refused".into()))));

    let expected = format!(
        "{FALLBACK_PREFIX}{}",
        state.settings().default_message("giad").unwrap()
    );
    assert_eq!(state.response(), expected);
    assert_eq!(
        state.response(),
        "CONNECTION TIMED OUT. USING FALLBACK: GIAD™ IS NOT A BRAND. IT'S A PROPHECY."
    );
}

#[test]
fn unknown_failure_is_not_recognized() {
    let (mut state, t0) = post_boot();
    let submitted = state.submit_command("dir", t0).unwrap();
    state.apply_reply(submitted.id, Err(RemoteError::Timeout));
    assert_eq!(state.response(), format!("{FALLBACK_PREFIX}{NOT_RECOGNIZED}"));
}

#[test]
fn success_without_message_uses_default() {
    let (mut state, t0) = post_boot();
    let submitted = state.submit_command("god", t0).unwrap();
    state.apply_reply(submitted.id, reply(None));
    assert_eq!(
        Some(state.response()),
        state.settings().default_message("god")
    );

    let submitted = state.submit_command("ls", t0).unwrap();
    state.apply_reply(submitted.id, reply(Some("")));
    assert_eq!(state.response(), NOT_RECOGNIZED);
}

#[test]
fn latest_submission_wins() {
    let (mut state, t0) = post_boot();
    let first = state.submit_command("giad", t0).unwrap();
    let second = state.submit_command("god", t0 + ms(10)).unwrap();
    assert!(second.id > first.id);

    assert!(!state.apply_reply(first.id, reply(Some("slow"))));
    assert!(state.response().starts_with("LOADING"));

    assert!(state.apply_reply(second.id, reply(Some("fast"))));
    assert_eq!(state.response(), "fast");

    // A late duplicate changes nothing.
    assert!(!state.apply_reply(second.id, reply(Some("again"))));
    assert_eq!(state.response(), "fast");
}

#[test]
fn spinner_cycles_until_reply() {
    let (mut state, t0) = post_boot();
    let submitted = state.submit_command("giad", t0).unwrap();

    let frames: Vec<String> = (1..=4)
        .map(|i| {
            state.run_timers(t0 + ms(200 * i));
            state.response().to_string()
        })
        .collect();
    assert_eq!(frames, ["LOADING /", "LOADING |", "LOADING \\", "LOADING –"]);

    state.apply_reply(submitted.id, reply(Some("hi")));
    state.run_timers(t0 + Duration::from_secs(5));
    assert_eq!(state.response(), "hi");
    assert_eq!(state.next_deadline(), None);
}

#[test]
fn restart_discards_in_flight_reply() {
    let (mut state, t0) = post_boot();
    let submitted = state.submit_command("giad", t0).unwrap();
    state.init(t0 + ms(100));

    assert_eq!(state.phase(), Phase::Boot);
    assert!(!state.apply_reply(submitted.id, reply(Some("late"))));
    assert_eq!(state.response(), "");
}

// -- keys and scrolling --

#[test]
fn typing_edits_prompt() {
    let (mut state, t0) = post_boot();
    type_text(&mut state, "gi", t0);
    state.handle_key(&KeyInput::Named(NamedKey::Space), t0);
    type_text(&mut state, "ad", t0);
    assert_eq!(state.command_input(), "gi ad");

    state.handle_key(&KeyInput::Named(NamedKey::Backspace), t0);
    assert_eq!(state.command_input(), "gi a");
}

#[test]
fn modifier_and_navigation_keys_do_not_append() {
    let (mut state, t0) = post_boot();
    type_text(&mut state, "a", t0);
    for key in [
        NamedKey::Shift,
        NamedKey::Control,
        NamedKey::Alt,
        NamedKey::Meta,
        NamedKey::CapsLock,
        NamedKey::Tab,
        NamedKey::Escape,
        NamedKey::ArrowLeft,
        NamedKey::ArrowRight,
        NamedKey::Home,
        NamedKey::End,
        NamedKey::PageUp,
        NamedKey::PageDown,
        NamedKey::Function(5),
    ] {
        assert_eq!(
            state.handle_key(&KeyInput::Named(key), t0),
            KeyOutcome::Ignored,
            "{key:?}"
        );
    }
    assert_eq!(
        state.handle_key(&KeyInput::Character("\u{7f}".into()), t0),
        KeyOutcome::Ignored
    );
    assert_eq!(
        state.handle_key(&KeyInput::Character("ab".into()), t0),
        KeyOutcome::Ignored
    );
    assert_eq!(state.command_input(), "a");
}

#[test]
fn arrows_scroll_only_with_empty_prompt() {
    let (mut state, t0) = post_boot();
    let down = KeyInput::Named(NamedKey::ArrowDown);
    let up = KeyInput::Named(NamedKey::ArrowUp);

    state.handle_key(&down, t0);
    state.handle_key(&down, t0);
    assert_eq!(state.scroll_offset(), 2);

    type_text(&mut state, "x", t0);
    assert_eq!(state.handle_key(&down, t0), KeyOutcome::Ignored);
    assert_eq!(state.handle_key(&up, t0), KeyOutcome::Ignored);
    assert_eq!(state.scroll_offset(), 2);
}

#[test]
fn scroll_is_clamped() {
    let (mut state, _) = post_boot();
    for _ in 0..5 {
        state.scroll_up();
    }
    assert_eq!(state.scroll_offset(), 0);

    // 12 wrapped lines in a 9 line window.
    state.set_scroll_limit(12 - 9);
    for _ in 0..20 {
        state.scroll_down();
    }
    assert_eq!(state.scroll_offset(), 3);

    state.set_scroll_limit(1);
    assert_eq!(state.scroll_offset(), 1);
}

// -- animation --

#[test]
fn glitch_line_drifts_and_wraps() {
    let (mut state, t0) = fresh();
    let mut rng = steady_rng();
    state.update_animation(t0 + Duration::from_secs(1), 600.0, &mut rng);
    assert!((state.glitch_y() - 50.0).abs() < 1e-6);

    state.update_animation(t0 + Duration::from_secs(2), 40.0, &mut rng);
    assert!((state.glitch_y() - 20.0).abs() < 1e-6);
}

#[test]
fn glitch_line_teleports() {
    let (mut state, t0) = fresh();
    // A zero roll is below the teleport chance and lands on row zero.
    let mut rng = StepRng::new(0, 0);
    state.update_animation(t0 + Duration::from_secs(1), 600.0, &mut rng);
    assert!(state.glitch_y().abs() < 1e-6);
}

#[test]
fn cursor_blinks_every_half_second() {
    let (mut state, t0) = fresh();
    let mut rng = steady_rng();
    assert!(state.cursor_visible());
    state.update_animation(t0 + ms(300), 600.0, &mut rng);
    assert!(state.cursor_visible());
    state.update_animation(t0 + ms(600), 600.0, &mut rng);
    assert!(!state.cursor_visible());
    state.update_animation(t0 + ms(1000), 600.0, &mut rng);
    assert!(!state.cursor_visible());
    state.update_animation(t0 + ms(1200), 600.0, &mut rng);
    assert!(state.cursor_visible());
}

#[test]
fn logo_frame_follows_elapsed_time() {
    let (mut state, t0) = fresh();
    let mut rng = steady_rng();
    state.update_animation(t0 + ms(80 * 5 + 10), 600.0, &mut rng);
    assert_eq!(state.frame_index(), 5);
    assert_eq!(state.frame_at(t0 + ms(80 * 48)), 0);
    assert_eq!(state.frame_at(t0 + ms(80 * 49)), 1);
}

#[test]
fn seconds_remaining_rounds_up() {
    let t0 = Instant::now();
    assert_eq!(seconds_remaining(t0 + ms(2001), t0), 3);
    assert_eq!(seconds_remaining(t0 + ms(2000), t0), 2);
    assert_eq!(seconds_remaining(t0, t0 + ms(10)), 0);
}

// -- end to end with a scripted endpoint --

struct ScriptedEndpoint {
    requests: Mutex<Vec<String>>,
    message: Option<String>,
}

#[async_trait]
impl CommandEndpoint for ScriptedEndpoint {
    async fn submit(&self, command: &str) -> Result<CommandReply, RemoteError> {
        let body = serde_json::to_string(&CommandRequest {
            user_input: command.to_string(),
        })
        .map_err(|e| RemoteError::Client(e.to_string()))?;
        self.requests.lock().unwrap().push(body);
        Ok(CommandReply {
            message: self.message.clone(),
        })
    }
}

#[tokio::test]
async fn scenario_typed_command_round_trip() {
    let (mut state, t0) = post_boot();
    let endpoint = ScriptedEndpoint {
        requests: Mutex::new(Vec::new()),
        message: Some("hi".into()),
    };

    type_text(&mut state, "giad", t0);
    let KeyOutcome::Submitted(submitted) =
        state.handle_key(&KeyInput::Named(NamedKey::Enter), t0)
    else {
        panic!("enter did not submit");
    };
    assert_eq!(state.command_input(), "");

    let outcome = endpoint.submit(&submitted.command).await;
    assert!(state.apply_reply(submitted.id, outcome));

    assert_eq!(
        *endpoint.requests.lock().unwrap(),
        vec![r#"{"userInput":"giad"}"#.to_string()]
    );
    assert_eq!(state.response(), "hi");
}
