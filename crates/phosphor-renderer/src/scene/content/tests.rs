use std::time::{Duration, Instant};

use phosphor_common::Color;
use phosphor_config::PhosphorConfig;
use phosphor_remote::CommandReply;
use phosphor_terminal::{MonospaceMeasure, TerminalSettings, TerminalState};

use super::*;
use crate::layout::compute_layout;

const MEASURE: MonospaceMeasure = MonospaceMeasure { advance: 10.0 };

fn glitch() -> GlitchStroke {
    GlitchStroke {
        thickness: 0.2,
        alpha: 0.3,
    }
}

fn build(
    state: &TerminalState,
    config: &PhosphorConfig,
    width: f64,
    height: f64,
    now: Instant,
) -> ContentScene {
    let layout = compute_layout(width, height);
    build_content(&ContentFrame {
        state,
        config,
        layout: &layout,
        now,
        measure: &MEASURE,
        still_logo: Some((512, 512)),
        current_frame: Some((200, 100)),
        alert: None,
        glitch: glitch(),
    })
}

fn texts(scene: &ContentScene) -> Vec<&str> {
    scene.texts.iter().map(|t| t.text.as_str()).collect()
}

fn boot_state(config: &PhosphorConfig) -> (TerminalState, Instant) {
    let t0 = Instant::now();
    (TerminalState::new(TerminalSettings::from_config(config), t0), t0)
}

fn post_boot_state(config: &PhosphorConfig) -> (TerminalState, Instant) {
    let (mut state, t0) = boot_state(config);
    state.transition_to_post_boot(t0);
    (state, t0)
}

#[test]
fn background_fills_and_stripes() {
    let config = PhosphorConfig::default();
    let (state, t0) = boot_state(&config);
    let scene = build(&state, &config, 800.0, 600.0, t0);

    assert_eq!(scene.under[0].rect, [0.0, 0.0, 800.0, 600.0]);
    assert_eq!(scene.under[0].color, BACKGROUND.to_f32_array());
    let stripes: Vec<_> = scene.under[1..].iter().filter(|q| q.rect[3] == 4.0).collect();
    assert_eq!(stripes.len(), 75);
    assert_eq!(stripes[1].rect[1], 8.0);
    assert!((stripes[0].color[3] - 0.1).abs() < 1e-6);
}

#[test]
fn glitch_line_is_drawn_over_text() {
    let config = PhosphorConfig::default();
    let (state, t0) = boot_state(&config);
    let scene = build(&state, &config, 800.0, 600.0, t0);

    let line = scene.over.last().unwrap();
    assert_eq!(line.rect, [0.0, state.glitch_y() as f32, 800.0, 0.2]);
    assert!((line.color[3] - 0.3).abs() < 0.01);
}

#[test]
fn glitch_stroke_ranges() {
    let mut low = rand::rngs::mock::StepRng::new(0, 0);
    let stroke = GlitchStroke::random(&mut low);
    assert!((stroke.thickness - 0.1).abs() < 1e-6);
    assert!((stroke.alpha - 0.2).abs() < 1e-6);

    let mut high = rand::rngs::mock::StepRng::new(u64::MAX, 0);
    let stroke = GlitchStroke::random(&mut high);
    assert!(stroke.thickness <= 0.3 && stroke.thickness > 0.29);
    assert!(stroke.alpha <= 0.5 && stroke.alpha > 0.49);
}

#[test]
fn boot_shows_logo_lines_and_countdown() {
    let config = PhosphorConfig::default();
    let (mut state, t0) = boot_state(&config);
    state.add_boot_line("MS-GOD VERSION 6.66");
    state.add_boot_line("READY");
    let scene = build(&state, &config, 1280.0, 800.0, t0);

    let logo = scene.images[0];
    assert_eq!(logo.image, LogoImage::Still);
    assert!((logo.rect.width - 256.0).abs() < 1e-9);
    assert!((logo.rect.x - (1280.0 - 256.0 - 85.0)).abs() < 1e-9);
    assert!((logo.rect.y - 85.0).abs() < 1e-9);

    let lines = texts(&scene);
    assert!(lines.contains(&"MS-GOD VERSION 6.66"));
    assert!(lines.iter().all(|t| !t.starts_with("AUTO LOADING")));
    let second = scene.texts.iter().find(|t| t.text == "READY").unwrap();
    assert!((second.baseline - (85.0 + 24.0)).abs() < 1e-4);
    assert_eq!(second.color, Color::WHITE);
    assert!(second.glow.is_some());
}

#[test]
fn boot_countdown_centered_below_lines() {
    let config = PhosphorConfig::default();
    let (mut state, t0) = boot_state(&config);
    let mut now = t0;
    while state.boot_end().is_none() {
        now += Duration::from_millis(500);
        state.run_timers(now);
    }
    let scene = build(&state, &config, 1280.0, 800.0, now + Duration::from_millis(100));

    let countdown = scene
        .texts
        .iter()
        .find(|t| t.text.starts_with("AUTO LOADING IN"))
        .unwrap();
    assert_eq!(countdown.text, "AUTO LOADING IN [ 3 ]");
    assert_eq!(countdown.align, crate::text::TextAlign::Center);
    assert!((countdown.x - 640.0).abs() < 1e-4);
    let shown = state.boot_lines().len() as f32;
    assert!((countdown.baseline - (85.0 + shown * 24.0 + 25.0)).abs() < 1e-3);
}

#[test]
fn boot_lines_limited_by_height() {
    let config = PhosphorConfig::default();
    let (mut state, t0) = boot_state(&config);
    for i in 0..16 {
        state.add_boot_line(format!("line {i}"));
    }
    let scene = build(&state, &config, 800.0, 340.0, t0);
    let lines: Vec<_> = texts(&scene)
        .into_iter()
        .filter(|t| t.starts_with("line "))
        .collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "line 6");
    assert_eq!(lines[9], "line 15");
}

#[test]
fn missing_logo_is_skipped() {
    let config = PhosphorConfig::default();
    let (state, t0) = boot_state(&config);
    let layout = compute_layout(800.0, 600.0);
    let scene = build_content(&ContentFrame {
        state: &state,
        config: &config,
        layout: &layout,
        now: t0,
        measure: &MEASURE,
        still_logo: None,
        current_frame: None,
        alert: None,
        glitch: glitch(),
    });
    assert!(scene.images.is_empty());
}

#[test]
fn post_boot_layout() {
    let config = PhosphorConfig::default();
    let (state, t0) = post_boot_state(&config);
    let scene = build(&state, &config, 1000.0, 800.0, t0);

    let logo = scene.images[0];
    assert_eq!(logo.image, LogoImage::Frame(0));
    assert!((logo.rect.width - 130.0).abs() < 1e-9);
    assert!((logo.rect.height - 65.0).abs() < 1e-9);
    assert!((logo.rect.y + logo.rect.height - 400.0).abs() < 1e-9);

    let button = scene.texts.iter().find(|t| t.text == "ACCESS TERMINAL").unwrap();
    assert!((button.x - 500.0).abs() < 1e-4);
    assert!((button.baseline - 520.0).abs() < 1e-4);

    // underline spans the measured label
    let underline = scene.under.iter().find(|q| q.rect[3] == 1.0).unwrap();
    assert!((underline.rect[2] - 150.0).abs() < 1e-4);
    assert!((underline.rect[0] - 425.0).abs() < 1e-4);

    assert!(texts(&scene).contains(&"LOADING IN [ 90 ]"));
    let prompt = scene.texts.last().unwrap();
    assert_eq!(prompt.text, format!("{PROMPT}_"));
    assert!((prompt.baseline - 700.0).abs() < 1e-4);
    assert_eq!(scene.scroll_limit, Some(0));
}

#[test]
fn portrait_prompt_sits_higher() {
    let config = PhosphorConfig::default();
    let (state, t0) = post_boot_state(&config);
    let scene = build(&state, &config, 375.0, 667.0, t0);
    let prompt = scene.texts.last().unwrap();
    assert!((prompt.baseline - 587.0).abs() < 1e-4);
    assert!((prompt.font_size - 20.0).abs() < 1e-6);
}

#[test]
fn response_wraps_and_scrolls() {
    let config = PhosphorConfig::default();
    let (mut state, t0) = post_boot_state(&config);
    let submitted = state.submit_command("giad", t0).unwrap();
    let long = (0..60).map(|i| format!("w{i:02}")).collect::<Vec<_>>().join(" ");
    state.apply_reply(submitted.id, Ok(CommandReply { message: Some(long) }));

    // 830px per line fits 21 three-letter words; 60 words make 3 lines.
    // Response top 540, prompt 700: 6 lines available.
    let scene = build(&state, &config, 1000.0, 800.0, t0);
    let body: Vec<_> = scene.texts.iter().filter(|t| t.text.starts_with("w")).collect();
    assert_eq!(body.len(), 3);
    assert!((body[0].baseline - 540.0).abs() < 1e-4);
    assert_eq!(scene.scroll_limit, Some(0));
    assert!(!texts(&scene).contains(&"↓ more"));

    // top 423, prompt 520: 4 lines available
    let scene = build(&state, &config, 1000.0, 620.0, t0);
    assert_eq!(scene.scroll_limit, Some(0));

    let scene = build(&state, &config, 1000.0, 500.0, t0);
    // top 345, prompt 400: 2 lines available
    assert_eq!(scene.scroll_limit, Some(1));
    assert!(texts(&scene).contains(&"↓ more"));
    let marker = scene.texts.iter().find(|t| t.text == "↓ more").unwrap();
    assert!((marker.x - (1000.0 - 85.0)).abs() < 1e-4);
    assert!((marker.baseline - 390.0).abs() < 1e-4);

    state.set_scroll_limit(1);
    state.scroll_down();
    state.scroll_down();
    let scene = build(&state, &config, 1000.0, 500.0, t0);
    assert!(!texts(&scene).contains(&"↓ more"));
    let first = scene.texts.iter().find(|t| t.text.starts_with("w")).unwrap();
    assert!(first.text.starts_with("w21"));
}

#[test]
fn alert_banner_over_content() {
    let config = PhosphorConfig::default();
    let (state, t0) = boot_state(&config);
    let layout = compute_layout(800.0, 600.0);
    let scene = build_content(&ContentFrame {
        state: &state,
        config: &config,
        layout: &layout,
        now: t0,
        measure: &MEASURE,
        still_logo: None,
        current_frame: None,
        alert: Some("config parse error: expected value"),
        glitch: glitch(),
    });
    assert_eq!(scene.over.len(), 2);
    assert_eq!(scene.over[1].rect[2], 800.0);
    let banner = scene.texts.last().unwrap();
    assert_eq!(banner.text, "config parse error: expected value");
    assert!(banner.glow.is_none());
}

#[test]
fn grid_only_when_enabled() {
    let mut config = PhosphorConfig::default();
    let (state, t0) = boot_state(&config);
    let plain = build(&state, &config, 800.0, 600.0, t0);
    config.debugging.show_grid = true;
    let grid = build(&state, &config, 800.0, 600.0, t0);
    assert!(grid.under.len() > plain.under.len());
    assert!(texts(&grid).contains(&"Canvas: 800x600"));
}

#[test]
fn access_button_hit_test() {
    let config = PhosphorConfig::default();
    let layout = compute_layout(1000.0, 800.0);
    let rect = access_button_rect(&config, 1000.0, 800.0);
    assert!((rect.x - 350.0).abs() < 1e-9);
    assert!((rect.y - 495.0).abs() < 1e-9);

    assert!(hit_access_button(&layout, &config, 500.0, 520.0));
    assert!(hit_access_button(&layout, &config, 350.0, 495.0));
    assert!(!hit_access_button(&layout, &config, 340.0, 520.0));
    assert!(!hit_access_button(&layout, &config, 500.0, 200.0));
    assert!(!hit_access_button(&layout, &config, -5.0, 520.0));
}

#[test]
fn text_style_uses_portrait_font_size() {
    let mut config = PhosphorConfig::default();
    config.text.glow_intensity = 0.0;
    config.text.color = "#00ff00".into();
    let style = TextStyle::from_config(&config, &compute_layout(1280.0, 800.0));
    assert!((style.font_size - 18.0).abs() < 1e-6);
    assert!(style.glow.is_none());
    assert_eq!(style.color, Color::from_rgba(0, 255, 0, 255));
}
