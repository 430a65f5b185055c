//! Keyboard, IME and pointer input.

use std::time::Instant;

use winit::event::{ElementState, Ime, KeyEvent, MouseButton};
use winit::keyboard::{Key, NamedKey as WinitKey};

use phosphor_terminal::{KeyInput, KeyOutcome, NamedKey, Phase};

use super::core::PhosphorApp;
use crate::opener;

/// Driver-level key bindings, handled before the terminal sees the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Hotkey {
    ExportConfig,
    ImportConfig,
    Restart,
    ToggleDistortion,
    ToggleGrid,
}

pub(super) fn hotkey(key: &Key) -> Option<Hotkey> {
    match key {
        Key::Named(WinitKey::F2) => Some(Hotkey::ExportConfig),
        Key::Named(WinitKey::F3) => Some(Hotkey::ImportConfig),
        Key::Named(WinitKey::F5) => Some(Hotkey::Restart),
        Key::Named(WinitKey::F9) => Some(Hotkey::ToggleDistortion),
        Key::Named(WinitKey::F10) => Some(Hotkey::ToggleGrid),
        _ => None,
    }
}

/// Translate a winit key into the terminal's key vocabulary.
pub(super) fn key_input(key: &Key) -> Option<KeyInput> {
    let named = match key {
        Key::Character(text) => return Some(KeyInput::Character(text.to_string())),
        Key::Named(named) => named,
        _ => return None,
    };
    let mapped = match named {
        WinitKey::Enter => NamedKey::Enter,
        WinitKey::Backspace => NamedKey::Backspace,
        WinitKey::Space => NamedKey::Space,
        WinitKey::ArrowUp => NamedKey::ArrowUp,
        WinitKey::ArrowDown => NamedKey::ArrowDown,
        WinitKey::ArrowLeft => NamedKey::ArrowLeft,
        WinitKey::ArrowRight => NamedKey::ArrowRight,
        WinitKey::Home => NamedKey::Home,
        WinitKey::End => NamedKey::End,
        WinitKey::PageUp => NamedKey::PageUp,
        WinitKey::PageDown => NamedKey::PageDown,
        WinitKey::Shift => NamedKey::Shift,
        WinitKey::Control => NamedKey::Control,
        WinitKey::Alt => NamedKey::Alt,
        WinitKey::Meta | WinitKey::Super => NamedKey::Meta,
        WinitKey::CapsLock => NamedKey::CapsLock,
        WinitKey::Tab => NamedKey::Tab,
        WinitKey::Escape => NamedKey::Escape,
        WinitKey::F1 => NamedKey::Function(1),
        WinitKey::F2 => NamedKey::Function(2),
        WinitKey::F3 => NamedKey::Function(3),
        WinitKey::F4 => NamedKey::Function(4),
        WinitKey::F5 => NamedKey::Function(5),
        WinitKey::F6 => NamedKey::Function(6),
        WinitKey::F7 => NamedKey::Function(7),
        WinitKey::F8 => NamedKey::Function(8),
        WinitKey::F9 => NamedKey::Function(9),
        WinitKey::F10 => NamedKey::Function(10),
        WinitKey::F11 => NamedKey::Function(11),
        WinitKey::F12 => NamedKey::Function(12),
        _ => NamedKey::Other,
    };
    Some(KeyInput::Named(mapped))
}

impl PhosphorApp {
    pub(super) fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }

        if let Some(hotkey) = hotkey(&event.logical_key) {
            if !event.repeat {
                self.run_hotkey(hotkey);
            }
            return;
        }

        if let Some(input) = key_input(&event.logical_key) {
            self.route_key(&input);
        }
    }

    /// Text committed by an input method arrives one character at a time.
    pub(super) fn handle_ime(&mut self, ime: Ime) {
        if let Ime::Commit(text) = ime {
            for c in text.chars() {
                let input = if c == ' ' {
                    KeyInput::Named(NamedKey::Space)
                } else {
                    KeyInput::Character(c.to_string())
                };
                self.route_key(&input);
            }
        }
    }

    fn route_key(&mut self, input: &KeyInput) {
        let now = Instant::now();
        match self.terminal.handle_key(input, now) {
            KeyOutcome::Ignored => {}
            KeyOutcome::Handled => self.request_redraw(),
            KeyOutcome::EnteredPostBoot => {
                tracing::info!("Entered post-boot phase");
                self.update_ime();
                self.request_redraw();
            }
            KeyOutcome::Submitted(submitted) => {
                self.dispatch_command(submitted);
                self.request_redraw();
            }
        }
    }

    fn run_hotkey(&mut self, hotkey: Hotkey) {
        tracing::debug!(?hotkey, "Hotkey");
        match hotkey {
            Hotkey::ExportConfig => self.export_config(),
            Hotkey::ImportConfig => self.import_config(),
            Hotkey::Restart => self.restart_terminal(),
            Hotkey::ToggleDistortion => {
                let config = self.store.config();
                if let Some(ref mut compositor) = self.compositor {
                    compositor.toggle_distortion(config);
                }
            }
            Hotkey::ToggleGrid => self.toggle_grid(),
        }
        self.request_redraw();
    }

    /// Left click: follow the access button in post-boot, otherwise ask
    /// for the on-screen keyboard on narrow layouts.
    pub(super) fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left || state != ElementState::Pressed {
            return;
        }
        let (Some(window), Some(compositor)) = (self.window.as_ref(), self.compositor.as_ref()) else {
            return;
        };

        let scale = window.scale_factor();
        let (x, y) = (self.cursor_pos.0 / scale, self.cursor_pos.1 / scale);
        let config = self.store.config();

        if self.terminal.phase() == Phase::PostBoot
            && compositor.hit_access_button(config, x, y)
        {
            let url = &config.ui.access_button.url;
            tracing::info!(url = %url, "Access button clicked");
            if let Err(e) = opener::open_url(url) {
                tracing::warn!("Failed to open {url}: {e}");
            }
            return;
        }

        let layout = compositor.layout();
        if layout.is_portrait || layout.is_mobile {
            window.set_ime_allowed(true);
            window.focus_window();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_keys_are_hotkeys() {
        assert_eq!(hotkey(&Key::Named(WinitKey::F2)), Some(Hotkey::ExportConfig));
        assert_eq!(hotkey(&Key::Named(WinitKey::F3)), Some(Hotkey::ImportConfig));
        assert_eq!(hotkey(&Key::Named(WinitKey::F5)), Some(Hotkey::Restart));
        assert_eq!(hotkey(&Key::Named(WinitKey::F9)), Some(Hotkey::ToggleDistortion));
        assert_eq!(hotkey(&Key::Named(WinitKey::F10)), Some(Hotkey::ToggleGrid));
        assert_eq!(hotkey(&Key::Named(WinitKey::Enter)), None);
        assert_eq!(hotkey(&Key::Character("a".into())), None);
    }

    #[test]
    fn characters_pass_through() {
        assert_eq!(
            key_input(&Key::Character("g".into())),
            Some(KeyInput::Character("g".into()))
        );
    }

    #[test]
    fn named_keys_map() {
        assert_eq!(
            key_input(&Key::Named(WinitKey::Backspace)),
            Some(KeyInput::Named(NamedKey::Backspace))
        );
        assert_eq!(
            key_input(&Key::Named(WinitKey::Super)),
            Some(KeyInput::Named(NamedKey::Meta))
        );
        assert_eq!(
            key_input(&Key::Named(WinitKey::F7)),
            Some(KeyInput::Named(NamedKey::Function(7)))
        );
        assert_eq!(
            key_input(&Key::Named(WinitKey::MediaPlay)),
            Some(KeyInput::Named(NamedKey::Other))
        );
    }

    #[test]
    fn dead_keys_are_dropped() {
        assert_eq!(key_input(&Key::Dead(Some('`'))), None);
    }
}
