//! Public value types exchanged with the frame loop.

/// Active phase. Transitions only go forward; returning to `Boot`
/// requires a full [`init`](crate::TerminalState::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Boot,
    PostBoot,
}

/// A command accepted by the prompt. The caller sends it to the remote
/// endpoint and reports back with the same `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedCommand {
    pub id: u64,
    pub command: String,
}

/// Phase changes observed during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseSignal {
    /// The boot countdown elapsed or a key skipped it.
    EnteredPostBoot,
    /// The post-boot countdown elapsed; the driver should redirect.
    PostBootExpired,
}

/// Keys the state machine distinguishes, independent of the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKey {
    Enter,
    Backspace,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Shift,
    Control,
    Alt,
    Meta,
    CapsLock,
    Tab,
    Escape,
    Function(u8),
    Other,
}

/// One key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    Named(NamedKey),
    /// Text produced by the key, usually a single character.
    Character(String),
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    /// Buffer, scroll or cursor changed.
    Handled,
    /// The key skipped the rest of the boot phase.
    EnteredPostBoot,
    /// Enter submitted a non-empty command.
    Submitted(SubmittedCommand),
}
