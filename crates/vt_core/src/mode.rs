/// Mode flags toggled by `CSI h` (SM) / `CSI l` (RM), both ANSI-standard
/// and DEC-private (`CSI ? ... h/l`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Modes {
    /// DECCKM (`?1`): cursor keys send application-mode sequences.
    /// The engine itself does not encode keys; this flag is surfaced for
    /// an external keyboard-input collaborator to consult.
    pub cursor_keys: bool,
    /// Bracketed paste mode (`?2004`).
    pub bracketed_paste: bool,
    /// IRM (`4`): insert mode — printing shifts the rest of the row right.
    pub insert: bool,
    /// LNM (`20`): newline mode — LF also performs CR.
    pub newline: bool,
}
