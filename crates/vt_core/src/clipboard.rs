/// A pending `OSC 52` clipboard write, surfaced for an external clipboard
/// collaborator to act on. The engine never touches a system clipboard
/// itself — it only accumulates requests until the host drains them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardRequest {
    /// The selector byte(s) before the first `;` (e.g. `"c"` for the
    /// clipboard, `"p"` for primary selection).
    pub selector: String,
    /// The base64 payload, still encoded: the engine does not decode it.
    pub data: String,
}
