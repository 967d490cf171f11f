/// A single unit of parsed terminal output, emitted by `Parser::feed` in
/// the order bytes arrived. Commands are consumed immediately by the
/// `Controller` and are not retained past that single dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// One printable codepoint.
    Print(char),
    /// A C0 control character (`0x00..=0x1F`, excluding ESC).
    Control(u8),
    /// A CSI (`ESC [`) sequence, keyed on its final byte.
    Csi {
        final_byte: char,
        params: Vec<i32>,
        intermediates: String,
    },
    /// An OSC (`ESC ]`) sequence.
    Osc { command: i32, data: String },
}
