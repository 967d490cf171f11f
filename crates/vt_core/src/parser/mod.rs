//! A DEC VT500-family escape-sequence parser state machine.
//!
//! `Parser` turns a possibly-fragmented `char` stream into a stream of
//! [`Command`]s. It never errors and never blocks: unrecognized or
//! truncated sequences silently return to `Ground`, and a sequence split
//! across two `feed` calls resumes correctly because all accumulator
//! state is retained on `self`.

mod command;
pub use command::Command;

/// The parser's current position in the VT500 state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    Ground,
    Escape,
    EscapeIntermediate,
    CsiEntry,
    CsiParam,
    CsiIntermediate,
    OscString,
    DcsEntry,
    DcsParam,
    DcsPassthrough,
}

/// The VT500-family parser. Stateful across `feed` calls.
#[derive(Debug, Clone)]
pub struct Parser {
    state: ParserState,

    // CSI accumulators
    param_buf: String,
    params: Vec<i32>,
    intermediates: String,

    // OSC accumulators
    osc_digits: String,
    osc_command: i32,
    osc_data: String,
    osc_parsed: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Parser {
            state: ParserState::Ground,
            param_buf: String::new(),
            params: Vec::new(),
            intermediates: String::new(),
            osc_digits: String::new(),
            osc_command: 0,
            osc_data: String::new(),
            osc_parsed: false,
        }
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// The parser's current state, mostly useful for tests and
    /// diagnostics.
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Return to `Ground` and clear every accumulator.
    pub fn reset(&mut self) {
        self.state = ParserState::Ground;
        self.clear_csi();
        self.clear_osc();
    }

    fn clear_csi(&mut self) {
        self.param_buf.clear();
        self.params.clear();
        self.intermediates.clear();
    }

    fn clear_osc(&mut self) {
        self.osc_digits.clear();
        self.osc_command = 0;
        self.osc_data.clear();
        self.osc_parsed = false;
    }

    /// Parse `self.param_buf` (empty means 0), push it onto `self.params`,
    /// and clear the digit buffer.
    fn push_param(&mut self) {
        let value = if self.param_buf.is_empty() { 0 } else { self.param_buf.parse().unwrap_or(0) };
        self.params.push(value);
        self.param_buf.clear();
    }

    fn emit_csi(&mut self, final_byte: char, out: &mut Vec<Command>) {
        out.push(Command::Csi {
            final_byte,
            params: std::mem::take(&mut self.params),
            intermediates: std::mem::take(&mut self.intermediates),
        });
        self.param_buf.clear();
    }

    fn emit_osc(&mut self, out: &mut Vec<Command>) {
        let (command, data) = if self.osc_parsed {
            (self.osc_command, std::mem::take(&mut self.osc_data))
        } else {
            (0, std::mem::take(&mut self.osc_digits))
        };
        out.push(Command::Osc { command, data });
        self.clear_osc();
    }

    /// Feed a chunk of the input stream, returning the commands emitted
    /// while consuming it, in emission order. Never loses input and
    /// never blocks; a sequence truncated mid-chunk resumes correctly on
    /// the next `feed` call.
    pub fn feed<I: IntoIterator<Item = char>>(&mut self, input: I) -> Vec<Command> {
        let mut out = Vec::new();
        for c in input {
            self.feed_one(c, &mut out);
        }
        out
    }

    fn feed_one(&mut self, c: char, out: &mut Vec<Command>) {
        let b = c as u32;
        match self.state {
            ParserState::Ground => {
                if c == '\x1b' {
                    self.state = ParserState::Escape;
                } else if b < 0x20 {
                    out.push(Command::Control(b as u8));
                } else if b == 0x7f {
                    // dropped
                } else {
                    out.push(Command::Print(c));
                }
            }

            ParserState::Escape => match c {
                '[' => {
                    self.clear_csi();
                    self.state = ParserState::CsiEntry;
                }
                ']' => {
                    self.clear_osc();
                    self.state = ParserState::OscString;
                }
                'P' => self.state = ParserState::DcsEntry,
                '\\' => self.state = ParserState::Ground,
                'D' | 'M' | 'E' => self.state = ParserState::Ground,
                _ if (0x20..=0x2F).contains(&b) => self.state = ParserState::EscapeIntermediate,
                _ => self.state = ParserState::Ground,
            },

            ParserState::EscapeIntermediate => {
                if (0x20..=0x2F).contains(&b) {
                    // stay
                } else {
                    self.state = ParserState::Ground;
                }
            }

            ParserState::CsiEntry => match c {
                '0'..='9' => {
                    self.param_buf.push(c);
                    self.state = ParserState::CsiParam;
                }
                ';' => {
                    self.params.push(0);
                    self.state = ParserState::CsiParam;
                }
                _ if ('\x3C'..='\x3F').contains(&c) => {
                    self.intermediates.push(c);
                    self.state = ParserState::CsiParam;
                }
                _ if (0x20..=0x2F).contains(&b) => {
                    self.intermediates.push(c);
                    self.state = ParserState::CsiIntermediate;
                }
                _ if (0x40..=0x7E).contains(&b) => {
                    if !self.param_buf.is_empty() {
                        self.push_param();
                    }
                    self.emit_csi(c, out);
                    self.state = ParserState::Ground;
                }
                _ => self.state = ParserState::Ground,
            },

            ParserState::CsiParam => match c {
                '0'..='9' => self.param_buf.push(c),
                ';' => self.push_param(),
                _ if ('\x3C'..='\x3F').contains(&c) => self.intermediates.push(c),
                _ if (0x20..=0x2F).contains(&b) => {
                    self.push_param();
                    self.intermediates.push(c);
                    self.state = ParserState::CsiIntermediate;
                }
                _ if (0x40..=0x7E).contains(&b) => {
                    self.push_param();
                    self.emit_csi(c, out);
                    self.state = ParserState::Ground;
                }
                _ => self.state = ParserState::Ground,
            },

            ParserState::CsiIntermediate => {
                if (0x20..=0x2F).contains(&b) {
                    self.intermediates.push(c);
                } else if (0x40..=0x7E).contains(&b) {
                    self.emit_csi(c, out);
                    self.state = ParserState::Ground;
                } else {
                    self.state = ParserState::Ground;
                }
            }

            ParserState::OscString => match c {
                '\x07' => {
                    self.emit_osc(out);
                    self.state = ParserState::Ground;
                }
                '\x1b' => {
                    self.emit_osc(out);
                    self.state = ParserState::Escape;
                }
                ';' if !self.osc_parsed => {
                    self.osc_command = self.osc_digits.parse().unwrap_or(0);
                    self.osc_parsed = true;
                }
                _ => {
                    if self.osc_parsed {
                        self.osc_data.push(c);
                    } else {
                        self.osc_digits.push(c);
                    }
                }
            },

            ParserState::DcsEntry | ParserState::DcsParam | ParserState::DcsPassthrough => match c {
                '\x07' => self.state = ParserState::Ground,
                '\x1b' => self.state = ParserState::Escape,
                _ => {
                    // accumulated and discarded: DCS payloads are parsed and dropped.
                }
            },
        }
    }
}

#[cfg(test)]
mod tests;
