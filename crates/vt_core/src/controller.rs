//! The terminal controller: owns the primary and alternate screen
//! buffers and applies the parser's command stream to the active one.

use std::collections::HashMap;

use crate::cell::{Cell, Rgb};
use crate::clipboard::ClipboardRequest;
use crate::color::{bg_from_sgr, fg_from_sgr, from_palette_256, from_rgb, parse_color_spec};
use crate::config::EngineConfig;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::mode::Modes;
use crate::parser::{Command, Parser};
use crate::screen_buffer::ScreenBuffer;

/// Owns the primary and alternate `ScreenBuffer`s plus all ambient
/// terminal state (current style, scroll region, modes, title, palette
/// overrides) and applies a parsed `Command` stream to the active
/// buffer.
pub struct Controller {
    main: ScreenBuffer,
    alt: ScreenBuffer,
    using_alt: bool,

    current_style: Cell,
    saved_cursor: Option<Cursor>,
    scroll_top: i32,
    scroll_bottom: i32,
    modes: Modes,

    title: String,
    icon_name: String,

    palette_overrides: HashMap<u8, Rgb>,
    default_fg: Option<Rgb>,
    default_bg: Option<Rgb>,

    parser: Parser,
    clipboard_requests: Vec<ClipboardRequest>,
}

impl Controller {
    /// Create a controller over a blank `rows x cols` grid. Dimensions
    /// are clamped to at least 1 by the underlying `ScreenBuffer`.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::with_config(rows, cols, EngineConfig::default())
    }

    /// As `new`, but seeded from an `EngineConfig`.
    pub fn with_config(rows: i32, cols: i32, config: EngineConfig) -> Self {
        let main = ScreenBuffer::new(rows, cols);
        let alt = ScreenBuffer::new(main.rows(), main.cols());
        let mut palette_overrides = HashMap::new();
        for (idx, rgb) in config.palette_overrides {
            palette_overrides.insert(idx, rgb);
        }
        Controller {
            scroll_top: 0,
            scroll_bottom: main.rows() - 1,
            main,
            alt,
            using_alt: false,
            current_style: Cell::empty(),
            saved_cursor: None,
            modes: Modes::default(),
            title: config.title,
            icon_name: String::new(),
            palette_overrides,
            default_fg: config.default_fg,
            default_bg: config.default_bg,
            parser: Parser::new(),
            clipboard_requests: Vec::new(),
        }
    }

    fn active(&self) -> &ScreenBuffer {
        if self.using_alt {
            &self.alt
        } else {
            &self.main
        }
    }

    fn active_mut(&mut self) -> &mut ScreenBuffer {
        if self.using_alt {
            &mut self.alt
        } else {
            &mut self.main
        }
    }

    // ---- Reader API -----------------------------------------------

    pub fn rows(&self) -> i32 {
        self.active().rows()
    }

    pub fn cols(&self) -> i32 {
        self.active().cols()
    }

    pub fn cursor(&self) -> Cursor {
        self.active().cursor()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    pub fn modes(&self) -> Modes {
        self.modes
    }

    pub fn is_using_alt_screen(&self) -> bool {
        self.using_alt
    }

    pub fn scroll_region(&self) -> (i32, i32) {
        (self.scroll_top, self.scroll_bottom)
    }

    pub fn default_fg(&self) -> Option<Rgb> {
        self.default_fg
    }

    pub fn default_bg(&self) -> Option<Rgb> {
        self.default_bg
    }

    pub fn palette_override(&self, index: u8) -> Option<Rgb> {
        self.palette_overrides.get(&index).copied()
    }

    pub fn get_cell(&self, x: i32, y: i32) -> Result<Cell> {
        self.active().get(x, y)
    }

    pub fn get_row(&self, y: i32) -> Result<&[Cell]> {
        self.active().get_row(y)
    }

    /// Every row joined by `\n`, each row the concatenation of its
    /// cells' characters.
    pub fn grid_to_string(&self) -> String {
        let rows = self.rows();
        let mut lines = Vec::with_capacity(rows as usize);
        for y in 0..rows {
            let row = self.active().get_row(y).expect("y in range");
            lines.push(row.iter().map(|c| c.ch).collect::<String>());
        }
        lines.join("\n")
    }

    /// Drain OSC 52 clipboard requests accumulated since the last call.
    /// The engine never touches a system clipboard itself.
    pub fn take_clipboard_requests(&mut self) -> Vec<ClipboardRequest> {
        std::mem::take(&mut self.clipboard_requests)
    }

    // ---- Engine API -------------------------------------------------

    /// Feed input through the parser and apply the resulting commands to
    /// the active buffer, in order.
    pub fn write<I: IntoIterator<Item = char>>(&mut self, input: I) {
        let commands = self.parser.feed(input);
        for cmd in commands {
            self.apply(cmd);
        }
    }

    /// Resize both buffers, re-clamp the cursor, and reset the scroll
    /// region to the full new height.
    pub fn resize(&mut self, new_rows: i32, new_cols: i32) {
        self.main.resize(new_rows, new_cols);
        self.alt.resize(new_rows, new_cols);
        self.main.clamp_cursor();
        self.alt.clamp_cursor();
        self.scroll_bottom = self.main.rows() - 1;
        if self.scroll_top > self.scroll_bottom {
            self.scroll_top = 0;
        }
    }

    /// Full screen clear and cursor to `(0, 0)`.
    pub fn clear(&mut self) {
        self.active_mut().clear();
        self.active_mut().set_cursor(Cursor::new(0, 0));
    }

    /// Full reset: both buffers cleared, cursor at origin, style reset,
    /// parser reset, modes default, title/icon cleared, scroll region
    /// full, saved cursor dropped.
    pub fn reset(&mut self) {
        let rows = self.main.rows();
        let cols = self.main.cols();
        self.main = ScreenBuffer::new(rows, cols);
        self.alt = ScreenBuffer::new(rows, cols);
        self.using_alt = false;
        self.current_style.reset_style();
        self.saved_cursor = None;
        self.modes = Modes::default();
        self.title.clear();
        self.icon_name.clear();
        self.scroll_top = 0;
        self.scroll_bottom = rows - 1;
        self.parser.reset();
    }

    // ---- Command dispatch --------------------------------------------

    fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Print(ch) => self.print_char(ch),
            Command::Control(b) => self.apply_control(b),
            Command::Csi {
                final_byte,
                params,
                intermediates,
            } => self.apply_csi(final_byte, &params, &intermediates),
            Command::Osc { command, data } => self.apply_osc(command, &data),
        }
    }

    fn print_char(&mut self, ch: char) {
        if self.modes.insert {
            let cur = self.active().cursor();
            self.active_mut().insert_cells(cur.x, cur.y, 1);
        }
        let cell = self.current_style.with_char(ch);
        let mut cur = self.active().cursor();
        let _ = self.active_mut().set(cur.x, cur.y, cell);

        cur.x += 1;
        if cur.x == self.active().cols() {
            cur.x = 0;
            cur.y += 1;
        }
        self.advance_line_and_scroll_if_needed(&mut cur);
        self.active_mut().set_cursor(cur);
    }

    /// Scroll the active region when `cur.y` has crossed `scroll_bottom`,
    /// clamping `cur.y` back onto the margin. Shared by `Print` wrap and
    /// `LF` handling.
    fn advance_line_and_scroll_if_needed(&mut self, cur: &mut Cursor) {
        if cur.y > self.scroll_bottom {
            let (top, bottom) = (self.scroll_top, self.scroll_bottom);
            self.active_mut().scroll_region_up(top, bottom, 1);
            cur.y = self.scroll_bottom;
        }
    }

    fn apply_control(&mut self, b: u8) {
        match b {
            0x0A => {
                let mut cur = self.active().cursor();
                cur.y += 1;
                if self.modes.newline {
                    cur.x = 0;
                }
                self.advance_line_and_scroll_if_needed(&mut cur);
                self.active_mut().set_cursor(cur);
            }
            0x0D => {
                let mut cur = self.active().cursor();
                cur.x = 0;
                self.active_mut().set_cursor(cur);
            }
            0x09 => {
                let cols = self.active().cols();
                let cur = self.active().cursor();
                let next = ((cur.x / 8) + 1) * 8;
                if next >= cols {
                    self.apply_control(0x0A);
                } else {
                    let mut cur = cur;
                    cur.x = next;
                    self.active_mut().set_cursor(cur);
                }
            }
            0x08 => {
                let mut cur = self.active().cursor();
                if cur.x > 0 {
                    cur.x -= 1;
                    self.active_mut().set_cursor(cur);
                }
            }
            _ => {
                log::trace!("ignoring control byte 0x{b:02X}");
            }
        }
    }

    fn apply_csi(&mut self, final_byte: char, params: &[i32], intermediates: &str) {
        let p = |idx: usize| -> i32 { params.get(idx).copied().unwrap_or(0) };
        let n = |idx: usize| -> i32 { p(idx).max(1) };
        let private = intermediates == "?";

        match final_byte {
            'A' => {
                let mut cur = self.active().cursor();
                cur.y = (cur.y - n(0)).clamp(self.scroll_top, self.scroll_bottom);
                self.active_mut().set_cursor(cur);
            }
            'B' => {
                let mut cur = self.active().cursor();
                cur.y = (cur.y + n(0)).clamp(self.scroll_top, self.scroll_bottom);
                self.active_mut().set_cursor(cur);
            }
            'C' => {
                let cols = self.active().cols();
                let mut cur = self.active().cursor();
                cur.x = (cur.x + n(0)).clamp(0, cols - 1);
                self.active_mut().set_cursor(cur);
            }
            'D' => {
                let mut cur = self.active().cursor();
                cur.x = (cur.x - n(0)).clamp(0, self.active().cols() - 1);
                self.active_mut().set_cursor(cur);
            }
            'E' => {
                let mut cur = self.active().cursor();
                cur.y = (cur.y + n(0)).clamp(self.scroll_top, self.scroll_bottom);
                cur.x = 0;
                self.active_mut().set_cursor(cur);
            }
            'F' => {
                let mut cur = self.active().cursor();
                cur.y = (cur.y - n(0)).clamp(self.scroll_top, self.scroll_bottom);
                cur.x = 0;
                self.active_mut().set_cursor(cur);
            }
            'G' => {
                let cols = self.active().cols();
                let mut cur = self.active().cursor();
                cur.x = (n(0) - 1).clamp(0, cols - 1);
                self.active_mut().set_cursor(cur);
            }
            'H' | 'f' => {
                let (rows, cols) = (self.active().rows(), self.active().cols());
                let mut cur = self.active().cursor();
                cur.y = (n(0) - 1).clamp(0, rows - 1);
                cur.x = (n(1) - 1).clamp(0, cols - 1);
                self.active_mut().set_cursor(cur);
            }
            'd' => {
                let rows = self.active().rows();
                let mut cur = self.active().cursor();
                cur.y = (n(0) - 1).clamp(0, rows - 1);
                self.active_mut().set_cursor(cur);
            }
            'J' => self.erase_in_display(p(0)),
            'K' => self.erase_in_line(p(0)),
            'S' => {
                let (top, bottom) = (self.scroll_top, self.scroll_bottom);
                self.active_mut().scroll_region_up(top, bottom, n(0));
            }
            'T' => {
                let (top, bottom) = (self.scroll_top, self.scroll_bottom);
                self.active_mut().scroll_region_down(top, bottom, n(0));
            }
            'L' => {
                let y = self.active().cursor().y;
                self.active_mut().insert_lines(y, n(0));
            }
            'M' => {
                let y = self.active().cursor().y;
                self.active_mut().delete_lines(y, n(0));
            }
            '@' => {
                let cur = self.active().cursor();
                self.active_mut().insert_cells(cur.x, cur.y, n(0));
            }
            'P' => {
                let cur = self.active().cursor();
                self.active_mut().delete_cells(cur.x, cur.y, n(0));
            }
            'X' => {
                let cur = self.active().cursor();
                self.active_mut().erase_cells(cur.x, cur.y, n(0));
            }
            'm' => self.apply_sgr(params),
            'h' => self.apply_mode(true, params, private),
            'l' => self.apply_mode(false, params, private),
            's' => self.saved_cursor = Some(self.active().cursor()),
            'u' => {
                if let Some(saved) = self.saved_cursor {
                    self.active_mut().set_cursor(saved);
                }
            }
            'r' => self.apply_decstbm(params),
            _ => {
                log::trace!("ignoring CSI final byte '{final_byte}' params={params:?}");
            }
        }
    }

    fn erase_in_display(&mut self, mode: i32) {
        match mode {
            0 => self.active_mut().clear_from_cursor(),
            1 => self.active_mut().clear_to_cursor(),
            2 | 3 => self.active_mut().clear(),
            _ => {}
        }
    }

    fn erase_in_line(&mut self, mode: i32) {
        let cur = self.active().cursor();
        let cols = self.active().cols();
        match mode {
            0 => self.active_mut().erase_cells(cur.x, cur.y, cols - cur.x),
            1 => self.active_mut().erase_cells(0, cur.y, cur.x + 1),
            2 => self.active_mut().clear_row(cur.y),
            _ => {}
        }
    }

    fn apply_sgr(&mut self, params: &[i32]) {
        if params.is_empty() {
            self.current_style.reset_style();
            return;
        }
        let mut i = 0;
        while i < params.len() {
            match params[i] {
                0 => self.current_style.reset_style(),
                1 => self.current_style.bold = true,
                22 => self.current_style.bold = false,
                3 => self.current_style.italic = true,
                23 => self.current_style.italic = false,
                4 => self.current_style.underline = true,
                24 => self.current_style.underline = false,
                code @ (30..=37 | 90..=97) => self.current_style.fg = fg_from_sgr(code),
                code @ (40..=47 | 100..=107) => self.current_style.bg = bg_from_sgr(code),
                39 => self.current_style.fg = None,
                49 => self.current_style.bg = None,
                code @ (38 | 48) => {
                    i += 1;
                    if i < params.len() {
                        match params[i] {
                            5 => {
                                i += 1;
                                if i < params.len() {
                                    let rgb = from_palette_256(params[i].clamp(0, 255) as u8);
                                    self.set_extended_color(code, rgb);
                                }
                            }
                            2 => {
                                let r = params.get(i + 1).copied().unwrap_or(0);
                                let g = params.get(i + 2).copied().unwrap_or(0);
                                let b = params.get(i + 3).copied().unwrap_or(0);
                                i += 3;
                                self.set_extended_color(code, from_rgb(r, g, b));
                            }
                            _ => {
                                // unrecognized type byte: consume exactly this one
                                // parameter and continue, per the source behavior.
                            }
                        }
                    }
                }
                _ => {}
            }
            i += 1;
        }
    }

    fn set_extended_color(&mut self, code: i32, rgb: Rgb) {
        if code == 38 {
            self.current_style.fg = Some(rgb);
        } else {
            self.current_style.bg = Some(rgb);
        }
    }

    fn apply_mode(&mut self, set: bool, params: &[i32], private: bool) {
        for &code in params {
            match (private, code) {
                (false, 4) => self.modes.insert = set,
                (false, 20) => self.modes.newline = set,
                (true, 1) => self.modes.cursor_keys = set,
                (true, 25) => {
                    let mut cur = self.active().cursor();
                    cur.visible = set;
                    self.active_mut().set_cursor(cur);
                }
                (true, 1049) => self.set_alt_screen(set),
                (true, 2004) => self.modes.bracketed_paste = set,
                _ => {}
            }
        }
    }

    fn set_alt_screen(&mut self, enable: bool) {
        if enable {
            if !self.using_alt {
                self.alt = ScreenBuffer::new(self.main.rows(), self.main.cols());
                self.using_alt = true;
            }
        } else {
            self.using_alt = false;
        }
    }

    fn apply_decstbm(&mut self, params: &[i32]) {
        let rows = self.main.rows();
        let top_param = params.first().copied().unwrap_or(0).max(1);
        let bottom_param = match params.get(1).copied().unwrap_or(0) {
            0 => rows,
            v => v,
        };
        let top = (top_param - 1).clamp(0, rows - 1);
        let bottom = (bottom_param - 1).clamp(0, rows - 1);
        if top <= bottom {
            self.scroll_top = top;
            self.scroll_bottom = bottom;
        } else {
            self.scroll_top = 0;
            self.scroll_bottom = rows - 1;
        }
    }

    fn apply_osc(&mut self, command: i32, data: &str) {
        match command {
            0 => {
                self.title = data.to_string();
                self.icon_name = data.to_string();
            }
            1 => self.icon_name = data.to_string(),
            2 => self.title = data.to_string(),
            4 => {
                let tokens: Vec<&str> = data.split(';').collect();
                for pair in tokens.chunks(2) {
                    if let [idx_str, spec] = pair {
                        if let Ok(idx) = idx_str.parse::<i32>() {
                            if (0..256).contains(&idx) {
                                if let Some(rgb) = parse_color_spec(spec) {
                                    self.palette_overrides.insert(idx as u8, rgb);
                                }
                            }
                        }
                    }
                }
            }
            10 => {
                if let Some(rgb) = parse_color_spec(data) {
                    self.default_fg = Some(rgb);
                }
            }
            11 => {
                if let Some(rgb) = parse_color_spec(data) {
                    self.default_bg = Some(rgb);
                }
            }
            52 => {
                if let Some((selector, payload)) = data.split_once(';') {
                    self.clipboard_requests.push(ClipboardRequest {
                        selector: selector.to_string(),
                        data: payload.to_string(),
                    });
                }
            }
            _ => {
                log::trace!("ignoring OSC {command}");
            }
        }
    }
}
