//! ANSI color resolution: the fixed 16/256-color palettes and the SGR and
//! OSC color-spec parsing helpers that turn parameter ints / text specs
//! into 24-bit RGB.

use crate::cell::Rgb;

/// The standard 16-color VGA-family palette (8 standard + 8 bright).
pub const PALETTE_16: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // 0 black
    Rgb::new(0xCD, 0x00, 0x00), // 1 red
    Rgb::new(0x00, 0xCD, 0x00), // 2 green
    Rgb::new(0xCD, 0xCD, 0x00), // 3 yellow
    Rgb::new(0x00, 0x00, 0xEE), // 4 blue
    Rgb::new(0xCD, 0x00, 0xCD), // 5 magenta
    Rgb::new(0x00, 0xCD, 0xCD), // 6 cyan
    Rgb::new(0xE5, 0xE5, 0xE5), // 7 white (light gray)
    Rgb::new(0x7F, 0x7F, 0x7F), // 8 bright black (gray)
    Rgb::new(0xFF, 0x00, 0x00), // 9 bright red
    Rgb::new(0x00, 0xFF, 0x00), // 10 bright green
    Rgb::new(0xFF, 0xFF, 0x00), // 11 bright yellow
    Rgb::new(0x5C, 0x5C, 0xFF), // 12 bright blue
    Rgb::new(0xFF, 0x00, 0xFF), // 13 bright magenta
    Rgb::new(0x00, 0xFF, 0xFF), // 14 bright cyan
    Rgb::new(0xFF, 0xFF, 0xFF), // 15 bright white
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

fn cube_level(c: u8) -> u8 {
    CUBE_LEVELS[c as usize]
}

/// The xterm 256-color palette: 0-15 mirror `PALETTE_16`, 16-231 are a
/// 6x6x6 color cube, 232-255 are a 24-step grayscale ramp.
pub static PALETTE_256: [Rgb; 256] = build_palette_256();

const fn build_palette_256() -> [Rgb; 256] {
    let mut table = [Rgb::new(0, 0, 0); 256];
    let mut i = 0;
    while i < 16 {
        table[i] = PALETTE_16[i];
        i += 1;
    }
    let mut idx = 16;
    let mut r = 0;
    while r < 6 {
        let mut g = 0;
        while g < 6 {
            let mut b = 0;
            while b < 6 {
                table[idx] = Rgb::new(CUBE_LEVELS[r], CUBE_LEVELS[g], CUBE_LEVELS[b]);
                idx += 1;
                b += 1;
            }
            g += 1;
        }
        r += 1;
    }
    let mut step = 0;
    while step < 24 {
        let v = (8 + 10 * step) as u8;
        table[232 + step as usize] = Rgb::new(v, v, v);
        step += 1;
    }
    table
}

/// Resolve an SGR foreground code: `30..=37` (standard) or `90..=97`
/// (bright). Returns `None` for any other code.
pub fn fg_from_sgr(code: i32) -> Option<Rgb> {
    match code {
        30..=37 => Some(PALETTE_16[(code - 30) as usize]),
        90..=97 => Some(PALETTE_16[(code - 90 + 8) as usize]),
        _ => None,
    }
}

/// Resolve an SGR background code: `40..=47` (standard) or `100..=107`
/// (bright). Returns `None` for any other code.
pub fn bg_from_sgr(code: i32) -> Option<Rgb> {
    match code {
        40..=47 => Some(PALETTE_16[(code - 40) as usize]),
        100..=107 => Some(PALETTE_16[(code - 100 + 8) as usize]),
        _ => None,
    }
}

/// Resolve a 256-color palette index (0-255) to RGB, per §4.5. Indices
/// are not range-checked beyond the array bounds; callers mask to `u8`.
pub fn from_palette_256(index: u8) -> Rgb {
    PALETTE_256[index as usize]
}

/// Construct an `Rgb` from possibly out-of-range components, clamping
/// each to `0..=255`.
pub fn from_rgb(r: i32, g: i32, b: i32) -> Rgb {
    Rgb::from_rgb(r, g, b)
}

fn parse_hex2(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

fn parse_hex4_high_byte(s: &str) -> Option<u8> {
    let v = u16::from_str_radix(s, 16).ok()?;
    Some((v >> 8) as u8)
}

/// Parse a terminal color spec as used by OSC 4/10/11: either
/// `rgb:RR/GG/BB` (2 or 4 hex digits per component — the high byte is
/// used for 4-digit components) or `#RRGGBB`. Malformed specs yield
/// `None` and must leave the caller's state unchanged.
pub fn parse_color_spec(spec: &str) -> Option<Rgb> {
    if let Some(rest) = spec.strip_prefix("rgb:") {
        let mut parts = rest.split('/');
        let r = parts.next()?;
        let g = parts.next()?;
        let b = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        return parse_component(r).zip(parse_component(g)).zip(parse_component(b)).map(|((r, g), b)| Rgb::new(r, g, b));
    }
    if let Some(hex) = spec.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = parse_hex2(&hex[0..2])?;
        let g = parse_hex2(&hex[2..4])?;
        let b = parse_hex2(&hex[4..6])?;
        return Some(Rgb::new(r, g, b));
    }
    None
}

fn parse_component(s: &str) -> Option<u8> {
    match s.len() {
        2 => parse_hex2(s),
        4 => parse_hex4_high_byte(s),
        _ => None,
    }
}
