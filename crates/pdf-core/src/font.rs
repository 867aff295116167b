//! Built-in Type1 fonts and WinAnsi encoding

use lopdf::{dictionary, Dictionary};

/// The standard 14 fonts this writer can reference without embedding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum StandardFont {
    #[default]
    Helvetica,
    Courier,
}

impl StandardFont {
    /// PostScript name used as /BaseFont
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::Courier => "Courier",
        }
    }

    /// Glyph advance for a WinAnsi byte, in 1/1000 em
    pub fn byte_width(&self, byte: u8) -> u16 {
        match self {
            StandardFont::Courier => 600,
            StandardFont::Helvetica => helvetica_width(byte),
        }
    }

    /// Width of text in points at the given size
    ///
    /// Characters are measured after WinAnsi substitution, so the width
    /// matches what is actually drawn.
    pub fn text_width_points(&self, text: &str, size: f32) -> f64 {
        let units: u32 = encode_win_ansi(text)
            .iter()
            .map(|&b| u32::from(self.byte_width(b)))
            .sum();
        f64::from(units) * f64::from(size) / 1000.0
    }

    /// Font resource dictionary
    pub fn to_pdf_dictionary(&self) -> Dictionary {
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => self.base_font(),
            "Encoding" => "WinAnsiEncoding",
        }
    }
}

/// Encode text for a simple font using WinAnsiEncoding
///
/// The rupee sign has no WinAnsi code point and is spelled `Rs.`.
/// Anything else that cannot be encoded becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{20B9}' => out.extend_from_slice(b"Rs."),
            '\t' => out.push(b' '),
            ' '..='~' | '\u{A0}'..='\u{FF}' => out.push(c as u8),
            '\u{20AC}' => out.push(0x80),
            '\u{2026}' => out.push(0x85),
            '\u{2018}' => out.push(0x91),
            '\u{2019}' => out.push(0x92),
            '\u{201C}' => out.push(0x93),
            '\u{201D}' => out.push(0x94),
            '\u{2022}' => out.push(0x95),
            '\u{2013}' => out.push(0x96),
            '\u{2014}' => out.push(0x97),
            '\u{2122}' => out.push(0x99),
            _ => out.push(b'?'),
        }
    }
    out
}

/// Helvetica advance widths (Adobe AFM) indexed by WinAnsi byte
fn helvetica_width(byte: u8) -> u16 {
    match byte {
        b' ' | b'!' => 278,
        b'"' => 355,
        b'#' | b'$' => 556,
        b'%' => 889,
        b'&' => 667,
        b'\'' => 191,
        b'(' | b')' => 333,
        b'*' => 389,
        b'+' => 584,
        b',' => 278,
        b'-' => 333,
        b'.' | b'/' => 278,
        b'0'..=b'9' => 556,
        b':' | b';' => 278,
        b'<' | b'=' | b'>' => 584,
        b'?' => 556,
        b'@' => 1015,
        b'A' | b'B' => 667,
        b'C' | b'D' => 722,
        b'E' => 667,
        b'F' => 611,
        b'G' => 778,
        b'H' => 722,
        b'I' => 278,
        b'J' => 500,
        b'K' => 667,
        b'L' => 556,
        b'M' => 833,
        b'N' => 722,
        b'O' => 778,
        b'P' => 667,
        b'Q' => 778,
        b'R' => 722,
        b'S' => 667,
        b'T' => 611,
        b'U' => 722,
        b'V' => 667,
        b'W' => 944,
        b'X' | b'Y' => 667,
        b'Z' => 611,
        b'[' | b'\\' | b']' => 278,
        b'^' => 469,
        b'_' => 556,
        b'`' => 333,
        b'a' | b'b' => 556,
        b'c' => 500,
        b'd' | b'e' => 556,
        b'f' => 278,
        b'g' | b'h' => 556,
        b'i' | b'j' => 222,
        b'k' => 500,
        b'l' => 222,
        b'm' => 833,
        b'n'..=b'q' => 556,
        b'r' => 333,
        b's' => 500,
        b't' => 278,
        b'u' => 556,
        b'v' => 500,
        b'w' => 722,
        b'x' | b'y' | b'z' => 500,
        b'{' | b'}' => 334,
        b'|' => 260,
        b'~' => 584,
        0x80 => 556,
        0x85 | 0x97 | 0x99 => 1000,
        0x91 | 0x92 => 222,
        0x93 | 0x94 => 333,
        0x95 => 350,
        0x96 => 556,
        0xA0 => 278,
        0xA1 => 333,
        0xA2..=0xA5 => 556,
        0xA6 => 260,
        0xA7 => 556,
        0xA8 => 333,
        0xA9 => 737,
        0xAA => 370,
        0xAB => 556,
        0xAC => 584,
        0xAD => 333,
        0xAE => 737,
        0xAF => 333,
        0xB0 => 400,
        0xB1 => 584,
        0xB2..=0xB4 => 333,
        0xB5 => 556,
        0xB6 => 537,
        0xB7 => 278,
        0xB8 | 0xB9 => 333,
        0xBA => 365,
        0xBB => 556,
        0xBC..=0xBE => 834,
        0xBF => 611,
        0xC0..=0xC5 => 667,
        0xC6 => 1000,
        0xC7 => 722,
        0xC8..=0xCB => 667,
        0xCC..=0xCF => 278,
        0xD0 | 0xD1 => 722,
        0xD2..=0xD6 | 0xD8 => 778,
        0xD7 => 584,
        0xD9..=0xDC => 722,
        0xDD | 0xDE => 667,
        0xDF => 611,
        0xE0..=0xE5 => 556,
        0xE6 => 889,
        0xE7 => 500,
        0xE8..=0xEB => 556,
        0xEC..=0xEF => 278,
        0xF0..=0xF6 => 556,
        0xF7 => 584,
        0xF8 => 611,
        0xF9..=0xFC => 556,
        0xFD => 500,
        0xFE => 556,
        0xFF => 500,
        _ => 556,
    }
}
