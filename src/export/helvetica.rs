//! Glyph widths of the built-in Helvetica font, for measuring table text.

/// Advance widths of the printable ASCII characters `' '..='~'`, in
/// thousandths of the font size.
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Width used for anything outside printable ASCII, as wide as the widest glyph.
const FALLBACK_WIDTH: u16 = 1015;

const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// The width in millimetres of `character` at `font_size` points.
pub fn character_width(character: char, font_size: f32) -> f32 {
    let units = (character as usize)
        .checked_sub(' ' as usize)
        .and_then(|index| ASCII_WIDTHS.get(index))
        .copied()
        .unwrap_or(FALLBACK_WIDTH);

    f32::from(units) / 1000.0 * font_size / POINTS_PER_MM
}

/// The width in millimetres of `text` set in a single line at `font_size` points.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars()
        .map(|character| character_width(character, font_size))
        .sum()
}
