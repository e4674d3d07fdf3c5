// File: src/core/tones.rs

/// The five Fitzpatrick skin-tone modifiers, U+1F3FB through U+1F3FF.
pub const SKIN_TONES: [char; 5] = ['\u{1F3FB}', '\u{1F3FC}', '\u{1F3FD}', '\u{1F3FE}', '\u{1F3FF}'];

pub fn is_skin_tone(c: char) -> bool {
    SKIN_TONES.contains(&c)
}

/// Drops every skin-tone modifier from `emoji`, leaving the base glyph and
/// any joiners or selectors in place.
pub fn normalize_skin_tones(emoji: &str) -> String {
    emoji.chars().filter(|&c| !is_skin_tone(c)).collect()
}
