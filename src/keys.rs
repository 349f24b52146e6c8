//! Keystroke-level helpers: shift resolution and the fallback mapping for
//! keys struck outside an active composition.

/// The backspace key as reported by hosts in `prev_key`.
pub(crate) const BACKSPACE: char = '\u{0008}';

const BASE_ROW: &[char] = &[
    '`', '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '-', '=', '[', ']', ';', '\'', ',',
    '.', '/', '\\',
];
const SHIFT_ROW: &[char] = &[
    '~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '{', '}', ':', '"', '<',
    '>', '?', '|',
];

/// Normalises a raw key according to the shift state: with shift held,
/// letters uppercase and the symbol row maps to its shifted face. Keys
/// that already carry their final character pass through untouched.
pub(crate) fn resolve_shift(key: char, shifted: bool) -> char {
    if !shifted || key.is_whitespace() {
        return key;
    }
    if key.is_ascii_alphabetic() {
        return key.to_ascii_uppercase();
    }
    match BASE_ROW.iter().position(|&c| c == key) {
        Some(i) => SHIFT_ROW[i],
        None => key,
    }
}

const UNMAPPED_KEYS: &[char] = &[
    '´', '¨', 'ˆ', '˜', '`', '1', '2', '3', '4', '5', '6', '7', '8', '9', '0',
];
const UNMAPPED_PLAIN: &[char] = &[
    'e', 'u', 'i', 'n', '`', '௧', '௨', '௩', '௪', '௫', '௬', '௭', '௮', '௯', '௦',
];
const UNMAPPED_SHIFTED: &[char] = &[
    'E', 'U', 'I', 'N', '~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')',
];

/// The character a key yields once composition has been terminated and the
/// key is passed through untranslated. Dead accents resolve to their base
/// letter and unshifted digits yield Tamil numerals.
pub(crate) fn unmapped_char(key: char, shifted: bool) -> char {
    match UNMAPPED_KEYS.iter().position(|&c| c == key) {
        Some(i) if shifted => UNMAPPED_SHIFTED[i],
        Some(i) => UNMAPPED_PLAIN[i],
        None => resolve_shift(key, shifted),
    }
}
