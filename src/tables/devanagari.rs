//! Devanagari tables.
//!
//! `q` carries the virama, `qq` the nukta, `M`/`H`/`Q` the anusvara,
//! visarga and candrabindu; `OM` composes ॐ through the second vowel slot.

use super::ScriptTables;

const NONE: char = '\u{0B00}';

pub(crate) static TABLES: ScriptTables = ScriptTables {
    v1_keys: &[
        'a', 'i', 'u', 'e', 'a', 'o', 'a', 'R', 'L', 'A', 'I', 'U', 'M', 'H', 'q', 'Q', 'O',
        'E',
    ],
    v2_keys: &[
        'a', 'i', 'u', 'e', 'i', 'o', 'u', 'r', 'l', '*', '*', '*', '*', '*', 'q', '*', 'M',
        '*',
    ],
    v3_keys: &[
        '*', '*', '*', 'e', '*', 'o', '*', '*', '*', '*', '*', '*', '*', '*', 'q', '*', '*',
        '*',
    ],
    v1_char: &[
        'अ', 'इ', 'उ', 'ए', 'अ', 'ओ', 'अ', 'ऋ', 'ऌ', 'आ', 'ई', 'ऊ', 'ं', 'ः', '्', 'ँ', 'ऒ',
        'ऎ',
    ],
    v2_char: &[
        'आ', 'ई', 'ऊ', 'ऍ', 'ऐ', 'ऑ', 'औ', 'ॠ', 'ॡ', NONE, NONE, NONE, NONE, NONE, '़', NONE,
        'ॐ', NONE,
    ],
    v3_char: &[
        NONE, NONE, NONE, 'ऎ', NONE, 'ऒ', NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, 'ँ',
        NONE, NONE, NONE,
    ],
    vs1_char: &[
        '\u{0008}', 'ि', 'ु', 'े', '\u{0008}', 'ो', '\u{0008}', 'ृ', 'ॢ', 'ा', 'ी', 'ू', 'ं',
        'ः', '्', 'ँ', 'ॊ', 'ॆ',
    ],
    vs2_char: &[
        'ा', 'ी', 'ू', 'ॅ', 'ै', 'ॉ', 'ौ', 'ॄ', 'ॣ', NONE, NONE, NONE, NONE, NONE, '़', NONE,
        'ॐ', NONE,
    ],
    vs3_char: &[
        NONE, NONE, NONE, 'ॆ', NONE, 'ॊ', NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, 'ँ',
        NONE, NONE, NONE,
    ],
    c1_keys: &[
        'k', 'g', 'n', 'c', 'j', 'T', 'D', 'n', 'N', 't', 'd', 'n', 'p', 'b', 'm', 'y', 'r',
        'l', 'z', 'v', 's', 'S', 'h',
    ],
    c2_keys: &[
        'h', 'h', 'g', 'h', 'h', 'h', 'h', 'y', '*', 'h', 'h', 'n', 'h', 'h', '*', '*', 'r',
        'l', 'h', '*', 'h', '*', '*',
    ],
    c3_keys: &[
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
        'l', '*', '*', '*', '*', '*',
    ],
    c1_char: &[
        'क', 'ग', 'न', 'च', 'ज', 'ट', 'ड', 'न', 'ण', 'त', 'द', 'न', 'प', 'ब', 'म', 'य', 'र',
        'ल', 'श', 'व', 'स', 'ष', 'ह',
    ],
    c2_char: &[
        'ख', 'घ', 'ङ', 'छ', 'झ', 'ठ', 'ढ', 'ञ', NONE, 'थ', 'ध', 'ऩ', 'फ', 'भ', NONE, NONE,
        'ऱ', 'ळ', 'ऴ', NONE, 'श', NONE, NONE,
    ],
    c3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
        NONE, NONE, NONE, 'ऴ', NONE, NONE, NONE, NONE, NONE,
    ],
    digits: Some(&['०', '१', '२', '३', '४', '५', '६', '७', '८', '९']),
    nukta: &[
        ('क', '\u{0958}'),
        ('ख', '\u{0959}'),
        ('ग', '\u{095A}'),
        ('ज', '\u{095B}'),
        ('ड', '\u{095C}'),
        ('ढ', '\u{095D}'),
        ('फ', '\u{095E}'),
        ('य', '\u{095F}'),
    ],
};

/// Single danda and double danda.
pub(crate) const DANDA: char = '\u{0964}';
pub(crate) const DOUBLE_DANDA: char = '\u{0965}';
/// Avagraha, emitted for `#`.
pub(crate) const AVAGRAHA: char = '\u{093D}';
