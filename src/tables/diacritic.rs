//! Tables for the Latin-diacritic transcription alphabet.
//!
//! Doubling a vowel key lengthens it (`aa` → ā, `RR` → ṝ); capital
//! consonant keys select the retroflex and nasal diacritic forms directly.
//! Being an alphabet, the "vowel sign" tables are the vowel letters
//! themselves and there is no virama.

use super::ScriptTables;

const NONE: char = '\0';

pub(crate) static TABLES: ScriptTables = ScriptTables {
    v1_keys: &[
        'a', 'i', 'u', 'e', 'o', 'A', 'I', 'U', 'E', 'O', 'R', 'L',
    ],
    v2_keys: &[
        'a', 'i', 'u', 'e', 'o', '*', '*', '*', '*', '*', 'R', 'L',
    ],
    v3_keys: &[
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
    ],
    v1_char: &[
        'a', 'i', 'u', 'e', 'o', 'ā', 'ī', 'ū', 'ē', 'ō', 'ṛ', 'ḷ',
    ],
    v2_char: &[
        'ā', 'ī', 'ū', 'ē', 'ō', NONE, NONE, NONE, NONE, NONE, 'ṝ', 'ḹ',
    ],
    v3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    ],
    vs1_char: &[
        'a', 'i', 'u', 'e', 'o', 'ā', 'ī', 'ū', 'ē', 'ō', 'ṛ', 'ḷ',
    ],
    vs2_char: &[
        'ā', 'ī', 'ū', 'ē', 'ō', NONE, NONE, NONE, NONE, NONE, 'ṝ', 'ḹ',
    ],
    vs3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    ],
    c1_keys: &[
        'k', 'g', 'c', 'j', 't', 'd', 'n', 'p', 'b', 'm', 'y', 'r', 'l', 'v', 's', 'h', 'w',
        'f', 'x', 'q', 'T', 'D', 'N', 'S', 'z', 'G', 'J', 'M', 'H', 'Z',
    ],
    c2_keys: &[
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
    ],
    c3_keys: &[
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
    ],
    c1_char: &[
        'k', 'g', 'c', 'j', 't', 'd', 'n', 'p', 'b', 'm', 'y', 'r', 'l', 'v', 's', 'h', 'w',
        'f', 'x', 'q', 'ṭ', 'ḍ', 'ṇ', 'ś', 'ṣ', 'ṅ', 'ñ', 'ṃ', 'ḥ', 'ḻ',
    ],
    c2_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
        NONE, NONE,
    ],
    c3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
        NONE, NONE,
    ],
    digits: None,
    nukta: &[],
};
