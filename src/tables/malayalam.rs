//! Malayalam tables.
//!
//! `q` carries the chandrakkala, `H` the visarga (with `Hr`/`HR`/`Hl`/`HL`
//! for the vocalic vowels), and the trailing consonant rows are the chillu
//! forms, selected with the `w` marker after their base key.

use super::ScriptTables;

const NONE: char = '\u{0D00}';

pub(crate) static TABLES: ScriptTables = ScriptTables {
    v1_keys: &[
        'a', 'i', 'u', 'H', 'H', 'H', 'H', 'e', 'a', 'o', 'a', 'q', 'M', 'H',
    ],
    v2_keys: &[
        'a', 'i', 'u', 'r', 'R', 'l', 'L', 'e', 'i', 'o', 'u', 'q', 'M', 'H',
    ],
    v3_keys: &[
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', 'M', 'H',
    ],
    v1_char: &[
        'അ', 'ഇ', 'ഉ', 'ഃ', 'ഃ', 'ഃ', 'ഃ', 'എ', 'ഐ', 'ഒ', 'ഔ', '്', 'ം', 'ഃ',
    ],
    v2_char: &[
        'ആ', 'ഈ', 'ഊ', 'ഋ', 'ൠ', 'ഌ', 'ൡ', 'ഏ', 'ഐ', 'ഓ', 'ഔ', NONE, NONE, 'ഃ',
    ],
    v3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, 'ഃ',
    ],
    vs1_char: &[
        '\u{0008}', 'ി', 'ു', 'ഃ', 'ഃ', 'ഃ', 'ഃ', 'െ', 'ൈ', 'ൊ', 'ൌ', '്', 'ം', 'ഃ',
    ],
    vs2_char: &[
        'ാ', 'ീ', 'ൂ', 'ൃ', 'ൄ', 'ൢ', 'ൣ', 'േ', 'ൈ', 'ോ', 'ൌ', NONE, NONE, 'ഃ',
    ],
    vs3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, 'ഃ',
    ],
    c1_keys: &[
        'k', 'g', 'n', 'c', 'j', 'n', 'T', 'D', 'N', 't', 'd', 'n', 'p', 'b', 'm', 'y', 'r',
        'R', 'l', 'L', 'z', 'v', 'S', 's', 'h', 'N', 'n', 'R', 'r', 'l', 'L', 'k',
    ],
    c2_keys: &[
        'h', 'h', 'g', 'h', 'h', 'j', 'h', 'h', '*', 'h', 'h', '*', 'h', 'h', '*', '*', '*',
        '*', '*', '*', '*', '*', '*', 'h', '*', 'w', 'w', 'w', 'w', 'w', 'w', 'w',
    ],
    c3_keys: &[
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
    ],
    c1_char: &[
        'ക', 'ഗ', 'ന', 'ച', 'ജ', 'ഞ', 'ട', 'ഡ', 'ണ', 'ത', 'ദ', 'ന', 'പ', 'ബ', 'മ', 'യ', 'ര',
        'റ', 'ല', 'ള', 'ഴ', 'വ', 'ശ', 'സ', 'ഹ', 'ൺ', 'ൻ', 'ർ', 'ർ', 'ൽ', 'ൾ', 'ൿ',
    ],
    c2_char: &[
        'ഖ', 'ഘ', 'ങ', 'ഛ', 'ഝ', 'ഞ', 'ഠ', 'ഢ', NONE, 'ഥ', 'ധ', NONE, 'ഫ', 'ഭ', NONE, NONE,
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, 'ഷ', NONE, 'ൺ', 'ൻ', 'ർ', 'ർ', 'ൽ', 'ൾ',
        'ൿ',
    ],
    c3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
        NONE, NONE, NONE, NONE,
    ],
    digits: Some(&['൦', '൧', '൨', '൩', '൪', '൫', '൬', '൭', '൮', '൯']),
    nukta: &[],
};

/// Avagraha, emitted for `W` outside a composition.
pub(crate) const AVAGRAHA: char = '\u{0D3D}';
