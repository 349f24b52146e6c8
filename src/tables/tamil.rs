//! Tamil tables for the phonetic (Anjal) transducer.
//!
//! Keystroke conventions: `q` is the aytham, `w` the dental ந with `-`
//! alternants, `W` forces the alveolar ன, `x` is a placeholder that expands
//! to க்ஷ, and the `s`+`r` slot is a placeholder that expands to ஶ்ரீ.

use super::ScriptTables;

/// Placeholder emitted by the `x` key, expanded to க்ஷ by the transducer.
pub(crate) const KSHA_PLACEHOLDER: char = '\u{0B01}';
/// Placeholder in the cluster tables, expanded to ஶ்ரீ by the transducer.
pub(crate) const SRI_PLACEHOLDER: char = '\u{0B02}';

const NONE: char = '\u{0B00}';

pub(crate) static TABLES: ScriptTables = ScriptTables {
    v1_keys: &[
        'a', 'i', 'u', 'e', 'a', 'o', 'a', 'q', 'A', 'I', 'U', 'E', 'O',
    ],
    v2_keys: &[
        'a', 'i', 'u', 'e', 'i', 'o', 'u', 'q', '*', '*', '*', '*', 'M',
    ],
    v3_keys: &[
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
    ],
    v1_char: &[
        'அ', 'இ', 'உ', 'எ', 'ஐ', 'ஒ', 'ஔ', 'ஃ', 'ஆ', 'ஈ', 'ஊ', 'ஏ', 'ஓ',
    ],
    v2_char: &[
        'ஆ', 'ஈ', 'ஊ', 'ஏ', 'ஐ', 'ஓ', 'ஔ', NONE, NONE, NONE, NONE, NONE, 'ௐ',
    ],
    v3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    ],
    vs1_char: &[
        '\u{0008}', 'ி', 'ு', 'ெ', 'ை', 'ொ', 'ௌ', '்', 'ா', 'ீ', 'ூ', 'ே', 'ோ',
    ],
    vs2_char: &[
        'ா', 'ீ', 'ூ', 'ே', 'ை', 'ோ', 'ௌ', NONE, NONE, NONE, NONE, NONE, NONE,
    ],
    vs3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    ],
    c1_keys: &[
        'k', 'g', 'c', 'd', 't', 'p', 'b', 'R', 'y', 'r', 'l', 'v', 'z', 'L', 'n', 'n', 'N',
        'w', 'm', 'n', 'j', 's', 'S', 'h', 'x', 's', 'n', 'W',
    ],
    c2_keys: &[
        '*', '*', 'h', '*', 'h', '*', '*', '*', '*', '*', '*', '*', '*', '*', 'g', 'j', '*',
        '-', '*', '-', '*', 'h', '*', '*', '*', 'r', '=', '*',
    ],
    c3_keys: &[
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
        '*', '*', '*', '*', '*', '*', '*', '*', 'i', '*', '*',
    ],
    c1_char: &[
        'க', 'க', 'ச', 'ட', 'த', 'ப', 'ப', 'ற', 'ய', 'ர', 'ல', 'வ', 'ழ', 'ள', 'ன', 'ன', 'ண',
        'ந', 'ம', 'ன', 'ஜ', 'ச', 'ஸ', 'ஹ', KSHA_PLACEHOLDER, 'ச', 'ன', 'ன',
    ],
    c2_char: &[
        NONE, NONE, 'ச', NONE, 'த', NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, 'ங',
        'ஞ', NONE, 'ன', NONE, 'ந', NONE, 'ஷ', NONE, NONE, NONE, SRI_PLACEHOLDER, 'ன', 'ன',
    ],
    c3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, SRI_PLACEHOLDER,
        NONE, 'ன',
    ],
    // Modern Tamil text uses ASCII digits; the Tamil numerals are reachable
    // through the Tamil99 escape table instead.
    digits: None,
    nukta: &[],
};
