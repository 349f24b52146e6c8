//! Gurmukhi tables.
//!
//! `x` is the addak, `M`/`mm` the bindi and tippi, `q` the virama with `qq`
//! for the nukta and `qqq` for the udaat. The three-key sequences `onk` and
//! `ad` compose ੴ (ik onkar) and ☬ (khanda).

use super::ScriptTables;

const NONE: char = '\u{0B00}';

pub(crate) static TABLES: ScriptTables = ScriptTables {
    v1_keys: &[
        'a', 'i', 'u', 'e', 'a', 'o', 'a', 'x', 'M', 'H', 'q', 'Q', 'o', 'a',
    ],
    v2_keys: &[
        'a', 'i', 'u', '*', 'i', '*', 'u', '*', 'm', '*', 'q', 'q', 'n', 'd',
    ],
    v3_keys: &[
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', 'q', '*', 'k', '*',
    ],
    v1_char: &[
        'ਅ', 'ਇ', 'ਉ', 'ਏ', 'ਅ', 'ਓ', 'ਅ', 'ੱ', 'ਂ', 'ਃ', '੍', 'ਁ', 'ਓ', 'ਅ',
    ],
    v2_char: &[
        'ਆ', 'ਈ', 'ਊ', NONE, 'ਐ', NONE, 'ਔ', NONE, 'ੰ', NONE, '਼', 'ੑ', 'ੴ', '☬',
    ],
    v3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, 'ੑ', NONE, 'ੴ', '☬',
    ],
    vs1_char: &[
        '\u{0008}', 'ਿ', 'ੁ', 'ੇ', '\u{0008}', 'ੋ', '\u{0008}', 'ੱ', 'ਂ', 'ਃ', '੍', 'ਁ', 'ੋ',
        '\u{0008}',
    ],
    vs2_char: &[
        'ਾ', 'ੀ', 'ੂ', NONE, 'ੈ', NONE, 'ੌ', NONE, 'ੰ', NONE, '਼', 'ੑ', 'ੴ', '☬',
    ],
    vs3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, 'ੑ', NONE, 'ੴ', '☬',
    ],
    c1_keys: &[
        'k', 'g', 'n', 'c', 'j', 'T', 'D', 'n', 'N', 't', 'd', 'n', 'p', 'b', 'm', 'y', 'r',
        'l', 'L', 'v', 's', 'h', 'K', 'G', 'z', 'R', 'f', 'Y',
    ],
    c2_keys: &[
        'h', 'h', 'g', 'h', 'h', 'h', 'h', 'y', '*', 'h', 'h', '*', 'h', 'h', '*', '*', '*',
        '*', '*', '*', 'h', '*', '*', '*', '*', '*', '*', '*',
    ],
    c3_keys: &[
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
    ],
    c1_char: &[
        'ਕ', 'ਗ', 'ਨ', 'ਚ', 'ਜ', 'ਟ', 'ਡ', 'ਨ', 'ਣ', 'ਤ', 'ਦ', 'ਨ', 'ਪ', 'ਬ', 'ਮ', 'ਯ', 'ਰ',
        'ਲ', '\u{0A33}', 'ਵ', 'ਸ', 'ਹ', '\u{0A59}', '\u{0A5A}', '\u{0A5B}', 'ੜ', '\u{0A5E}', 'ੵ',
    ],
    c2_char: &[
        'ਖ', 'ਘ', 'ਙ', 'ਛ', 'ਝ', 'ਠ', 'ਢ', 'ਞ', NONE, 'ਥ', 'ਧ', NONE, 'ਫ', 'ਭ', NONE, NONE,
        NONE, NONE, NONE, NONE, '\u{0A36}', NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    ],
    c3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    ],
    digits: Some(&['੦', '੧', '੨', '੩', '੪', '੫', '੬', '੭', '੮', '੯']),
    nukta: &[
        ('ਖ', '\u{0A59}'),
        ('ਗ', '\u{0A5A}'),
        ('ਜ', '\u{0A5B}'),
        ('ਫ', '\u{0A5E}'),
        ('ਲ', '\u{0A33}'),
        ('ਸ', '\u{0A36}'),
    ],
};
