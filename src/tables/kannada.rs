//! Kannada tables. The keystroke conventions mirror Malayalam; `f` reaches
//! the archaic ೞ.

use super::ScriptTables;

const NONE: char = '\u{0C80}';

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
        'ಅ', 'ಇ', 'ಉ', 'ಃ', 'ಃ', 'ಃ', 'ಃ', 'ಎ', 'ಐ', 'ಒ', 'ಔ', '್', 'ಂ', 'ಃ',
    ],
    v2_char: &[
        'ಆ', 'ಈ', 'ಊ', 'ಋ', 'ೠ', 'ಌ', 'ೡ', 'ಏ', 'ಐ', 'ಓ', 'ಔ', NONE, NONE, 'ಃ',
    ],
    v3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, 'ಃ',
    ],
    vs1_char: &[
        '\u{0008}', 'ಿ', 'ು', 'ಃ', 'ಃ', 'ಃ', 'ಃ', 'ೆ', 'ೈ', 'ೊ', 'ೌ', '್', 'ಂ', 'ಃ',
    ],
    vs2_char: &[
        'ಾ', 'ೀ', 'ೂ', 'ೃ', 'ೄ', 'ೢ', 'ೣ', 'ೇ', 'ೈ', 'ೋ', 'ೌ', NONE, NONE, 'ಃ',
    ],
    vs3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, 'ಃ',
    ],
    c1_keys: &[
        'k', 'g', 'n', 'c', 'j', 'n', 'T', 'D', 'N', 't', 'd', 'n', 'p', 'b', 'm', 'y', 'r',
        'R', 'l', 'L', 'v', 'S', 's', 'h', 'f',
    ],
    c2_keys: &[
        'h', 'h', 'g', 'h', 'h', 'j', 'h', 'h', '*', 'h', 'h', '*', 'h', 'h', '*', '*', '*',
        '*', '*', '*', '*', '*', 'h', '*', '*',
    ],
    c3_keys: &[
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
        '*', '*', '*', '*', '*', '*', '*', '*',
    ],
    c1_char: &[
        'ಕ', 'ಗ', 'ನ', 'ಚ', 'ಜ', 'ಞ', 'ಟ', 'ಡ', 'ಣ', 'ತ', 'ದ', 'ನ', 'ಪ', 'ಬ', 'ಮ', 'ಯ', 'ರ',
        'ಱ', 'ಲ', 'ಳ', 'ವ', 'ಶ', 'ಸ', 'ಹ', 'ೞ',
    ],
    c2_char: &[
        'ಖ', 'ಘ', 'ಙ', 'ಛ', 'ಝ', 'ಞ', 'ಠ', 'ಢ', NONE, 'ಥ', 'ಧ', NONE, 'ಫ', 'ಭ', NONE, NONE,
        NONE, NONE, NONE, NONE, NONE, NONE, 'ಷ', NONE, NONE,
    ],
    c3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    ],
    digits: Some(&['೦', '೧', '೨', '೩', '೪', '೫', '೬', '೭', '೮', '೯']),
    nukta: &[],
};

/// Avagraha, emitted for `V` outside a composition.
pub(crate) const AVAGRAHA: char = '\u{0CBD}';
