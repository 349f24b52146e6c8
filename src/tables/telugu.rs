//! Telugu tables. The keystroke conventions mirror Malayalam; `Q` adds the
//! candrabindu.

use super::ScriptTables;

const NONE: char = '\u{0C00}';

pub(crate) static TABLES: ScriptTables = ScriptTables {
    v1_keys: &[
        'a', 'i', 'u', 'H', 'H', 'H', 'H', 'e', 'a', 'o', 'a', 'q', 'M', 'H', 'Q',
    ],
    v2_keys: &[
        'a', 'i', 'u', 'r', 'R', 'l', 'L', 'e', 'i', 'o', 'u', 'q', 'M', 'H', '*',
    ],
    v3_keys: &[
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', 'M', 'H', '*',
    ],
    v1_char: &[
        'అ', 'ఇ', 'ఉ', 'ః', 'ః', 'ః', 'ః', 'ఎ', 'ఐ', 'ఒ', 'ఔ', '్', 'ం', 'ః', 'ఁ',
    ],
    v2_char: &[
        'ఆ', 'ఈ', 'ఊ', 'ఋ', 'ౠ', 'ఌ', 'ౡ', 'ఏ', 'ఐ', 'ఓ', 'ఔ', NONE, NONE, 'ః', NONE,
    ],
    v3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, 'ః',
        NONE,
    ],
    vs1_char: &[
        '\u{0008}', 'ి', 'ు', 'ః', 'ః', 'ః', 'ః', 'ె', 'ై', 'ొ', 'ౌ', '్', 'ం', 'ః', 'ఁ',
    ],
    vs2_char: &[
        'ా', 'ీ', 'ూ', 'ృ', 'ౄ', 'ౢ', 'ౣ', 'ే', 'ై', 'ో', 'ౌ', NONE, NONE, 'ః', NONE,
    ],
    vs3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, 'ః',
        NONE,
    ],
    c1_keys: &[
        'k', 'g', 'n', 'c', 'j', 'n', 'T', 'D', 'N', 't', 'd', 'n', 'p', 'b', 'm', 'y', 'r',
        'R', 'l', 'L', 'z', 'v', 'S', 's', 'h',
    ],
    c2_keys: &[
        'h', 'h', 'g', 'h', 'h', 'j', 'h', 'h', '*', 'h', 'h', '*', 'h', 'h', '*', '*', '*',
        '*', '*', '*', '*', '*', '*', 'h', '*',
    ],
    c3_keys: &[
        '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*', '*',
        '*', '*', '*', '*', '*', '*', '*', '*',
    ],
    c1_char: &[
        'క', 'గ', 'న', 'చ', 'జ', 'ఞ', 'ట', 'డ', 'ణ', 'త', 'ద', 'న', 'ప', 'బ', 'మ', 'య', 'ర',
        'ఱ', 'ల', 'ళ', 'ఴ', 'వ', 'శ', 'స', 'హ',
    ],
    c2_char: &[
        'ఖ', 'ఘ', 'ఙ', 'ఛ', 'ఝ', 'ఞ', 'ఠ', 'ఢ', NONE, 'థ', 'ధ', NONE, 'ఫ', 'భ', NONE, NONE,
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, 'ష', NONE,
    ],
    c3_char: &[
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
        NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    ],
    digits: Some(&['౦', '౧', '౨', '౩', '౪', '౫', '౬', '౭', '౮', '౯']),
    nukta: &[],
};

/// Avagraha, emitted for `W` outside a composition.
pub(crate) const AVAGRAHA: char = '\u{0C3D}';
