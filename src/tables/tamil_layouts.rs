//! Key tables for the non-phonetic Tamil layouts.
//!
//! Positional layouts (Tamil99, TamilNet97, Murasu6) map keys straight to
//! canonical row/column letters of the compound matrix. WYTIWYG layouts
//! additionally carry tables for the precomposed u/uu consonant keys, the
//! left-half ("WYTIWYG") modifiers, the ordinary modifiers, and the
//! out-of-matrix keys.

use crate::script::TamilLayout;

/// Tables for a positional layout: one key, one letter.
pub(crate) struct PositionalTables {
    pub conso_keys: &'static [char],
    pub conso_char: &'static [char],
    pub vowel_keys: &'static [char],
    pub vowel_char: &'static [char],
    pub om_keys: &'static [char],
    pub om_char: &'static [char],
}

/// Tables for a WYTIWYG layout.
pub(crate) struct WytiwygTables {
    /// Base consonant keys and their row letters.
    pub conso_keys: &'static [char],
    pub conso_char: &'static [char],
    /// Independent vowel keys and their column letters.
    pub uyir_keys: &'static [char],
    pub uyir_char: &'static [char],
    /// Precomposed u/uu (and i/ii) consonant keys: row and column letters.
    pub ukara_keys: &'static [char],
    pub ukara_cons: &'static [char],
    pub ukara_vowel: &'static [char],
    /// WYTIWYG modifiers; the first three are the left-half vowel signs.
    pub wmodi_keys: &'static [char],
    pub wmodi_char: &'static [char],
    /// Ordinary modifier keys (dead keys on the old typewriters).
    pub mmodi_keys: &'static [char],
    pub mmodi_char: &'static [char],
    /// Out-of-matrix keys; index 0 is the au-length-mark key.
    pub om_keys: &'static [char],
    pub om_char: &'static [char],
}

pub(crate) static TAMIL99: PositionalTables = PositionalTables {
    conso_keys: &[
        'Q', 'W', 'E', 'R', 'T', 'Y', 'y', 'u', 'i', 'o', 'p', '[', ']', 'h', 'j', 'k', 'l',
        ';', '\'', 'v', 'b', 'n', 'm', '/', '^',
    ],
    conso_char: &[
        'S', 's', 'j', 'h', 'x', 'W', 'L', 'R', 'n', 'd', 'N', 'c', 'G', 'k', 'p', 'm', 't',
        'w', 'y', 'v', 'g', 'l', 'r', 'z', '^',
    ],
    vowel_keys: &[
        'q', 'w', 'e', 'r', 't', 'a', 's', 'd', 'f', 'F', 'g', 'z', 'x', 'c',
    ],
    vowel_char: &[
        'A', 'I', 'U', 'X', 'E', 'a', 'i', 'u', 'q', 'q', 'e', 'Q', 'O', 'o',
    ],
    om_keys: &['O', 'P', 'K', 'L', ':', '"', 'M'],
    om_char: &['[', ']', '"', ':', ';', '\'', '/'],
};

pub(crate) static TAMILNET97: PositionalTables = PositionalTables {
    conso_keys: &[
        't', 'u', 'n', 'o', 'p', '[', 'b', 'i', 'j', 'k', 'h', 'l', ';', 'm', '\'', 'y', '/',
        ']', 'I', 'O', 'U', 'P', 'Y', '{',
    ],
    conso_char: &[
        'R', 'v', 'l', 'n', 'y', 'N', 'z', 't', 'k', 'm', 'p', 'd', 'w', 'r', 'L', 'c', 'g',
        'G', 'S', 's', 'j', 'h', 'W', 'x',
    ],
    vowel_keys: &[
        'c', 's', 'd', 'x', 'e', 'q', 'g', 'r', 'a', 'v', 'w', 'z', 'f', 'F',
    ],
    vowel_char: &[
        'a', 'A', 'i', 'I', 'u', 'U', 'e', 'E', 'X', 'o', 'O', 'Q', 'q', 'q',
    ],
    om_keys: &['Q', 'W', 'E', 'R', 'K', 'L', 'Z', 'X', '<', '>'],
    om_char: &['(', ')', '(', ')', '"', '\'', '<', '>', ';', '/'],
};

pub(crate) static MURASU6: PositionalTables = PositionalTables {
    conso_keys: &[
        'Y', 'I', 'O', 'P', 'L', 'U', 'm', 'y', 'o', ';', '[', '/', 'K', 'j', 'l', 'k', 'h',
        '\'', 'p', 'u', 'J', 'i', 'n', ']',
    ],
    conso_char: &[
        'S', 's', 'j', 'h', 'x', 'W', 'L', 'R', 'n', 'd', 'N', 'c', 'G', 'k', 'p', 'm', 't',
        'w', 'y', 'v', 'g', 'l', 'r', 'z',
    ],
    vowel_keys: &[
        's', 'e', 'w', 'a', 't', 'v', 'd', 'f', 'g', 'z', 'r', 'x', 'c', 'b',
    ],
    vowel_char: &[
        'A', 'I', 'U', 'X', 'E', 'o', 'i', 'u', 'q', 'q', 'e', 'Q', 'O', 'a',
    ],
    om_keys: &['`', '~'],
    om_char: &[';', '\''],
};

pub(crate) static MYLAI: WytiwygTables = WytiwygTables {
    conso_keys: &[
        '!', 'q', 'w', 'r', 't', 'y', 'p', '[', ']', 's', 'd', 'g', 'h', 'j', 'k', 'l', 'z',
        'x', 'X', 'c', 'v', 'b', 'n', 'm',
    ],
    conso_char: &[
        'W', 'L', 'G', 'r', 't', 'y', 'p', 'h', 'j', 'S', 'd', 'g', 'N', 'n', 'k', 'l', 'z',
        's', 'x', 'c', 'v', 'R', 'w', 'm',
    ],
    uyir_keys: &[
        '`', '~', ';', ':', 'u', 'U', '\'', '"', '_', 'o', 'O', '$', '#',
    ],
    uyir_char: &[
        'a', 'A', 'i', 'I', 'u', 'U', 'e', 'E', 'X', 'o', 'O', 'Q', 'q',
    ],
    ukara_keys: &[
        'Q', 'W', 'R', 'T', 'P', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'Z', 'C', 'V', 'B', 'N',
        'M',
    ],
    ukara_cons: &[
        'L', 'G', 'r', 't', 'k', 'd', 'd', 'd', 'N', 'n', 'k', 'l', 'z', 'c', 'c', 'R', 'w',
        'm',
    ],
    ukara_vowel: &[
        'u', 'u', 'u', 'u', 'U', 'u', 'i', 'I', 'u', 'u', 'u', 'u', 'u', 'u', 'U', 'u', 'u',
        'u',
    ],
    wmodi_keys: &['A', 'e', 'E', 'a', '{', '}'],
    wmodi_char: &['X', 'e', 'E', 'A', 'u', 'U'],
    mmodi_keys: &['i', 'I', '<', '>', 'f', 'Y', '\\'],
    mmodi_char: &['i', 'I', 'u', 'U', 'q', 'U', 'U'],
    om_keys: &['S', '|', '@', '^'],
    om_char: &['S', '!', '\'', '"'],
};

pub(crate) static TYPEWRITER: WytiwygTables = WytiwygTables {
    conso_keys: &[
        '|', '$', '&', '_', '+', 'w', 'e', 'r', 't', 'y', 'u', 'a', 's', 'd', 'f', 'g', 'j',
        'k', 'l', '\'', 'H', '"', 'z', '#',
    ],
    conso_char: &[
        'S', 'j', 's', 'W', 'h', 'R', 'w', 'c', 'v', 'l', 'r', 'y', 'L', 'n', 'k', 'p', 't',
        'm', 'd', 'g', 'z', 'G', 'N', 'x',
    ],
    uyir_keys: &[
        'm', 'M', '/', '<', 'c', 'C', 'v', 'V', 'I', 'x', 'X', '~',
    ],
    uyir_char: &[
        'a', 'A', 'i', 'I', 'u', 'U', 'e', 'E', 'X', 'o', 'O', 'q',
    ],
    ukara_keys: &[
        'q', 'o', 'W', 'E', 'R', 'T', 'Y', 'U', 'O', 'S', 'D', 'F', 'G', 'J', 'K', 'L', 'N',
    ],
    ukara_cons: &[
        'N', 'd', 'R', 'w', 'c', 'k', 'l', 'r', 'd', 'L', 'n', 'k', 'z', 't', 'm', 'd', 'c',
    ],
    ukara_vowel: &[
        'u', 'i', 'u', 'u', 'u', 'U', 'u', 'u', 'I', 'u', 'u', 'u', 'u', 'u', 'u', 'u', 'U',
    ],
    wmodi_keys: &['i', 'b', 'n', 'h'],
    wmodi_char: &['X', 'e', 'E', 'A'],
    mmodi_keys: &['%', '^', 'p', '[', ']', 'P', '{', '}', ';', ':'],
    mmodi_char: &['u', 'U', 'i', 'u', 'X', 'I', 'U', 'U', 'q', 'U'],
    om_keys: &['`', '>', '-', '#', '*', ':'],
    om_char: &['`', '-', '/', '%', '\'', '"'],
};

pub(crate) static BAMINI: WytiwygTables = WytiwygTables {
    conso_keys: &[
        ']', '[', '\\', '=', '`', 'w', 'e', 'r', 't', 'y', 'u', 'a', 's', 'd', 'f', 'g', 'j',
        'k', 'l', 'q', 'o', 'Q', 'z', '~',
    ],
    conso_char: &[
        'S', 'j', 's', 'W', 'h', 'R', 'w', 'c', 'v', 'l', 'r', 'y', 'L', 'n', 'k', 'p', 't',
        'm', 'd', 'g', 'z', 'G', 'N', 'x',
    ],
    uyir_keys: &[
        'm', 'M', ',', '<', 'c', 'C', 'v', 'V', 'I', 'x', 'X', '/',
    ],
    uyir_char: &[
        'a', 'A', 'i', 'I', 'u', 'U', 'e', 'E', 'X', 'o', 'O', 'q',
    ],
    ukara_keys: &[
        'b', 'B', '#', '$', '%', '^', '&', 'W', 'E', 'R', 'T', 'Y', 'U', 'O', 'A', 'S', 'D',
        'F', 'G', 'J', 'K', 'L', 'Z',
    ],
    ukara_cons: &[
        'd', 'd', 'c', 'k', 'm', 'd', 'r', 'R', 'w', 'c', 'v', 'l', 'r', 'z', 'y', 'L', 'n',
        'k', 'p', 't', 'm', 'd', 'N',
    ],
    ukara_vowel: &[
        'i', 'I', 'U', 'U', 'U', 'U', 'U', 'u', 'u', 'u', 'u', 'u', 'u', 'u', 'u', 'u', 'u',
        'u', 'u', 'u', 'u', 'u', 'u',
    ],
    wmodi_keys: &['i', 'n', 'N', 'h', 'p', 'P', ';', '_', '+'],
    wmodi_char: &['X', 'e', 'E', 'A', 'i', 'I', 'q', 'U', 'U'],
    mmodi_keys: &['%', '^', 'p', '[', ']', 'P', '{', '}', ';', ':'],
    mmodi_char: &['u', 'U', 'i', 'u', 'X', 'I', 'u', 'U', 'q', 'U'],
    om_keys: &['|', '>', '@', '#', '$', '%', '^', '&', 'H'],
    om_char: &['|', ',', ';', 'U', 'V', 'W', 'X', 'Y', 'Z'],
};

pub(crate) static TN_TYPEWRITER: WytiwygTables = WytiwygTables {
    conso_keys: &[
        '!', '$', 'Z', '_', ']', 'w', 'e', 'r', 't', 'y', 'u', 'a', 's', 'd', 'f', 'g', 'j',
        'k', 'l', '\'', 'H', '"', 'z', 'B',
    ],
    conso_char: &[
        'S', 'j', 's', 'W', 'h', 'R', 'w', 'c', 'v', 'l', 'r', 'y', 'L', 'n', 'k', 'p', 't',
        'm', 'd', 'g', 'z', 'G', 'N', 'x',
    ],
    uyir_keys: &[
        'm', 'M', ',', '<', 'c', 'C', 'v', 'V', 'I', 'x', 'X', '`',
    ],
    uyir_char: &[
        'a', 'A', 'i', 'I', 'u', 'U', 'e', 'E', 'X', 'o', 'O', 'q',
    ],
    ukara_keys: &[
        'q', 'o', 'W', 'E', 'R', 'T', 'Y', 'U', 'O', 'S', 'D', 'F', 'G', 'J', 'K', 'L', 'N',
    ],
    ukara_cons: &[
        'N', 'd', 'R', 'w', 'c', 'k', 'l', 'r', 'd', 'L', 'n', 'k', 'z', 't', 'm', 'd', 'c',
    ],
    ukara_vowel: &[
        'u', 'i', 'u', 'u', 'u', 'U', 'u', 'u', 'I', 'u', 'u', 'u', 'u', 'u', 'u', 'u', 'U',
    ],
    wmodi_keys: &['i', 'b', 'n', 'h'],
    wmodi_char: &['X', 'e', 'E', 'A'],
    mmodi_keys: &['%', '^', 'p', '[', ']', 'P', '{', '}', ';', ':'],
    mmodi_char: &['u', 'U', 'i', 'u', 'X', 'I', 'U', 'U', 'q', 'U'],
    om_keys: &['`', '~', '*', '-', '@', '#', '>', '.', '/', '?'],
    om_char: &['`', '*', '\'', '/', '"', '%', '?', ',', '.', '-'],
};

/// Escape table for the Tamil99 `^` prefix: Tamil numerals and the archaic
/// symbol row.
pub(crate) static ESCAPE_KEYS: &[char] = &[
    '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', 'd', 'm', 'y', 'D', 'C', 'a', 'r', 'n',
];
pub(crate) static ESCAPE_CHARS: &[char] = &[
    '௧', '௨', '௩', '௪', '௫', '௬', '௭', '௮', '௯', '௦', '௳', '௴', '௵', '௶', '௷', '௸', '௹', '௺',
];

pub(crate) fn positional(layout: TamilLayout) -> Option<&'static PositionalTables> {
    match layout {
        TamilLayout::Tamil99 => Some(&TAMIL99),
        TamilLayout::TamilNet97 => Some(&TAMILNET97),
        TamilLayout::Murasu6 => Some(&MURASU6),
        _ => None,
    }
}

pub(crate) fn wytiwyg(layout: TamilLayout) -> Option<&'static WytiwygTables> {
    match layout {
        TamilLayout::Mylai => Some(&MYLAI),
        TamilLayout::TypewriterNew | TamilLayout::TypewriterOld => Some(&TYPEWRITER),
        TamilLayout::Bamini => Some(&BAMINI),
        TamilLayout::TnTypewriter => Some(&TN_TYPEWRITER),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_tables_are_parallel() {
        for layout in TamilLayout::iter() {
            if let Some(t) = positional(*layout) {
                assert_eq!(t.conso_keys.len(), t.conso_char.len(), "{layout:?}");
                assert_eq!(t.vowel_keys.len(), t.vowel_char.len(), "{layout:?}");
                assert_eq!(t.om_keys.len(), t.om_char.len(), "{layout:?}");
            }
        }
    }

    #[test]
    fn wytiwyg_tables_are_parallel() {
        for layout in TamilLayout::iter() {
            if let Some(t) = wytiwyg(*layout) {
                assert_eq!(t.conso_keys.len(), t.conso_char.len(), "{layout:?}");
                assert_eq!(t.uyir_keys.len(), t.uyir_char.len(), "{layout:?}");
                assert_eq!(t.ukara_keys.len(), t.ukara_cons.len(), "{layout:?}");
                assert_eq!(t.ukara_keys.len(), t.ukara_vowel.len(), "{layout:?}");
                assert_eq!(t.wmodi_keys.len(), t.wmodi_char.len(), "{layout:?}");
                assert_eq!(t.mmodi_keys.len(), t.mmodi_char.len(), "{layout:?}");
                assert_eq!(t.om_keys.len(), t.om_char.len(), "{layout:?}");
            }
        }
    }

    #[test]
    fn escape_table_is_parallel() {
        assert_eq!(ESCAPE_KEYS.len(), ESCAPE_CHARS.len());
    }

    /// Every letter a layout emits must resolve in the compound matrix.
    #[test]
    fn layout_letters_resolve_in_the_matrix() {
        use crate::tables::matrix;

        for layout in TamilLayout::iter() {
            if let Some(t) = positional(*layout) {
                for &c in t.conso_char {
                    assert!(matrix::ROW_SEQUENCE.contains(&c), "{layout:?}: {c}");
                }
                for &v in t.vowel_char {
                    assert!(matrix::COLUMN_SEQUENCE.contains(&v), "{layout:?}: {v}");
                }
            }
            if let Some(t) = wytiwyg(*layout) {
                for &c in t.conso_char.iter().chain(t.ukara_cons) {
                    assert!(matrix::ROW_SEQUENCE.contains(&c), "{layout:?}: {c}");
                }
                for &v in t
                    .uyir_char
                    .iter()
                    .chain(t.ukara_vowel)
                    .chain(t.wmodi_char)
                    .chain(t.mmodi_char)
                {
                    assert!(matrix::COLUMN_SEQUENCE.contains(&v), "{layout:?}: {v}");
                }
            }
        }
    }
}
