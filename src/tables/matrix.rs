//! The Tamil compound matrix.
//!
//! Every uyirmey is addressed as (row letter, column letter): the row is a
//! canonical consonant identifier, the column a canonical vowel identifier.
//! Row `a` holds the independent vowels and row `^` the bare vowel signs,
//! so the same lookup covers uyir, mey and uyirmey emission for all of the
//! positional and typewriter layouts.

/// Canonical consonant row letters, in matrix row order.
pub(crate) const ROW_SEQUENCE: &[char] = &[
    'a', 'k', 'c', 'd', 't', 'p', 'R', 'y', 'r', 'l', 'v', 'z', 'L', 'g', 'G', 'N', 'w', 'm',
    'n', 'j', 's', 'S', 'h', 'x', 'W', 'H', '^',
];

/// Canonical vowel column letters, in matrix column order.
pub(crate) const COLUMN_SEQUENCE: &[char] = &[
    'a', 'A', 'i', 'I', 'u', 'U', 'e', 'E', 'X', 'o', 'O', 'Q', 'q',
];

#[rustfmt::skip]
static ENC: [[&str; 13]; 27] = [
    // Independent vowels
    ["அ", "ஆ", "இ", "ஈ", "உ", "ஊ", "எ", "ஏ", "ஐ", "ஒ", "ஓ", "ஔ", "ஃ"],
    // Mey rows
    ["க", "கா", "கி", "கீ", "கு", "கூ", "கெ", "கே", "கை", "கொ", "கோ", "கௌ", "க்"],
    ["ச", "சா", "சி", "சீ", "சு", "சூ", "செ", "சே", "சை", "சொ", "சோ", "சௌ", "ச்"],
    ["ட", "டா", "டி", "டீ", "டு", "டூ", "டெ", "டே", "டை", "டொ", "டோ", "டௌ", "ட்"],
    ["த", "தா", "தி", "தீ", "து", "தூ", "தெ", "தே", "தை", "தொ", "தோ", "தௌ", "த்"],
    ["ப", "பா", "பி", "பீ", "பு", "பூ", "பெ", "பே", "பை", "பொ", "போ", "பௌ", "ப்"],
    ["ற", "றா", "றி", "றீ", "று", "றூ", "றெ", "றே", "றை", "றொ", "றோ", "றௌ", "ற்"],
    ["ய", "யா", "யி", "யீ", "யு", "யூ", "யெ", "யே", "யை", "யொ", "யோ", "யௌ", "ய்"],
    ["ர", "ரா", "ரி", "ரீ", "ரு", "ரூ", "ரெ", "ரே", "ரை", "ரொ", "ரோ", "ரௌ", "ர்"],
    ["ல", "லா", "லி", "லீ", "லு", "லூ", "லெ", "லே", "லை", "லொ", "லோ", "லௌ", "ல்"],
    ["வ", "வா", "வி", "வீ", "வு", "வூ", "வெ", "வே", "வை", "வொ", "வோ", "வௌ", "வ்"],
    ["ழ", "ழா", "ழி", "ழீ", "ழு", "ழூ", "ழெ", "ழே", "ழை", "ழொ", "ழோ", "ழௌ", "ழ்"],
    ["ள", "ளா", "ளி", "ளீ", "ளு", "ளூ", "ளெ", "ளே", "ளை", "ளொ", "ளோ", "ளௌ", "ள்"],
    ["ங", "ஙா", "ஙி", "ஙீ", "ஙு", "ஙூ", "ஙெ", "ஙே", "ஙை", "ஙொ", "ஙோ", "ஙௌ", "ங்"],
    ["ஞ", "ஞா", "ஞி", "ஞீ", "ஞு", "ஞூ", "ஞெ", "ஞே", "ஞை", "ஞொ", "ஞோ", "ஞௌ", "ஞ்"],
    ["ண", "ணா", "ணி", "ணீ", "ணு", "ணூ", "ணெ", "ணே", "ணை", "ணொ", "ணோ", "ணௌ", "ண்"],
    ["ந", "நா", "நி", "நீ", "நு", "நூ", "நெ", "நே", "நை", "நொ", "நோ", "நௌ", "ந்"],
    ["ம", "மா", "மி", "மீ", "மு", "மூ", "மெ", "மே", "மை", "மொ", "மோ", "மௌ", "ம்"],
    ["ன", "னா", "னி", "னீ", "னு", "னூ", "னெ", "னே", "னை", "னொ", "னோ", "னௌ", "ன்"],
    // Grantha rows
    ["ஜ", "ஜா", "ஜி", "ஜீ", "ஜு", "ஜூ", "ஜெ", "ஜே", "ஜை", "ஜொ", "ஜோ", "ஜௌ", "ஜ்"],
    ["ஷ", "ஷா", "ஷி", "ஷீ", "ஷு", "ஷூ", "ஷெ", "ஷே", "ஷை", "ஷொ", "ஷோ", "ஷௌ", "ஷ்"],
    ["ஸ", "ஸா", "ஸி", "ஸீ", "ஸு", "ஸூ", "ஸெ", "ஸே", "ஸை", "ஸொ", "ஸோ", "ஸௌ", "ஸ்"],
    ["ஹ", "ஹா", "ஹி", "ஹீ", "ஹு", "ஹூ", "ஹெ", "ஹே", "ஹை", "ஹொ", "ஹோ", "ஹௌ", "ஹ்"],
    ["க்ஷ", "க்ஷா", "க்ஷி", "க்ஷீ", "க்ஷு", "க்ஷூ", "க்ஷெ", "க்ஷே", "க்ஷை", "க்ஷொ", "க்ஷோ", "க்ஷௌ", "க்ஷ்"],
    ["ஸ்ரீ", "", "", "", "", "", "", "", "", "", "", "", "ஸ்ரீ"],
    ["ஶ", "ஶா", "ஶி", "ஶீ", "ஶு", "ஶூ", "ஶெ", "ஶே", "ஶை", "ஶொ", "ஶோ", "ஶௌ", "ஶ்"],
    // Bare vowel signs
    ["", "ா", "ி", "ீ", "ு", "ூ", "ெ", "ே", "ை", "ொ", "ோ", "ௌ", "்"],
];

fn index_of(c: char, table: &[char]) -> Option<usize> {
    table.iter().position(|&t| t == c)
}

/// The code-point string for a consonant-row and vowel-column pair.
///
/// A zero consonant selects the independent-vowel row. Unknown letters and
/// empty matrix cells yield the empty string.
pub(crate) fn compound(conso: char, vowel: char) -> &'static str {
    let row = if conso == '\0' {
        Some(0)
    } else {
        index_of(conso, ROW_SEQUENCE)
    };
    match (row, index_of(vowel, COLUMN_SEQUENCE)) {
        (Some(r), Some(c)) => ENC[r][c],
        _ => "",
    }
}

/// The bare vowel sign for a column letter, from the modifier row.
pub(crate) fn modifier(vowel: char) -> &'static str {
    compound('^', vowel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_is_parallel_to_its_sequences() {
        assert_eq!(ENC.len(), ROW_SEQUENCE.len());
        for row in ENC.iter() {
            assert_eq!(row.len(), COLUMN_SEQUENCE.len());
        }
    }

    #[test]
    fn uyirmey_composition() {
        assert_eq!(compound('k', 'a'), "க");
        assert_eq!(compound('k', 'q'), "க்");
        assert_eq!(compound('k', 'X'), "கை");
        assert_eq!(compound('\0', 'A'), "ஆ");
        assert_eq!(compound('x', 'u'), "க்ஷு");
        assert_eq!(compound('W', 'a'), "ஸ்ரீ");
    }

    #[test]
    fn modifier_row_yields_bare_signs() {
        assert_eq!(modifier('a'), "");
        assert_eq!(modifier('A'), "ா");
        assert_eq!(modifier('q'), "்");
        assert_eq!(modifier('E'), "ே");
    }

    #[test]
    fn unknown_letters_yield_nothing() {
        assert_eq!(compound('Q', 'a'), "");
        assert_eq!(compound('k', '#'), "");
    }

    /// Checks that all cells are encoded in NFC.
    ///
    /// This is just a sanity check to ensure the matrix is well-formed for
    /// hosts that compare composed text.
    #[test]
    fn cells_are_all_nfc() {
        use unicode_normalization::UnicodeNormalization;

        for &row in ROW_SEQUENCE {
            for &col in COLUMN_SEQUENCE {
                let cell = compound(row, col);
                let nfc: String = cell.nfc().collect();
                assert_eq!(&nfc, cell, "({row}, {col})");
            }
        }
    }

    /// Every mey row is its base consonant followed by the bare sign of the
    /// column, except for the ligature rows.
    #[test]
    fn mey_rows_agree_with_the_modifier_row() {
        for (r, &row_letter) in ROW_SEQUENCE.iter().enumerate() {
            if matches!(row_letter, 'a' | 'x' | 'W' | '^') {
                continue;
            }
            let base = ENC[r][0];
            for (c, cell) in ENC[r].iter().enumerate() {
                let expected = format!("{base}{}", ENC[26][c]);
                assert_eq!(*cell, expected, "row {row_letter}");
            }
        }
    }
}
