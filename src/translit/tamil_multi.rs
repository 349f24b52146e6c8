//! The compound-matrix machine for the non-phonetic Tamil layouts.
//!
//! Keys map to canonical row/column letters and emission goes through the
//! compound matrix, so the default edit *replaces* the previous emission
//! (the `PrevEmission` delete) with the regenerated uyirmey. The WYTIWYG
//! layouts bypass the phonetic dispatch entirely: their keys arrive in
//! visual order and carry their own table roles.

use log::trace;

use crate::edit::{Delete, Emit};
use crate::lookup::position;
use crate::script::TamilLayout;
use crate::session::{KeyClass, Session};
use crate::tables::matrix::{compound, modifier};
use crate::tables::tamil_layouts::{self, PositionalTables, WytiwygTables};

const ZWSP: char = '\u{200B}';
const KOMBU: char = '\u{0BC6}';
const KOMBU_2: char = '\u{0BC7}';
const KAAL: char = '\u{0BBE}';
const AU_MARK: char = '\u{0BD7}';
const O_VOWEL: char = '\u{0B92}';

/// The inherent-vowel column letter; a bare consonant key lands here.
const BASE_VOWEL: char = 'a';

/// Translates one key for a non-phonetic Tamil layout.
pub(crate) fn translate(key: char, session: &mut Session) -> Emit {
    let layout = session.layout;
    let mut emit = Emit::new();
    emit.delete = Delete::PrevEmission;
    emit.push(key);

    trace!(
        "tamil {layout:?}: key={key:?} prev={:?} class={:?}",
        session.prev_key,
        session.prev_key_class
    );

    if let Some(tables) = tamil_layouts::wytiwyg(layout) {
        wytiwyg_key(tables, layout, key, session, &mut emit);
    } else if let Some(tables) = tamil_layouts::positional(layout) {
        positional_key(tables, layout, key, session, &mut emit);
    }

    session.prev_key = key;
    emit
}

fn positional_key(
    tables: &PositionalTables,
    layout: TamilLayout,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) {
    // Aytham has a key of its own on Tamil99, outside any sequence.
    if layout == TamilLayout::Tamil99 && key == 'F' {
        emit.set_insert("ஃ");
        emit.delete = Delete::Count(0);
        return;
    }

    // Doubled dollar is the rupee sign.
    if key == '$' && session.prev_key == '$' {
        emit.set_insert("₹");
        emit.delete = Delete::Count(1);
        return;
    }

    let mut fresh = false;
    match session.prev_key_class {
        KeyClass::Fresh => fresh = true,

        KeyClass::FirstConsonant
        | KeyClass::SecondConsonant
        | KeyClass::ThirdConsonant => {
            if layout == TamilLayout::Tamil99 && session.prev_key == '^' {
                if let Some(pos) =
                    position(key, tamil_layouts::ESCAPE_KEYS, None, None)
                {
                    emit.set_insert("");
                    emit.push(tamil_layouts::ESCAPE_CHARS[pos]);
                    session.prev_key_class = KeyClass::Fresh;
                    session.first_conso_key = '\0';
                    return;
                }
            }

            if let Some(pos) = position(key, tables.vowel_keys, None, None) {
                // A vowel lands on the composed consonant: regenerate the
                // whole uyirmey in place of the previous emission.
                session.vowel_char = tables.vowel_char[pos];
                session.prev_key_class = KeyClass::FirstVowel;
                if session.t99_pulli_handled {
                    // Auto-pulli already rewrote the earlier base, so only
                    // the fresh base needs replacing.
                    emit.delete = Delete::Count(1);
                    session.t99_pulli_handled = false;
                }
                emit.set_insert(compound(session.last_conso_char, session.vowel_char));
                session.first_conso_key = '\0';
                return;
            }
            fresh = true;
        }

        // The positional layouts have no second-vowel or second-consonant
        // tables; any other state starts over.
        _ => fresh = true,
    }

    debug_assert!(fresh);
    fresh_positional(tables, layout, key, session, emit);
}

fn fresh_positional(
    tables: &PositionalTables,
    layout: TamilLayout,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) {
    emit.delete = Delete::Count(0);

    if let Some(pos) = position(key, tables.conso_keys, None, None) {
        session.last_conso_char = tables.conso_char[pos];
        session.prev_key_class = KeyClass::FirstConsonant;

        let mut pulli_prefix = false;
        if layout == TamilLayout::Tamil99
            && session.auto_pulli
            && !session.t99_pulli_handled
        {
            if let Some(prev_conso) = auto_pulli_base(tables, session.prev_key, key) {
                pulli_prefix = true;
                session.t99_pulli_handled = true;
                emit.set_insert(compound(prev_conso, 'q'));
                emit.delete = Delete::PrevEmission;
            }
        } else {
            session.t99_pulli_handled = false;
        }

        session.first_conso_key = key;
        session.vowel_char = BASE_VOWEL;
        let base = compound(session.last_conso_char, session.vowel_char);
        if pulli_prefix {
            for ch in base.chars() {
                emit.push(ch);
            }
        } else {
            emit.set_insert(base);
        }
        return;
    }

    if let Some(pos) = position(key, tables.vowel_keys, None, None) {
        session.prev_key_class = KeyClass::FirstVowel;
        session.last_conso_char = '\0';
        session.first_conso_key = '\0';
        session.vowel_char = tables.vowel_char[pos];
        emit.set_insert(compound('\0', session.vowel_char));
        return;
    }

    if let Some(pos) = position(key, tables.om_keys, None, None) {
        session.prev_key_class = KeyClass::Fresh;
        emit.set_insert("");
        emit.push(tables.om_char[pos]);
        return;
    }

    // Not convertible: whitespace, numerals, punctuation. The raw key
    // stands (it is the default insert); reset the run.
    session.last_conso_char = '\0';
    session.first_conso_key = '\0';
    session.prev_key_class = KeyClass::Fresh;
}

/// The Tamil99 auto-pulli pairs: a cluster-opening pair (or a repeated
/// consonant key) retroactively closes the previous consonant with a pulli.
/// Returns the previous key's row letter when the rule applies.
fn auto_pulli_base(tables: &PositionalTables, prev_key: char, key: char) -> Option<char> {
    let pair = matches!(
        (prev_key, key),
        ('b', 'h')      // ங + க
            | (']', '[') // ஞ + ச
            | (';', 'l') // ந + த
            | ('p', 'o') // ண + ட
            | ('k', 'j') // ம + ப
            | ('i', 'u') // ன + ற
    ) || prev_key == key;

    if !pair || key == 'Y' || key == '^' {
        return None;
    }
    let pos = position(prev_key, tables.conso_keys, None, None)?;
    Some(tables.conso_char[pos])
}

fn wytiwyg_key(
    tables: &WytiwygTables,
    layout: TamilLayout,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) {
    if bamini_doubles(layout, key, session, emit) {
        return;
    }
    if tn_typewriter_ukaram(layout, key, session, emit) {
        return;
    }

    // The typewriters never had distinct quote keys.
    if matches!(
        layout,
        TamilLayout::TypewriterOld | TamilLayout::TypewriterNew
    ) && key == '`'
    {
        if session.prev_key == '`' {
            emit.set_insert("\"");
            emit.delete = Delete::Count(1);
        } else {
            emit.set_insert("'");
            emit.delete = Delete::Count(0);
        }
        return;
    }

    if let Some(pos) = position(key, tables.conso_keys, None, None) {
        base_consonant(tables, pos, session, emit);
        return;
    }
    if let Some(pos) = position(key, tables.uyir_keys, None, None) {
        independent_uyir(tables, pos, session, emit);
        return;
    }
    if let Some(pos) = position(key, tables.ukara_keys, None, None) {
        precomposed_ukaram(tables, pos, session, emit);
        return;
    }
    if let Some(pos) = position(key, tables.wmodi_keys, None, None) {
        wytiwyg_modifier(tables, layout, pos, key, session, emit);
        return;
    }
    if let Some(pos) = position(key, tables.mmodi_keys, None, None) {
        modifying_modifier(tables, layout, pos, session, emit);
        return;
    }
    if let Some(pos) = position(key, tables.om_keys, None, None) {
        out_of_matrix(tables, layout, pos, session, emit);
        return;
    }

    // Unmapped: the raw key stands; reset the run.
    emit.delete = Delete::Count(0);
    session.last_conso_char = '\0';
    session.first_conso_key = '\0';
    session.prev_key_class = KeyClass::Fresh;
}

/// Doubling a vowel key on Bamini promotes it to its long counterpart.
fn bamini_doubles(
    layout: TamilLayout,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) -> bool {
    if layout != TamilLayout::Bamini {
        return false;
    }
    let composing_vowel = session.prev_key_class == KeyClass::FirstVowel
        || (session.prev_key_class == KeyClass::LeftHalfVowel
            && session.wytiwyg_left_half != '\0');
    if !composing_vowel {
        return false;
    }

    let prev = session.prev_key;
    let (insert, vowel_char): (&str, char) = match (prev, key) {
        ('p', 'p' | 'P') => ("ீ", 'I'),
        ('{', '{' | '+') => ("ூ", 'U'),
        ('n', 'n' | 'N') => {
            // Doubling the single kombu makes the double kombu, still a
            // buffered left-half sign over its placeholder.
            emit.set_insert("");
            emit.push(ZWSP);
            emit.push(KOMBU_2);
            emit.delete = Delete::Count(1);
            session.vowel_char = 'E';
            session.wytiwyg_left_half = KOMBU_2;
            return true;
        }
        ('m', 'm') => ("ஆ", '\0'),
        (',', ',') => ("ஈ", '\0'),
        ('c', 'c') => ("ஊ", '\0'),
        ('v', 'v') => ("ஏ", '\0'),
        ('x', 'x') => ("ஓ", '\0'),
        _ => return false,
    };

    emit.set_insert(insert);
    emit.delete = Delete::Count(1);
    if vowel_char != '\0' {
        session.vowel_char = vowel_char;
    }
    true
}

/// TN Typewriter takes the uu-kaal *after* the precomposed u-consonants,
/// and the u-signs append to the Grantha bases without replacing them.
fn tn_typewriter_ukaram(
    layout: TamilLayout,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) -> bool {
    if layout != TamilLayout::TnTypewriter {
        return false;
    }
    let prev = session.prev_key;
    if (key == '}' || key == 'h')
        && matches!(prev, 'W' | 'E' | 'Y' | 'D' | 'J' | 'q')
    {
        emit.set_insert("ூ");
        emit.delete = Delete::Count(1);
        return true;
    }
    if (key == '%' || key == '^') && matches!(prev, '!' | '$' | 'Z' | 'B' | ']' | '"') {
        emit.set_insert(if key == '%' { "ு" } else { "ூ" });
        emit.delete = Delete::Count(0);
        return true;
    }
    false
}

fn base_consonant(
    tables: &WytiwygTables,
    pos: usize,
    session: &mut Session,
    emit: &mut Emit,
) {
    emit.delete = Delete::Count(0);
    session.last_conso_char = tables.conso_char[pos];
    if session.prev_key_class != KeyClass::DeadKey {
        session.vowel_char = BASE_VOWEL;
    }
    emit.set_insert(compound(session.last_conso_char, session.vowel_char));

    if session.prev_key_class == KeyClass::LeftHalfVowel && session.wytiwyg_left_half != '\0'
    {
        // The left-half sign was typed first; it follows its base in
        // logical order. The pair being replaced is placeholder + sign.
        emit.push(session.wytiwyg_left_half);
        emit.delete = Delete::Count(2);
        session.prev_key_class = KeyClass::FirstVowel;
        return;
    }

    if session.prev_key_class == KeyClass::DeadKey {
        emit.delete = Delete::Count(2);
    }
    if matches!(
        session.prev_key_class,
        KeyClass::FirstConsonant | KeyClass::FirstVowel
    ) {
        session.wytiwyg_left_half = '\0';
    }
    session.prev_key_class = KeyClass::FirstConsonant;
}

fn independent_uyir(
    tables: &WytiwygTables,
    pos: usize,
    session: &mut Session,
    emit: &mut Emit,
) {
    if session.prev_key_class == KeyClass::LeftHalfVowel {
        // A full vowel cannot land on a pending left-half sign.
        emit.set_insert("");
        emit.delete = Delete::Count(0);
        return;
    }
    session.vowel_char = tables.uyir_char[pos];
    emit.set_insert(compound('\0', session.vowel_char));
    if emit.insert.as_str() == "ஒ" {
        // Keep the O around: a following au-mark makes it ஔ.
        session.wytiwyg_left_half = O_VOWEL;
    }
    session.prev_key_class = KeyClass::FirstVowel;
    emit.delete = Delete::Count(0);
}

fn precomposed_ukaram(
    tables: &WytiwygTables,
    pos: usize,
    session: &mut Session,
    emit: &mut Emit,
) {
    session.wytiwyg_left_half = '\0';
    if session.prev_key_class == KeyClass::LeftHalfVowel {
        emit.set_insert("");
        emit.delete = Delete::Count(0);
        return;
    }
    emit.delete = if session.prev_key_class == KeyClass::DeadKey {
        Delete::Count(1)
    } else {
        Delete::Count(0)
    };
    session.last_conso_char = tables.ukara_cons[pos];
    if session.prev_key_class != KeyClass::DeadKey {
        session.vowel_char = tables.ukara_vowel[pos];
    }
    emit.set_insert(compound(session.last_conso_char, session.vowel_char));
    session.prev_key_class = KeyClass::PrecomposedConsonant;
}

fn wytiwyg_modifier(
    tables: &WytiwygTables,
    layout: TamilLayout,
    pos: usize,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) {
    emit.delete = Delete::Count(0);
    session.vowel_char = tables.wmodi_char[pos];
    let Some(sign) = modifier(session.vowel_char).chars().last() else {
        emit.set_insert("");
        return;
    };

    if pos < 3 {
        // A left-half sign: buffer it over a placeholder until its base
        // consonant arrives.
        if session.prev_key_class != KeyClass::LeftHalfVowel {
            emit.set_insert("");
            emit.push(ZWSP);
            emit.push(sign);
            session.prev_key_class = KeyClass::LeftHalfVowel;
            session.wytiwyg_left_half = sign;
        } else {
            emit.set_insert("");
        }
        return;
    }

    if session.wytiwyg_left_half != '\0' && (sign == KAAL || sign == AU_MARK) {
        if session.prev_key_class == KeyClass::LeftHalfVowel {
            emit.set_insert("");
            return;
        }
        // A kaal after a committed left-half sign fuses into the two-part
        // vowel sign.
        let fused = match (session.wytiwyg_left_half, sign) {
            (KOMBU, KAAL) => 'ொ',
            (KOMBU_2, KAAL) => 'ோ',
            _ => sign,
        };
        emit.set_insert("");
        emit.push(fused);
        session.prev_key_class = KeyClass::FirstVowel;
        emit.delete = Delete::Count(1);
    } else if layout == TamilLayout::Bamini
        && matches!(key, 'h' | '+' | '{')
        && "ZJEGKAUYTCSWD".contains(session.prev_key)
    {
        // The kaal key lengthens a preceding u-sign on Bamini.
        emit.set_insert("ூ");
        emit.delete = Delete::Count(1);
    } else if layout == TamilLayout::Bamini
        && matches!(key, 'p' | 'P')
        && session.prev_key == 'b'
    {
        emit.set_insert("ீ");
        emit.delete = Delete::Count(1);
    } else {
        if session.prev_key_class == KeyClass::FirstConsonant {
            emit.set_insert("");
            emit.push(sign);
            session.prev_key_class = KeyClass::FirstVowel;
        } else {
            // Nothing to modify; forget the key.
            emit.set_insert("");
            if session.prev_key_class != KeyClass::LeftHalfVowel {
                session.prev_key_class = KeyClass::Fresh;
            }
            return;
        }
    }
    session.wytiwyg_left_half = '\0';
}

fn modifying_modifier(
    tables: &WytiwygTables,
    layout: TamilLayout,
    pos: usize,
    session: &mut Session,
    emit: &mut Emit,
) {
    session.vowel_char = tables.mmodi_char[pos];

    if matches!(
        layout,
        TamilLayout::TypewriterOld | TamilLayout::TnTypewriter
    ) {
        // A dead key: show the sign over a placeholder and wait for the
        // base consonant.
        emit.set_insert("");
        emit.push(ZWSP);
        if let Some(sign) = modifier(session.vowel_char).chars().last() {
            emit.push(sign);
        }
        session.prev_key_class = KeyClass::DeadKey;
        emit.delete = Delete::Count(0);
        return;
    }

    if matches!(
        session.prev_key_class,
        KeyClass::FirstConsonant | KeyClass::PrecomposedConsonant
    ) {
        emit.set_insert(compound(session.last_conso_char, session.vowel_char));
        emit.delete = Delete::PrevEmission;
    } else {
        emit.set_insert("");
        emit.delete = Delete::Count(0);
    }
    session.prev_key_class = KeyClass::FirstVowel;
}

fn out_of_matrix(
    tables: &WytiwygTables,
    layout: TamilLayout,
    pos: usize,
    session: &mut Session,
    emit: &mut Emit,
) {
    emit.delete = Delete::Count(0);

    // Index 0 is the au-length-mark key: it completes a pending kombu or a
    // committed O vowel.
    if pos == 0 && session.wytiwyg_left_half == KOMBU {
        emit.set_insert("ௌ");
        session.prev_key_class = KeyClass::FirstVowel;
        emit.delete = Delete::Count(1);
    } else if pos == 0 && session.wytiwyg_left_half == O_VOWEL {
        emit.set_insert("ஔ");
        session.prev_key_class = KeyClass::FirstVowel;
        emit.delete = Delete::Count(1);
    } else {
        session.prev_key_class = KeyClass::Fresh;
        let ch = tables.om_char[pos];
        emit.set_insert("");
        if layout == TamilLayout::Bamini {
            match ch {
                'Z' => emit.set_insert("ர்"),
                'U' => emit.set_insert("சூ"),
                'V' => emit.set_insert("கூ"),
                'W' => emit.set_insert("மூ"),
                'X' => emit.set_insert("டூ"),
                'Y' => emit.set_insert("ரூ"),
                _ => emit.push(ch),
            }
        } else {
            emit.push(ch);
        }
    }
    session.wytiwyg_left_half = '\0';
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn session(layout: TamilLayout) -> Session {
        Session::new(layout)
    }

    /// Applies emissions against a document model, resolving the
    /// previous-emission sentinel the way the engine does.
    fn compose(layout: TamilLayout, keys: &str) -> String {
        let mut s = session(layout);
        let mut doc = String::new();
        let mut prev_len = 0usize;
        for key in keys.chars() {
            let emit = translate(key, &mut s);
            let delete = match emit.delete {
                Delete::Count(n) => n,
                Delete::PrevEmission => prev_len,
            };
            for _ in 0..delete {
                doc.pop();
            }
            doc.push_str(&emit.insert);
            prev_len = emit.insert.chars().count();
        }
        doc
    }

    #[test]
    fn tamil99_plain_syllables() {
        // h=க l=த; vowel keys modify in place.
        assert_eq!(compose(TamilLayout::Tamil99, "h"), "க");
        assert_eq!(compose(TamilLayout::Tamil99, "hq"), "கா");
        assert_eq!(compose(TamilLayout::Tamil99, "hf"), "க்");
        assert_eq!(compose(TamilLayout::Tamil99, "F"), "ஃ");
    }

    #[test]
    fn tamil99_auto_pulli_pairs() {
        // b=ங, h=க: the pair retroactively closes the ங.
        assert_eq!(compose(TamilLayout::Tamil99, "bh"), "ங்க");
        // Repetition: லல becomes ல்ல.
        assert_eq!(compose(TamilLayout::Tamil99, "nn"), "ல்ல");
        // Disabled auto-pulli leaves both bases open.
        let mut s = session(TamilLayout::Tamil99);
        s.auto_pulli = false;
        let mut doc = String::new();
        for key in "bh".chars() {
            let e = translate(key, &mut s);
            if let Delete::Count(n) = e.delete {
                for _ in 0..n {
                    doc.pop();
                }
            }
            doc.push_str(&e.insert);
        }
        assert_eq!(doc, "ஙக");
    }

    #[test]
    fn tamil99_escape_prefix() {
        assert_eq!(compose(TamilLayout::Tamil99, "^1"), "௧");
        assert_eq!(compose(TamilLayout::Tamil99, "^d"), "௳");
    }

    #[test]
    fn tamil99_rupee() {
        assert_eq!(compose(TamilLayout::Tamil99, "$$"), "₹");
    }

    #[test]
    fn tamilnet97_and_murasu6_substitute_tables() {
        // TamilNet97: j=க, c=a-column.
        assert_eq!(compose(TamilLayout::TamilNet97, "j"), "க");
        assert_eq!(compose(TamilLayout::TamilNet97, "js"), "கா");
        // Murasu6: j=க, s=A-column.
        assert_eq!(compose(TamilLayout::Murasu6, "j"), "க");
        assert_eq!(compose(TamilLayout::Murasu6, "js"), "கா");
    }

    #[test]
    fn mylai_left_half_reorders() {
        // 'e' is the kombu, 'k' the ka: visual ெ + க commits as க + ெ.
        let mut s = session(TamilLayout::Mylai);
        let first = translate('e', &mut s);
        assert_eq!(first.insert.chars().collect::<Vec<_>>(), [ZWSP, KOMBU]);
        assert_eq!(s.prev_key_class, KeyClass::LeftHalfVowel);
        let second = translate('k', &mut s);
        assert_eq!(second.delete, Delete::Count(2));
        assert_eq!(second.insert, "கெ");
        assert_eq!(compose(TamilLayout::Mylai, "ek"), "கெ");
    }

    #[test]
    fn mylai_two_part_vowels() {
        // kombu, base, kaal: the kaal fuses the committed kombu into ொ.
        assert_eq!(compose(TamilLayout::Mylai, "eka"), "கொ");
        // Double kombu and kaal make ோ.
        assert_eq!(compose(TamilLayout::Mylai, "Eka"), "கோ");
    }

    #[test]
    fn mylai_au_mark_completions() {
        // The au-length-mark key (om index 0) completes a kombu into ௌ
        // and a committed ஒ into ஔ.
        assert_eq!(compose(TamilLayout::Mylai, "ekS"), "கௌ");
        assert_eq!(compose(TamilLayout::Mylai, "oS"), "ஔ");
    }

    #[test]
    fn mylai_precomposed_ukaram() {
        // 'K' is கு on Mylai.
        assert_eq!(compose(TamilLayout::Mylai, "K"), "கு");
    }

    #[test]
    fn typewriter_old_dead_keys() {
        // ';' is the pulli dead key: placeholder first, then the base.
        let mut s = session(TamilLayout::TypewriterOld);
        let first = translate(';', &mut s);
        assert_eq!(s.prev_key_class, KeyClass::DeadKey);
        assert_eq!(first.insert.chars().next(), Some(ZWSP));
        let second = translate('f', &mut s); // f = க
        assert_eq!(second.delete, Delete::Count(2));
        assert_eq!(second.insert, "க்");
    }

    #[test]
    fn typewriter_new_applies_modifier_directly() {
        // New typewriter: modifier applies to the composed consonant.
        assert_eq!(compose(TamilLayout::TypewriterNew, "f;"), "க்");
    }

    #[test]
    fn typewriter_backtick_quotes() {
        assert_eq!(compose(TamilLayout::TypewriterNew, "`"), "'");
        assert_eq!(compose(TamilLayout::TypewriterNew, "``"), "\"");
    }

    #[test]
    fn bamini_doubled_vowels() {
        assert_eq!(compose(TamilLayout::Bamini, "mm"), "ஆ");
        assert_eq!(compose(TamilLayout::Bamini, "cc"), "ஊ");
    }

    #[test]
    fn bamini_om_remaps() {
        assert_eq!(compose(TamilLayout::Bamini, "H"), "ர்");
        assert_eq!(compose(TamilLayout::Bamini, "$"), "கூ");
    }

    #[test]
    fn tn_typewriter_appending_u_signs() {
        let mut s = session(TamilLayout::TnTypewriter);
        s.prev_key = '!';
        let e = translate('%', &mut s);
        assert_eq!(e.delete, Delete::Count(0));
        assert_eq!(e.insert, "ு");
    }
}
