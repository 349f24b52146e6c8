//! The shared phonetic transducer.
//!
//! One keystroke goes in, one emission comes out. The dispatch runs on the
//! classification of the *previous* key: a `k` is a fresh consonant at the
//! start of a sequence, a cluster candidate after another consonant, and a
//! plain letter after a completed character. Scripts differ only in their
//! tables, their virama handling and a small set of cluster rules.

use log::trace;

use crate::edit::{Delete, Emit};
use crate::keys::BACKSPACE;
use crate::lookup::position;
use crate::script::Script;
use crate::session::{CharClass, KeyClass, Session};
use crate::tables::{devanagari, kannada, malayalam, tamil, telugu, ScriptTables};

const ZWNJ: char = '\u{200C}';

/// Translates one key against the session, mutating the session state and
/// returning the emission.
pub(crate) fn translate(
    script: Script,
    key: char,
    session: &mut Session,
    prev_was_backspace: bool,
) -> Emit {
    let tables = ScriptTables::get(script);
    let mut emit = Emit::new();
    let mut key = key;

    // A `n` typed directly after a vowel sign or pulli in the document can
    // only be the alveolar ன; the dental candidate would have joined the
    // previous syllable.
    let mut n_forced_alveolar = false;
    if script == Script::Tamil
        && key == 'n'
        && ('\u{0B83}'..='\u{0BCD}').contains(&session.context_before)
    {
        key = 'W';
        n_forced_alveolar = true;
    }

    trace!(
        "translate {script:?}: key={key:?} prev={:?} class={:?}",
        session.prev_key,
        session.prev_key_class
    );

    if !preamble(script, tables, key, session, &mut emit) {
        dispatch(script, tables, key, session, &mut emit, prev_was_backspace);
    }

    session.prev_key = if n_forced_alveolar { 'n' } else { key };
    emit
}

/// Keys handled ahead of the state dispatch: native digits, the danda and
/// the Devanagari avagraha. Returns true when the key was consumed.
fn preamble(
    script: Script,
    tables: &ScriptTables,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) -> bool {
    if let Some(digits) = tables.digits {
        if key.is_ascii_digit() {
            emit.push(digits[(key as u8 - b'0') as usize]);
            session.prev_key_class = KeyClass::NonIndic;
            session.current_base_char = '\0';
            return true;
        }
    }

    let has_danda = !matches!(script, Script::Tamil | Script::Diacritic);
    if has_danda && key == '|' {
        if session.prev_key == '|' {
            emit.delete = Delete::Count(1);
            emit.push(devanagari::DOUBLE_DANDA);
        } else {
            emit.push(devanagari::DANDA);
        }
        session.prev_key_class = KeyClass::NonIndic;
        session.current_base_char = '\0';
        return true;
    }

    if script == Script::Devanagari && key == '#' {
        emit.push(devanagari::AVAGRAHA);
        session.prev_key_class = KeyClass::NonIndic;
        session.current_base_char = '\0';
        return true;
    }

    if script == Script::Tamil {
        // f breaks the vowel context; doubled it leaves a bare pulli.
        if key == 'f' {
            if session.prev_key == 'f' {
                emit.push('\u{0BCD}');
            }
            session.prev_key_class = KeyClass::Fresh;
            return true;
        }
        if key == '$' && session.prev_key == '$' {
            emit.delete = Delete::Count(1);
            emit.push('₹');
            session.prev_key_class = KeyClass::NonIndic;
            return true;
        }
    }

    false
}

fn dispatch(
    script: Script,
    tables: &ScriptTables,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
    prev_was_backspace: bool,
) {
    use KeyClass::*;

    match session.prev_key_class {
        FirstVowel | FirstVowelSign => {
            if nukta_fusion(tables, key, session, emit) {
                return;
            }
            if second_vowel(script, tables, key, session, emit) {
                return;
            }
            // An Anjal vowel key typed over a fresh independent vowel
            // replaces it outright.
            if script == Script::Tamil && session.prev_key_class == FirstVowel {
                if let Some(vpos) = position(key, tables.v1_keys, None, None) {
                    emit.delete = Delete::Count(1);
                    emit.push(tables.v1_char[vpos]);
                    session.first_vowel_key = key;
                    return;
                }
            }
            start_new_session(script, tables, key, session, emit, prev_was_backspace);
        }

        SecondVowel | SecondVowelSign => {
            if third_vowel(tables, key, session, emit) {
                return;
            }
            start_new_session(script, tables, key, session, emit, prev_was_backspace);
        }

        FirstConsonant => {
            if first_conso_cluster(script, key, session, emit) {
                return;
            }
            if let Some(vpos) = position(key, tables.c2_keys, Some((session.prev_key, tables.c1_keys)), None)
            {
                second_consonant(script, tables, vpos, key, session, emit);
                return;
            }
            if let Some(vpos) = position(key, tables.v1_keys, None, None) {
                vowel_after_consonant(script, tables, vpos, key, session, emit);
                return;
            }
            start_new_session(script, tables, key, session, emit, prev_was_backspace);
        }

        SecondConsonant => {
            if second_conso_cluster(script, key, session, emit) {
                return;
            }
            if let Some(vpos) = position(
                key,
                tables.c3_keys,
                Some((session.prev_key, tables.c2_keys)),
                Some((session.first_conso_key, tables.c1_keys)),
            ) {
                third_consonant(script, tables, vpos, session, emit);
                return;
            }
            if let Some(vpos) = position(key, tables.v1_keys, None, None) {
                vowel_after_consonant(script, tables, vpos, key, session, emit);
                return;
            }
            start_new_session(script, tables, key, session, emit, prev_was_backspace);
        }

        ThirdConsonant => {
            if let Some(vpos) = position(key, tables.v1_keys, None, None) {
                vowel_after_consonant(script, tables, vpos, key, session, emit);
                return;
            }
            start_new_session(script, tables, key, session, emit, prev_was_backspace);
        }

        // Fresh, CharacterEnd, WhiteSpace, NonIndic, the third-vowel states
        // and the WYTIWYG-only states all start over.
        _ => start_new_session(script, tables, key, session, emit, prev_was_backspace),
    }
}

/// The `qq` nukta rule: fuse the current base with its nukta form.
fn nukta_fusion(
    tables: &ScriptTables,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) -> bool {
    if key != 'q' || session.prev_key != 'q' || tables.nukta.is_empty() {
        return false;
    }
    let base = session.current_base_char;
    match tables.nukta.iter().find(|(b, _)| *b == base) {
        Some(&(_, fused)) => {
            session.current_base_char = fused;
            emit.push(fused);
            // The first q sent a virama; retract it along with the base.
            emit.delete = Delete::Count(2);
            session.prev_key_class = KeyClass::SecondVowel;
            true
        }
        None => false,
    }
}

fn second_vowel(
    script: Script,
    tables: &ScriptTables,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) -> bool {
    let Some(vpos) = position(key, tables.v2_keys, Some((session.prev_key, tables.v1_keys)), None)
    else {
        return false;
    };

    let sign = session.prev_key_class == KeyClass::FirstVowelSign;
    if sign {
        emit.push(tables.vs2_char[vpos]);
        session.prev_key_class = KeyClass::SecondVowelSign;
        emit.delete = Delete::Count(sign_replace_count(script, key, session.prev_key));
    } else {
        emit.push(tables.v2_char[vpos]);
        session.prev_key_class = KeyClass::SecondVowel;
        emit.delete = Delete::Count(1);
    }
    true
}

/// How many code points a second vowel sign replaces. The inherent `a`
/// emits no sign, so combinations built on it keep the document tail.
fn sign_replace_count(script: Script, key: char, prev_key: char) -> usize {
    match script {
        Script::Malayalam | Script::Kannada | Script::Telugu => {
            if prev_key == 'a' {
                0
            } else {
                1
            }
        }
        Script::Tamil | Script::Devanagari | Script::Gurmukhi => {
            if key == 'a' || (prev_key == 'a' && (key == 'i' || key == 'u')) {
                0
            } else {
                1
            }
        }
        Script::Diacritic => 1,
    }
}

fn third_vowel(
    tables: &ScriptTables,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) -> bool {
    let Some(vpos) = position(
        key,
        tables.v3_keys,
        Some((session.prev_key, tables.v2_keys)),
        Some((session.first_vowel_key, tables.v1_keys)),
    ) else {
        return false;
    };

    if session.prev_key_class == KeyClass::SecondVowelSign {
        emit.push(tables.vs3_char[vpos]);
        session.prev_key_class = KeyClass::ThirdVowelSign;
    } else {
        emit.push(tables.v3_char[vpos]);
        session.prev_key_class = KeyClass::ThirdVowel;
    }
    emit.delete = Delete::Count(1);
    session.prev_char_class = CharClass::Vowel;
    true
}

/// A second consonant joins the cluster, replacing the previous consonant
/// cell with the composite.
fn second_consonant(
    script: Script,
    tables: &ScriptTables,
    vpos: usize,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) {
    let ch = tables.c2_char[vpos];
    session.current_base_char = ch;
    session.prev_key_class = KeyClass::SecondConsonant;

    if script == Script::Tamil && ch == tamil::SRI_PLACEHOLDER {
        emit.set_insert("ஶ்ரீ");
        emit.delete = Delete::Count(2);
        return;
    }

    if script.auto_virama() {
        emit.push(ch);
        // A Malayalam chillu marker yields the bare atom, no chandrakkala.
        if !(script == Script::Malayalam && key == 'w') {
            if let Some(virama) = script.virama() {
                emit.push(virama);
            }
        }
        emit.delete = Delete::Count(2);
    } else {
        emit.push(ch);
        emit.delete = Delete::Count(1);
    }
}

fn third_consonant(
    script: Script,
    tables: &ScriptTables,
    vpos: usize,
    session: &mut Session,
    emit: &mut Emit,
) {
    let ch = tables.c3_char[vpos];
    session.current_base_char = ch;
    session.prev_key_class = KeyClass::ThirdConsonant;

    if script == Script::Tamil && ch == tamil::SRI_PLACEHOLDER {
        emit.set_insert("ஶ்ரீ");
        emit.delete = Delete::Count(4);
        return;
    }

    if script.auto_virama() {
        emit.push(ch);
        if let Some(virama) = script.virama() {
            emit.push(virama);
        }
        emit.delete = Delete::Count(2);
    } else {
        emit.push(ch);
        emit.delete = Delete::Count(1);
    }
}

/// A vowel key arriving on a composed consonant: emit the dependent sign
/// (or nothing for the inherent `a`) and retract the automatic virama.
fn vowel_after_consonant(
    script: Script,
    tables: &ScriptTables,
    vpos: usize,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) {
    let auto = script.auto_virama();
    if script.inherent_a() && key == 'a' {
        // Nothing happens with the akaram; only the virama goes.
    } else {
        emit.push(tables.vs1_char[vpos]);
    }
    if auto {
        emit.delete = Delete::Count(1);
    }
    session.prev_key_class = KeyClass::FirstVowelSign;
}

/// Script-specific cluster rules checked before the ordinary second
/// consonant lookup.
fn first_conso_cluster(
    script: Script,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) -> bool {
    let prev = session.prev_key;
    match script {
        Script::Tamil => match (prev, key) {
            ('t', 'r') => {
                emit.set_insert("ற்ற்");
                emit.delete = Delete::Count(2);
                session.prev_key_class = KeyClass::SecondConsonant;
                true
            }
            ('n', 't') => {
                emit.set_insert("ந்த்");
                emit.delete = Delete::Count(2);
                session.prev_key_class = KeyClass::SecondConsonant;
                true
            }
            ('n', 'd') => {
                emit.set_insert("ண்ட்");
                emit.delete = Delete::Count(2);
                session.prev_key_class = KeyClass::SecondConsonant;
                true
            }
            // The second l after an L makes it a ள், keeping both.
            ('L', 'l') => {
                emit.set_insert("ள்");
                session.prev_key_class = KeyClass::FirstConsonant;
                true
            }
            // Plain க்ச for now; the trailing h of a `ksh` may still arrive.
            ('k', 's') => {
                emit.set_insert("ச்");
                session.prev_key_class = KeyClass::SecondConsonant;
                true
            }
            _ => false,
        },
        Script::Malayalam if (prev, key) == ('r', 'r') => {
            emit.set_insert("റ്റ്");
            emit.delete = Delete::Count(2);
            session.prev_key_class = KeyClass::SecondConsonant;
            true
        }
        Script::Kannada if (prev, key) == ('r', 'r') => {
            emit.set_insert("ಱ್ಱ್");
            emit.delete = Delete::Count(2);
            session.prev_key_class = KeyClass::SecondConsonant;
            true
        }
        Script::Telugu if (prev, key) == ('r', 'r') => {
            emit.set_insert("ఱ్ఱ్");
            emit.delete = Delete::Count(2);
            session.prev_key_class = KeyClass::SecondConsonant;
            true
        }
        _ => false,
    }
}

/// Tamil trigraphs short-circuiting the third consonant lookup.
fn second_conso_cluster(
    script: Script,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
) -> bool {
    if script != Script::Tamil {
        return false;
    }
    let first = session.first_conso_key;
    let prev = session.prev_key;
    let alveolar_first = first == 'n' || first == 'W';

    if alveolar_first && prev == 'd' && key == 'r' {
        emit.set_insert("ன்ற்");
        emit.delete = Delete::Count(4);
        session.prev_key_class = KeyClass::ThirdConsonant;
        return true;
    }
    if alveolar_first && prev == 'j' && key == 'j' {
        emit.set_insert("ச்");
        session.prev_key_class = KeyClass::ThirdConsonant;
        return true;
    }
    if first == 'k' && prev == 's' && key == 'h' {
        // The non-joiner keeps க் and ஷ் from ligating into க்ஷ.
        emit.push(ZWNJ);
        emit.push('ஷ');
        emit.push('\u{0BCD}');
        emit.delete = Delete::Count(2);
        session.prev_key_class = KeyClass::ThirdConsonant;
        return true;
    }
    false
}

fn start_new_session(
    script: Script,
    tables: &ScriptTables,
    key: char,
    session: &mut Session,
    emit: &mut Emit,
    prev_was_backspace: bool,
) {
    emit.clear_insert();
    emit.delete = Delete::Count(0);
    emit.fix_previous = true;

    if let Some(vpos) = position(key, tables.c1_keys, None, None) {
        let dental_start = script == Script::Tamil
            && key == 'n'
            && matches!(
                session.prev_key_class,
                KeyClass::Fresh | KeyClass::WhiteSpace
            )
            && session.prev_key != BACKSPACE
            && !prev_was_backspace;

        let conso = if dental_start {
            'ந'
        } else {
            tables.c1_char[vpos]
        };

        if script == Script::Tamil && conso == tamil::KSHA_PLACEHOLDER {
            emit.set_insert("க்ஷ்");
        } else {
            emit.push(conso);
            if let Some(virama) = script.virama() {
                if script.auto_virama() {
                    emit.push(virama);
                }
            }
        }

        session.current_base_char = conso;
        session.prev_key_class = KeyClass::FirstConsonant;
        session.prev_char_class = CharClass::Consonant;
        session.first_conso_key = key;
        return;
    }

    if let Some(vpos) = position(key, tables.v1_keys, None, None) {
        emit.push(tables.v1_char[vpos]);
        session.prev_key_class = KeyClass::FirstVowel;
        session.prev_char_class = CharClass::Vowel;
        session.first_vowel_key = key;
        session.current_base_char = '\0';
        return;
    }

    // Unmapped. Commit whatever was composing and pass the key through,
    // except for stray Latin letters which are swallowed in Indic mode.
    session.reset();
    session.first_conso_key = '\0';
    session.prev_key_class = KeyClass::CharacterEnd;
    session.prev_char_class = CharClass::NonIndic;

    match script {
        Script::Malayalam if key == 'W' => emit.push(malayalam::AVAGRAHA),
        Script::Kannada if key == 'V' => emit.push(kannada::AVAGRAHA),
        Script::Telugu if key == 'W' => emit.push(telugu::AVAGRAHA),
        _ if key.is_alphabetic() => {}
        _ => {
            emit.push(key);
            if key.is_whitespace() {
                session.prev_key_class = KeyClass::WhiteSpace;
            }
        }
    }
}
