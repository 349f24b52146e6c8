//! Compiled-in key and character tables.
//!
//! Every script exposes a [`ScriptTables`] record of parallel arrays. The
//! addressing invariant is positional: if `c2_keys[i]` matches the current
//! key then `c2_char[i]` is the emitted character, valid only when
//! `c1_keys[i]` matches the key that preceded it. A `'*'` slot is a
//! wildcard and never matches (see [`crate::lookup`]).
//!
//! Character slots that can never be reached (their key slot is a wildcard)
//! hold the script's reserved block base (U+0B00, U+0C00, …), as a
//! recognisable "no character" filler.

pub(crate) mod devanagari;
pub(crate) mod diacritic;
pub(crate) mod gurmukhi;
pub(crate) mod kannada;
pub(crate) mod malayalam;
pub(crate) mod matrix;
pub(crate) mod tamil;
pub(crate) mod tamil_layouts;
pub(crate) mod telugu;

use crate::script::Script;

/// The parallel-array table set for one script.
pub(crate) struct ScriptTables {
    pub v1_keys: &'static [char],
    pub v2_keys: &'static [char],
    pub v3_keys: &'static [char],
    /// Independent vowel forms, by keystroke position.
    pub v1_char: &'static [char],
    pub v2_char: &'static [char],
    pub v3_char: &'static [char],
    /// Dependent vowel-sign forms, parallel to the vowel key tables.
    pub vs1_char: &'static [char],
    pub vs2_char: &'static [char],
    pub vs3_char: &'static [char],
    pub c1_keys: &'static [char],
    pub c2_keys: &'static [char],
    pub c3_keys: &'static [char],
    pub c1_char: &'static [char],
    pub c2_char: &'static [char],
    pub c3_char: &'static [char],
    /// Native digits for `0`-`9`, where the script translates them.
    pub digits: Option<&'static [char; 10]>,
    /// (base, fused form) pairs for the `qq` nukta rule.
    pub nukta: &'static [(char, char)],
}

impl ScriptTables {
    pub(crate) fn get(script: Script) -> &'static ScriptTables {
        match script {
            Script::Tamil => &tamil::TABLES,
            Script::Devanagari => &devanagari::TABLES,
            Script::Malayalam => &malayalam::TABLES,
            Script::Kannada => &kannada::TABLES,
            Script::Telugu => &telugu::TABLES,
            Script::Gurmukhi => &gurmukhi::TABLES,
            Script::Diacritic => &diacritic::TABLES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The positional invariant only holds if every parallel array in a
    /// group has the same length.
    #[test]
    fn parallel_arrays_have_equal_lengths() {
        for script in Script::iter() {
            let t = ScriptTables::get(*script);
            let v = t.v1_keys.len();
            for (name, len) in [
                ("v2_keys", t.v2_keys.len()),
                ("v3_keys", t.v3_keys.len()),
                ("v1_char", t.v1_char.len()),
                ("v2_char", t.v2_char.len()),
                ("v3_char", t.v3_char.len()),
                ("vs1_char", t.vs1_char.len()),
                ("vs2_char", t.vs2_char.len()),
                ("vs3_char", t.vs3_char.len()),
            ] {
                assert_eq!(len, v, "{script:?}: {name} is not parallel to v1_keys");
            }
            let c = t.c1_keys.len();
            for (name, len) in [
                ("c2_keys", t.c2_keys.len()),
                ("c3_keys", t.c3_keys.len()),
                ("c1_char", t.c1_char.len()),
                ("c2_char", t.c2_char.len()),
                ("c3_char", t.c3_char.len()),
            ] {
                assert_eq!(len, c, "{script:?}: {name} is not parallel to c1_keys");
            }
        }
    }

    /// First-position key slots are real keys, never wildcards: a wildcard
    /// in `c1_keys`/`v1_keys` would make the whole row unreachable.
    #[test]
    fn first_key_tables_hold_no_wildcards() {
        for script in Script::iter() {
            let t = ScriptTables::get(*script);
            assert!(!t.v1_keys.contains(&'*'), "{script:?}");
            assert!(!t.c1_keys.contains(&'*'), "{script:?}");
        }
    }
}
