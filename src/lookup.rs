//! Positional search over the parallel key tables.
//!
//! A table position is only meaningful together with the identity of the
//! predecessor tables: if `c2_keys[i]` matches the current key, the slot is
//! a hit only when `c1_keys[i]` also matches the previous key (and, for
//! three-key sequences, the first-key table matches the key that opened the
//! run).

/// The slot marker meaning "no key at this position". It never matches,
/// neither as the probe key nor inside a predicate table.
pub(crate) const WILDCARD: char = '*';

/// Finds the earliest slot of `key` in `table` that also satisfies the
/// predecessor predicates.
///
/// `prev` constrains the matching slot's entry in the previous-key table;
/// `first` additionally constrains the first-key table (used for the third
/// key of a sequence). Earlier slots win ties.
pub(crate) fn position(
    key: char,
    table: &[char],
    prev: Option<(char, &[char])>,
    first: Option<(char, &[char])>,
) -> Option<usize> {
    if key == WILDCARD {
        return None;
    }

    let mut pos = 0;
    loop {
        // Scan forward to the next slot holding `key`.
        while pos < table.len() && table[pos] != key {
            pos += 1;
        }
        if pos >= table.len() {
            return None;
        }

        if let Some((prev_key, prev_table)) = prev {
            // A wildcard slot in the predicate table never matches, even
            // when the probe itself is a wildcard.
            let slot = prev_table.get(pos);
            if slot == Some(&WILDCARD) || slot != Some(&prev_key) {
                pos += 1;
                continue;
            }
        } else {
            return Some(pos);
        }

        if let Some((first_key, first_table)) = first {
            let slot = first_table.get(pos);
            if slot == Some(&WILDCARD) || slot != Some(&first_key) {
                pos += 1;
                continue;
            }
        }

        return Some(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[char] = &['a', 'b', 'a', 'c', 'a'];
    const PREV: &[char] = &['*', 'x', 'y', '*', 'z'];
    const FIRST: &[char] = &['*', '*', 'p', '*', 'q'];

    #[test]
    fn earliest_slot_wins_without_predicates() {
        assert_eq!(position('a', KEYS, None, None), Some(0));
        assert_eq!(position('c', KEYS, None, None), Some(3));
        assert_eq!(position('d', KEYS, None, None), None);
    }

    #[test]
    fn wildcard_never_matches() {
        assert_eq!(position('*', KEYS, None, None), None);
        // A wildcard in the predicate table is not equal to any real key,
        // nor to a wildcard probe.
        assert_eq!(position('a', KEYS, Some(('*', PREV)), None), None);
        assert_eq!(
            position('a', KEYS, Some(('y', PREV)), Some(('*', FIRST))),
            None
        );
    }

    #[test]
    fn predecessor_predicate_skips_slots() {
        assert_eq!(position('a', KEYS, Some(('y', PREV)), None), Some(2));
        assert_eq!(position('a', KEYS, Some(('z', PREV)), None), Some(4));
        assert_eq!(position('a', KEYS, Some(('w', PREV)), None), None);
    }

    #[test]
    fn grandparent_predicate_chains() {
        assert_eq!(
            position('a', KEYS, Some(('y', PREV)), Some(('p', FIRST))),
            Some(2)
        );
        assert_eq!(
            position('a', KEYS, Some(('y', PREV)), Some(('q', FIRST))),
            None
        );
        assert_eq!(
            position('a', KEYS, Some(('z', PREV)), Some(('q', FIRST))),
            Some(4)
        );
    }

    #[test]
    fn empty_table_never_hits() {
        assert_eq!(position('a', &[], None, None), None);
    }
}
