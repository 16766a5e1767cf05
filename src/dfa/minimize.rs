// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::collections::BTreeMap;

use status::StatusSet;
use Symbol;

use super::Dfa;

impl Dfa {
    /// Reduces the `Dfa` to an equivalent one with no two equivalent states.
    ///
    /// This is Moore style partition refinement. The states are first split
    /// into non-accepting and accepting blocks. A block is then split as soon
    /// as some symbol (in alphabet registration order) sends two of its
    /// members into different blocks, and the sub-blocks are examined before
    /// moving on. Passes repeat until one of them performs no split.
    ///
    /// The input is expected to be total over its alphabet, as the output of
    /// `Nfa::determinize` is. A missing transition is treated as a move into
    /// an extra implicit trap block, which keeps the result sound but not
    /// necessarily minimal. For the same reason the single looping state
    /// shortcut only applies when every state accepts and has a transition
    /// on every symbol.
    pub fn minimize(&self) -> Dfa {
        let len = self.len();
        let alphabet: Vec<Symbol> = self.alphabet().collect();

        let all_accepting_and_total = (0..len).all(|state| {
            self.is_accepting(state)
                && alphabet
                    .iter()
                    .all(|&symbol| self.transition(state, symbol).is_some())
        });
        if all_accepting_and_total {
            let mut dfa = Dfa::new(1, 0);
            for &symbol in &alphabet {
                dfa.add_transition(0, 0, symbol);
            }
            dfa.add_accept(0);

            debug!("minimized all-accepting dfa of {} states into 1 state", len);
            return dfa;
        }

        let rejecting = StatusSet::from_states(len, (0..len).filter(|&s| !self.is_accepting(s)));
        let accepting = StatusSet::from_states(len, (0..len).filter(|&s| self.is_accepting(s)));
        let mut blocks: Vec<StatusSet> = vec![rejecting, accepting]
            .into_iter()
            .filter(|block| !block.is_empty())
            .collect();
        let mut block_of = vec![0; len];
        assign_blocks(&blocks, &mut block_of);

        let mut passes = 0;
        loop {
            passes += 1;
            let mut changed = false;
            let mut index = 0;

            while index < blocks.len() {
                match self.split_block(&blocks[index], &block_of, &alphabet) {
                    Some(parts) => {
                        trace!("split block {{{}}} into {} blocks", blocks[index], parts.len());

                        let tail = blocks.split_off(index + 1);
                        blocks.truncate(index);
                        blocks.extend(parts);
                        blocks.extend(tail);
                        assign_blocks(&blocks, &mut block_of);
                        changed = true;
                    }
                    None => index += 1,
                }
            }

            if !changed {
                break;
            }
        }

        let mut dfa = Dfa::new(blocks.len(), block_of[self.initial()]);
        for (index, block) in blocks.iter().enumerate() {
            if let Some(representative) = block.first() {
                for &symbol in &alphabet {
                    if let Some(to) = self.transition(representative, symbol) {
                        dfa.add_transition(index, block_of[to], symbol);
                    }
                }
                if self.is_accepting(representative) {
                    dfa.add_accept(index);
                }
            }
        }

        debug!(
            "minimized dfa of {} states into {} states in {} passes",
            len,
            dfa.len(),
            passes
        );

        dfa
    }

    // Splits `block` by the destination blocks of the first symbol that
    // distinguishes its members, or returns None if the block is stable.
    fn split_block(
        &self,
        block: &StatusSet,
        block_of: &[usize],
        alphabet: &[Symbol],
    ) -> Option<Vec<StatusSet>> {
        for &symbol in alphabet {
            let mut groups: BTreeMap<Option<usize>, StatusSet> = BTreeMap::new();
            for state in block {
                let destination = self.transition(state, symbol).map(|to| block_of[to]);
                groups
                    .entry(destination)
                    .or_insert_with(|| StatusSet::new(block.capacity()))
                    .set(state, true);
            }

            if groups.len() > 1 {
                return Some(groups.into_iter().map(|(_, group)| group).collect());
            }
        }

        None
    }
}

fn assign_blocks(blocks: &[StatusSet], block_of: &mut [usize]) {
    for (index, block) in blocks.iter().enumerate() {
        for state in block {
            block_of[state] = index;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::QuickCheck;
    use testutils::{equivalent_states, random_dfa, to_input};

    // the five state dfa for (a|b)*abb before minimization; states 0 and 2
    // are equivalent
    fn dragon_book_dfa() -> Dfa {
        let mut dfa = Dfa::new(5, 0);
        for &(from, on_a, on_b) in &[(0, 1, 2), (1, 1, 3), (2, 1, 2), (3, 1, 4), (4, 1, 2)] {
            dfa.add_transition(from, on_a, 'a');
            dfa.add_transition(from, on_b, 'b');
        }
        dfa.add_accept(4);
        dfa
    }

    #[test]
    fn minimize_dragon_book_dfa_has_four_states() {
        let sut = dragon_book_dfa();

        let mut result = sut.minimize();

        assert_eq!(result.len(), 4);
        assert!(result.accepts("babb".chars()));
        assert!(!result.accepts("abba".chars()));
    }

    #[test]
    fn minimize_all_accepting_gives_single_looping_state() {
        let mut dfa = Dfa::new(3, 0);
        dfa.add_transition(0, 1, 'a');
        dfa.add_transition(1, 2, 'a');
        dfa.add_transition(2, 0, 'a');
        dfa.add_transition(0, 0, 'b');
        dfa.add_transition(1, 1, 'b');
        dfa.add_transition(2, 2, 'b');
        for state in 0..3 {
            dfa.add_accept(state);
        }

        let sut = dfa.minimize();

        assert_eq!(sut.len(), 1);
        assert!(sut.is_accepting(0));
        assert_matches!(sut.transition(0, 'a'), Some(0));
        assert_matches!(sut.transition(0, 'b'), Some(0));
    }

    #[test]
    fn minimize_without_accepting_states_gives_single_sink() {
        let mut dfa = Dfa::new(2, 0);
        dfa.add_transition(0, 1, 'a');
        dfa.add_transition(1, 0, 'a');

        let sut = dfa.minimize();

        assert_eq!(sut.len(), 1);
        assert!(!sut.is_accepting(0));
        assert!(sut.is_trapped());
    }

    #[test]
    fn minimize_keeps_block_of_initial_state_as_initial() {
        let mut dfa = Dfa::new(3, 2);
        dfa.add_transition(2, 0, 'a');
        dfa.add_transition(0, 1, 'a');
        dfa.add_transition(1, 1, 'a');
        dfa.add_accept(1);

        let mut sut = dfa.minimize();

        assert!(!sut.accepts("a".chars()));
        assert!(sut.accepts("aa".chars()));
        assert!(sut.accepts("aaa".chars()));
    }

    #[test]
    fn minimize_treats_missing_transition_as_trap() {
        // 1 and 2 both accept but only 1 continues on 'a'
        let mut dfa = Dfa::new(3, 0);
        dfa.add_transition(0, 1, 'a');
        dfa.add_transition(0, 2, 'b');
        dfa.add_transition(1, 1, 'a');
        dfa.add_accept(1);
        dfa.add_accept(2);

        let mut sut = dfa.minimize();

        assert!(sut.accepts("aaa".chars()));
        assert!(sut.accepts("b".chars()));
        assert!(!sut.accepts("ba".chars()));
    }

    #[test]
    fn minimize_all_accepting_partial_dfa_keeps_implicit_trap() {
        // at most one 'a'
        let mut dfa = Dfa::new(2, 0);
        dfa.add_transition(0, 1, 'a');
        dfa.add_transition(0, 0, 'b');
        dfa.add_transition(1, 1, 'b');
        dfa.add_accept(0);
        dfa.add_accept(1);

        let mut sut = dfa.minimize();

        assert_eq!(sut.len(), 2);
        assert!(sut.accepts("bab".chars()));
        assert!(!sut.accepts("aa".chars()));
        assert!(!sut.accepts("aba".chars()));
    }

    #[test]
    fn minimize_is_idempotent_on_dragon_book_dfa() {
        let once = dragon_book_dfa().minimize();

        let twice = once.minimize();

        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn minimize_preserves_alphabet_order() {
        let mut dfa = Dfa::new(2, 0);
        dfa.add_transition(0, 1, 'z');
        dfa.add_transition(0, 0, 'a');
        dfa.add_transition(1, 1, 'z');
        dfa.add_transition(1, 1, 'a');
        dfa.add_accept(1);

        let sut = dfa.minimize();

        let alphabet: Vec<_> = sut.alphabet().collect();
        assert_eq!(alphabet, vec!['z' as Symbol, 'a' as Symbol]);
    }

    fn prop_minimize_preserves_language(shape: Vec<u8>, input: Vec<u8>) -> bool {
        let input = to_input(&input, "ab");
        let mut dfa = random_dfa(&shape, "ab");
        let mut minimal = dfa.minimize();

        dfa.accepts(input.iter().cloned()) == minimal.accepts(input.iter().cloned())
    }

    #[test]
    fn quickcheck_minimize_preserves_language() {
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_minimize_preserves_language as fn(Vec<u8>, Vec<u8>) -> bool);
    }

    fn prop_minimize_leaves_no_equivalent_states(shape: Vec<u8>) -> bool {
        let minimal = random_dfa(&shape, "ab").minimize();

        (0..minimal.len()).all(|a| {
            (a + 1..minimal.len()).all(|b| !equivalent_states(&minimal, a, b))
        })
    }

    #[test]
    fn quickcheck_minimize_leaves_no_equivalent_states() {
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_minimize_leaves_no_equivalent_states as fn(Vec<u8>) -> bool);
    }

    fn prop_minimize_is_idempotent(shape: Vec<u8>) -> bool {
        let once = random_dfa(&shape, "ab").minimize();

        once.minimize().len() == once.len()
    }

    #[test]
    fn quickcheck_minimize_is_idempotent() {
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_minimize_is_idempotent as fn(Vec<u8>) -> bool);
    }
}
