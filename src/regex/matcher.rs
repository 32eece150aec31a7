use std::collections::BTreeSet;
use std::ops::Range;

use crate::regex::ast::{Atom, Pattern, Quantifier, Token};

/// Receives each candidate end position of a partial match. Returning `true`
/// accepts it and stops the search; `false` asks the caller to backtrack.
type Continuation<'k> = dyn FnMut(usize) -> bool + 'k;

struct Matcher<'t> {
    text: &'t [char],
}

impl Matcher<'_> {
    /// Matches `pattern` starting exactly at `pos`, honoring its anchors.
    fn match_sequence(&self, pattern: &Pattern, pos: usize, k: &mut Continuation<'_>) -> bool {
        if pattern.anchored_start && pos != 0 {
            return false;
        }
        let text_len = self.text.len();
        self.match_tokens(&pattern.tokens, pos, &mut |end| {
            (!pattern.anchored_end || end == text_len) && k(end)
        })
    }

    fn match_tokens(&self, tokens: &[Token], pos: usize, k: &mut Continuation<'_>) -> bool {
        let Some((token, rest)) = tokens.split_first() else {
            return k(pos);
        };

        match token.quantifier {
            Quantifier::One => self.match_atom(&token.atom, pos, &mut |next| {
                self.match_tokens(rest, next, k)
            }),
            Quantifier::ZeroOrOne => {
                // One occurrence first, then zero.
                let once = self.match_atom(&token.atom, pos, &mut |next| {
                    self.match_tokens(rest, next, k)
                });
                once || self.match_tokens(rest, pos, k)
            }
            Quantifier::OneOrMore => self.match_one_or_more(&token.atom, rest, pos, k),
        }
    }

    fn match_atom(&self, atom: &Atom, pos: usize, k: &mut Continuation<'_>) -> bool {
        match atom {
            Atom::Alternation(branches) => {
                for branch in branches {
                    if self.match_sequence(branch, pos, k) {
                        return true;
                    }
                }
                false
            }
            _ => match self.text.get(pos) {
                Some(&c) if atom.matches_char(c) => k(pos + 1),
                _ => false,
            },
        }
    }

    fn match_one_or_more(
        &self,
        atom: &Atom,
        rest: &[Token],
        pos: usize,
        k: &mut Continuation<'_>,
    ) -> bool {
        if let Atom::Alternation(_) = atom {
            // Longest repetition first, like the single-char run below.
            for &end in self.group_run_ends(atom, pos).iter().rev() {
                if self.match_tokens(rest, end, k) {
                    return true;
                }
            }
            return false;
        }

        let run = self.text[pos.min(self.text.len())..]
            .iter()
            .take_while(|&&c| atom.matches_char(c))
            .count();

        // Longest run first, giving back one char at a time.
        for taken in (1..=run).rev() {
            if self.match_tokens(rest, pos + taken, k) {
                return true;
            }
        }
        false
    }

    /// Every position reachable by one or more repetitions of a group
    /// starting at `pos`, in increasing order. Uses a worklist so the stack
    /// depth does not grow with the number of repetitions.
    fn group_run_ends(&self, atom: &Atom, pos: usize) -> Vec<usize> {
        let mut reached = BTreeSet::new();
        let mut frontier = vec![pos];

        while let Some(from) = frontier.pop() {
            self.match_atom(atom, from, &mut |end| {
                if reached.insert(end) {
                    frontier.push(end);
                }
                false
            });
        }
        reached.into_iter().collect()
    }
}

/// Finds the first start offset (in chars) at which `pattern` matches and
/// returns the matched char range.
pub fn find_chars(pattern: &Pattern, text: &[char]) -> Option<Range<usize>> {
    if pattern.is_empty() && !pattern.anchored_end {
        return Some(0..0);
    }

    let matcher = Matcher { text };
    let last_start = if pattern.anchored_start { 0 } else { text.len() };

    (0..=last_start).find_map(|start| {
        let mut found = None;
        matcher.match_sequence(pattern, start, &mut |end| {
            found = Some(end);
            true
        });
        found.map(|end| start..end)
    })
}

/// Returns the byte range of the leftmost match in `text`.
pub fn find(pattern: &Pattern, text: &str) -> Option<Range<usize>> {
    let chars: Vec<char> = text.chars().collect();
    let range = find_chars(pattern, &chars)?;

    let mut offsets = text.char_indices().map(|(i, _)| i).chain([text.len()]);
    let start = offsets.nth(range.start)?;
    let end = if range.is_empty() {
        start
    } else {
        offsets.nth(range.len() - 1)?
    };
    Some(start..end)
}

pub fn search(pattern: &Pattern, text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    find_chars(pattern, &chars).is_some()
}

pub fn match_pattern<'a>(input_line: &'a str, pattern: &Pattern) -> Option<&'a str> {
    find(pattern, input_line).map(|range| &input_line[range])
}
