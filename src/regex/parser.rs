use std::iter::{Enumerate, Peekable};
use std::str::Chars;

use crate::regex::ast::{Atom, GroupType, Pattern, Quantifier, Token};
use crate::regex::error::CompileError;

pub fn parse_regex(pattern: &str) -> Result<Pattern, CompileError> {
    Parser::new(pattern).parse()
}

struct Parser<'p> {
    chars: Peekable<Enumerate<Chars<'p>>>,
}

impl<'p> Parser<'p> {
    fn new(pattern: &'p str) -> Self {
        Parser {
            chars: pattern.chars().enumerate().peekable(),
        }
    }

    fn parse(mut self) -> Result<Pattern, CompileError> {
        self.parse_sequence(false)
    }

    /// Parses tokens until the end of input or, inside a group, until the
    /// next top-level `|` or `)` (left unconsumed for the caller).
    fn parse_sequence(&mut self, in_group: bool) -> Result<Pattern, CompileError> {
        let mut pattern = Pattern::default();

        if let Some(&(_, '^')) = self.chars.peek() {
            self.chars.next();
            pattern.anchored_start = true;
        }

        while let Some(&(offset, c)) = self.chars.peek() {
            if in_group && (c == '|' || c == ')') {
                break;
            }
            self.chars.next();

            match c {
                '\\' => match self.chars.next() {
                    Some((_, 'd')) => pattern.tokens.push(Token::new(Atom::Digit)),
                    Some((_, 'w')) => pattern.tokens.push(Token::new(Atom::Word)),
                    Some((_, escaped)) => {
                        return Err(CompileError::UnsupportedEscape {
                            escape: Some(escaped),
                            offset,
                        });
                    }
                    None => {
                        return Err(CompileError::UnsupportedEscape {
                            escape: None,
                            offset,
                        });
                    }
                },
                '[' => {
                    let atom = self.parse_bracket(offset)?;
                    pattern.tokens.push(Token::new(atom));
                }
                '(' if in_group => return Err(CompileError::NestedGroup { offset }),
                '(' => {
                    let atom = self.parse_group(offset)?;
                    pattern.tokens.push(Token::new(atom));
                }
                ')' => return Err(CompileError::UnopenedGroup { offset }),
                '^' => return Err(CompileError::MisplacedAnchor { anchor: c, offset }),
                '$' => {
                    if !self.at_sequence_end(in_group) {
                        return Err(CompileError::MisplacedAnchor { anchor: c, offset });
                    }
                    pattern.anchored_end = true;
                }
                '+' | '?' => {
                    let quantifier = if c == '+' {
                        Quantifier::OneOrMore
                    } else {
                        Quantifier::ZeroOrOne
                    };
                    match pattern.tokens.pop() {
                        Some(prev) if prev.quantifier == Quantifier::One => {
                            let token = Token::with_quantifier(prev.atom, quantifier);
                            pattern.tokens.push(token);
                        }
                        _ => {
                            return Err(CompileError::DanglingQuantifier {
                                quantifier: c,
                                offset,
                            });
                        }
                    }
                }
                '.' => pattern.tokens.push(Token::new(Atom::Wildcard)),
                _ => pattern.tokens.push(Token::new(Atom::Literal(c))),
            }
        }

        Ok(pattern)
    }

    fn at_sequence_end(&mut self, in_group: bool) -> bool {
        match self.chars.peek() {
            None => true,
            Some(&(_, next)) => in_group && (next == '|' || next == ')'),
        }
    }

    // Called with the opening `[` already consumed.
    fn parse_bracket(&mut self, open: usize) -> Result<Atom, CompileError> {
        let mut group_type = GroupType::Positive;
        if let Some(&(_, '^')) = self.chars.peek() {
            group_type = GroupType::Negative;
            self.chars.next();
        }

        let mut members = Vec::new();
        for (_, c) in self.chars.by_ref() {
            if c == ']' {
                return Ok(Atom::BracketGroup(members, group_type));
            }
            if !members.contains(&c) {
                members.push(c);
            }
        }
        Err(CompileError::UnterminatedBracket { offset: open })
    }

    // Called with the opening `(` already consumed.
    fn parse_group(&mut self, open: usize) -> Result<Atom, CompileError> {
        let mut branches = Vec::new();
        loop {
            branches.push(self.parse_sequence(true)?);
            match self.chars.next() {
                Some((_, '|')) => continue,
                Some((_, ')')) => return Ok(Atom::Alternation(branches)),
                _ => return Err(CompileError::UnterminatedGroup { offset: open }),
            }
        }
    }
}
