use unicode_general_category::{GeneralCategory, get_general_category};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
    Positive, // [abc]
    Negative, // [^abc]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantifier {
    #[default]
    One,
    OneOrMore, // +
    ZeroOrOne, // ?
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    Literal(char),
    Wildcard,
    /// Any decimal digit (general category `Nd`), not only ASCII `0-9`.
    Digit,
    /// Letters only; digits and `_` are not word characters here.
    Word,
    BracketGroup(Vec<char>, GroupType),
    Alternation(Vec<Pattern>), // (a|b|c)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub atom: Atom,
    pub quantifier: Quantifier,
}

impl Token {
    pub fn new(atom: Atom) -> Self {
        Token {
            atom,
            quantifier: Quantifier::One,
        }
    }

    pub fn with_quantifier(atom: Atom, quantifier: Quantifier) -> Self {
        Token { atom, quantifier }
    }
}

impl Atom {
    /// Tests a single character against the atom. Alternations never match
    /// a bare character; the matcher expands them into their branches.
    pub fn matches_char(&self, c: char) -> bool {
        match self {
            Atom::Wildcard => true,
            Atom::Literal(l) => c == *l,
            Atom::Digit => matches!(get_general_category(c), GeneralCategory::DecimalNumber),
            Atom::Word => c.is_alphabetic(),
            Atom::BracketGroup(members, group_type) => {
                let found = members.contains(&c);
                match group_type {
                    GroupType::Positive => found,
                    GroupType::Negative => !found,
                }
            }
            Atom::Alternation(_) => false,
        }
    }
}

/// A compiled token sequence. Used both for a whole pattern and for each
/// branch of an alternation group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    pub tokens: Vec<Token>,
    pub anchored_start: bool, // ^
    pub anchored_end: bool,   // $
}

impl Pattern {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Atom, GroupType};

    #[test]
    fn word_class_is_letters_only() {
        assert!(Atom::Word.matches_char('a'));
        assert!(Atom::Word.matches_char('Z'));
        assert!(Atom::Word.matches_char('é'));
        assert!(!Atom::Word.matches_char('7'));
        assert!(!Atom::Word.matches_char('_'));
        assert!(!Atom::Word.matches_char('.'));
    }

    #[test]
    fn digit_class() {
        assert!(Atom::Digit.matches_char('0'));
        assert!(Atom::Digit.matches_char('9'));
        assert!(Atom::Digit.matches_char('\u{0663}')); // ARABIC-INDIC DIGIT THREE
        assert!(Atom::Digit.matches_char('\u{FF17}')); // FULLWIDTH DIGIT SEVEN
        assert!(!Atom::Digit.matches_char('x'));
        assert!(!Atom::Digit.matches_char('½'));
        assert!(!Atom::Digit.matches_char('Ⅷ'));
    }

    #[test]
    fn bracket_group_membership() {
        let positive = Atom::BracketGroup(vec!['a', 'b'], GroupType::Positive);
        let negative = Atom::BracketGroup(vec!['a', 'b'], GroupType::Negative);
        assert!(positive.matches_char('a'));
        assert!(!positive.matches_char('c'));
        assert!(!negative.matches_char('b'));
        assert!(negative.matches_char('c'));

        let empty = Atom::BracketGroup(vec![], GroupType::Positive);
        assert!(!empty.matches_char('a'));
    }

    #[test]
    fn alternation_never_matches_a_bare_char() {
        assert!(!Atom::Alternation(vec![]).matches_char('a'));
    }
}
