/// Classification of a single character of selector text. This is a pure
/// function of the character; the parser dispatches on it to pick the
/// sub-parser for the component that starts at the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterClass {
    UppercaseLetter,
    LowercaseLetter,
    Digit,
    /// `#`
    IdSign,
    /// `.`
    ClassSign,
    /// A space, separating two simple selectors.
    DescendantSign,
    /// `>`
    ChildSign,
    /// `-`, valid inside names but not as a component start.
    DashSign,
    /// `:`; doubled it introduces a pseudo-element.
    PseudoClassSign,
    /// `*`
    UniversalSign,
    Unclassified,
}

impl CharacterClass {
    pub fn of(c: char) -> Self {
        match c {
            'A'..='Z' => Self::UppercaseLetter,
            'a'..='z' => Self::LowercaseLetter,
            '0'..='9' => Self::Digit,
            '#' => Self::IdSign,
            '.' => Self::ClassSign,
            ' ' => Self::DescendantSign,
            '>' => Self::ChildSign,
            '-' => Self::DashSign,
            ':' => Self::PseudoClassSign,
            '*' => Self::UniversalSign,
            _ => Self::Unclassified,
        }
    }

    /// Whether the character may appear inside a selector name.
    pub fn is_name(self) -> bool {
        matches!(
            self,
            Self::UppercaseLetter | Self::LowercaseLetter | Self::Digit | Self::DashSign
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        assert_eq!(CharacterClass::of('A'), CharacterClass::UppercaseLetter);
        assert_eq!(CharacterClass::of('Z'), CharacterClass::UppercaseLetter);
        assert_eq!(CharacterClass::of('a'), CharacterClass::LowercaseLetter);
        assert_eq!(CharacterClass::of('z'), CharacterClass::LowercaseLetter);
        assert_eq!(CharacterClass::of('0'), CharacterClass::Digit);
        assert_eq!(CharacterClass::of('9'), CharacterClass::Digit);
        assert_eq!(CharacterClass::of('#'), CharacterClass::IdSign);
        assert_eq!(CharacterClass::of('.'), CharacterClass::ClassSign);
        assert_eq!(CharacterClass::of(' '), CharacterClass::DescendantSign);
        assert_eq!(CharacterClass::of('>'), CharacterClass::ChildSign);
        assert_eq!(CharacterClass::of('-'), CharacterClass::DashSign);
        assert_eq!(CharacterClass::of(':'), CharacterClass::PseudoClassSign);
        assert_eq!(CharacterClass::of('*'), CharacterClass::UniversalSign);
        assert_eq!(CharacterClass::of('['), CharacterClass::Unclassified);
        assert_eq!(CharacterClass::of('~'), CharacterClass::Unclassified);
        assert_eq!(CharacterClass::of('\t'), CharacterClass::Unclassified);
    }

    #[test]
    fn name_characters() {
        assert!(CharacterClass::of('a').is_name());
        assert!(CharacterClass::of('Q').is_name());
        assert!(CharacterClass::of('7').is_name());
        assert!(CharacterClass::of('-').is_name());
        assert!(!CharacterClass::of(':').is_name());
        assert!(!CharacterClass::of(' ').is_name());
        assert!(!CharacterClass::of('*').is_name());
    }
}
