use std::mem;

use crate::char_class::CharacterClass;
use crate::error::{Result, SyntaxError};
use crate::selector::{PseudoClassSelector, PseudoElementSelector, SimpleSelectorNode};

/// Parse-time accumulator for one simple selector level: the public node
/// shape plus the weight triple that is stripped before the tree is handed
/// to the caller. Weights are accumulated per level; the pseudo sub-nodes
/// hanging off `pseudo_class`/`pseudo_element` belong to the same simple
/// selector and contribute to this level's triple.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct NodeBuilder {
    pub(crate) tag_name: Option<String>,
    pub(crate) id_name: Option<String>,
    pub(crate) class_names: Vec<String>,
    pub(crate) pseudo_class: Option<PseudoClassSelector>,
    pub(crate) pseudo_element: Option<PseudoElementSelector>,
    pub(crate) weight: (u32, u32, u32),
    pub(crate) combinator_child: Option<Box<NodeBuilder>>,
    pub(crate) combinator_descendant: Option<Box<NodeBuilder>>,
}

/// The states of the selector state machine. Each name-accumulating state
/// owns the component kind the pending name will be confirmed into; the two
/// combinator states collapse sign runs and start the next level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ParserState {
    Type,
    Id,
    Class,
    PseudoClass,
    PseudoElement,
    Descendant,
    Child,
}

impl ParserState {
    /// The sign quoted when this component ends without a name.
    fn sign(self) -> &'static str {
        match self {
            ParserState::Type => "",
            ParserState::Id => "#",
            ParserState::Class => ".",
            ParserState::PseudoClass => ":",
            ParserState::PseudoElement => "::",
            ParserState::Descendant => " ",
            ParserState::Child => ">",
        }
    }

    /// The selector kinds whose names may not begin with a digit. Pseudo
    /// names are exempt.
    fn digit_sensitive_kind(self) -> Option<&'static str> {
        match self {
            ParserState::Type => Some("tag"),
            ParserState::Id => Some("id"),
            ParserState::Class => Some("class"),
            _ => None,
        }
    }
}

/// A confirmed pseudo component, recorded in source order and assembled
/// into the nested tree shape once the level is complete.
#[derive(Debug)]
enum PseudoLink {
    Class(String),
    Element(String),
}

enum Combinator {
    Child,
    Descendant,
}

/// Character-driven state machine over one pre-checked selector entry.
#[derive(Debug)]
pub(crate) struct SelectorParser {
    input: Vec<char>,
    pos: usize,
}

impl SelectorParser {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    pub(crate) fn parse(&mut self) -> Result<NodeBuilder> {
        // Levels already closed by a combinator, paired with the combinator
        // that followed them. Folded into the final chain at the end.
        let mut finished: Vec<(NodeBuilder, Combinator)> = Vec::new();
        let mut node = NodeBuilder::default();
        let mut links: Vec<PseudoLink> = Vec::new();
        let mut name = String::new();
        let mut state = self.dispatch()?;

        loop {
            let Some(ch) = self.peek() else {
                match state {
                    ParserState::Descendant | ParserState::Child => {
                        return Err(SyntaxError::TrailingCharacter(state.sign().to_string()));
                    }
                    _ => confirm(&mut node, &mut links, state, &mut name)?,
                }
                break;
            };
            let class = CharacterClass::of(ch);

            match state {
                ParserState::Type
                | ParserState::Id
                | ParserState::Class
                | ParserState::PseudoClass
                | ParserState::PseudoElement => {
                    if class.is_name() {
                        if class == CharacterClass::Digit && name.is_empty() {
                            if let Some(kind) = state.digit_sensitive_kind() {
                                return Err(SyntaxError::LeadingDigit(kind));
                            }
                        }
                        name.push(ch);
                        self.pos += 1;
                        continue;
                    }
                    match class {
                        CharacterClass::PseudoClassSign => {
                            if state == ParserState::PseudoClass && name.is_empty() {
                                // The second sign of `::`: the component is a
                                // pseudo-element, not an empty pseudo-class.
                                self.pos += 1;
                                state = ParserState::PseudoElement;
                            } else if state == ParserState::PseudoElement && name.is_empty() {
                                // `:::`
                                return Err(SyntaxError::UnexpectedPseudoSign);
                            } else {
                                confirm(&mut node, &mut links, state, &mut name)?;
                                self.pos += 1;
                                state = ParserState::PseudoClass;
                            }
                        }
                        CharacterClass::IdSign => {
                            confirm(&mut node, &mut links, state, &mut name)?;
                            self.pos += 1;
                            state = ParserState::Id;
                        }
                        CharacterClass::ClassSign => {
                            confirm(&mut node, &mut links, state, &mut name)?;
                            self.pos += 1;
                            state = ParserState::Class;
                        }
                        CharacterClass::DescendantSign => {
                            confirm(&mut node, &mut links, state, &mut name)?;
                            self.pos += 1;
                            state = ParserState::Descendant;
                        }
                        CharacterClass::ChildSign => {
                            confirm(&mut node, &mut links, state, &mut name)?;
                            self.pos += 1;
                            state = ParserState::Child;
                        }
                        CharacterClass::UniversalSign => {
                            if state == ParserState::Type && name.is_empty() {
                                name.push(ch);
                                self.pos += 1;
                            } else {
                                return Err(SyntaxError::UnclassifiedCharacter {
                                    ch,
                                    pos: self.pos,
                                });
                            }
                        }
                        _ => {
                            return Err(SyntaxError::UnclassifiedCharacter { ch, pos: self.pos });
                        }
                    }
                }
                ParserState::Descendant => match class {
                    // Whitespace runs collapse into a single descendant step.
                    CharacterClass::DescendantSign => {
                        self.pos += 1;
                    }
                    // A child sign adjacent to whitespace wins over it.
                    CharacterClass::ChildSign => {
                        self.pos += 1;
                        state = ParserState::Child;
                    }
                    _ => {
                        let mut level = mem::take(&mut node);
                        attach_pseudo_links(&mut level, mem::take(&mut links));
                        finished.push((level, Combinator::Descendant));
                        state = self.dispatch()?;
                    }
                },
                ParserState::Child => match class {
                    CharacterClass::DescendantSign => {
                        self.pos += 1;
                    }
                    CharacterClass::ChildSign => {
                        return Err(SyntaxError::DoubleChildCombinator);
                    }
                    _ => {
                        let mut level = mem::take(&mut node);
                        attach_pseudo_links(&mut level, mem::take(&mut links));
                        finished.push((level, Combinator::Child));
                        state = self.dispatch()?;
                    }
                },
            }
        }

        attach_pseudo_links(&mut node, links);

        // Fold the closed levels back into a right-nested chain.
        let mut current = node;
        for (mut level, combinator) in finished.into_iter().rev() {
            match combinator {
                Combinator::Child => level.combinator_child = Some(Box::new(current)),
                Combinator::Descendant => level.combinator_descendant = Some(Box::new(current)),
            }
            current = level;
        }
        Ok(current)
    }

    /// Picks the state for the component starting at the current position,
    /// consuming its introducing sign if it has one.
    fn dispatch(&mut self) -> Result<ParserState> {
        let Some(ch) = self.peek() else {
            // An empty entry, or nothing after a combinator.
            return Err(SyntaxError::TrailingCharacter(
                self.input.iter().collect(),
            ));
        };
        match CharacterClass::of(ch) {
            CharacterClass::UppercaseLetter
            | CharacterClass::LowercaseLetter
            | CharacterClass::UniversalSign => Ok(ParserState::Type),
            CharacterClass::Digit => Err(SyntaxError::LeadingDigit("tag")),
            CharacterClass::IdSign => {
                self.pos += 1;
                Ok(ParserState::Id)
            }
            CharacterClass::ClassSign => {
                self.pos += 1;
                Ok(ParserState::Class)
            }
            CharacterClass::PseudoClassSign => {
                self.pos += 1;
                Ok(ParserState::PseudoClass)
            }
            CharacterClass::ChildSign | CharacterClass::DescendantSign => Err(
                SyntaxError::TrailingCharacter(ch.to_string()),
            ),
            CharacterClass::DashSign | CharacterClass::Unclassified => {
                Err(SyntaxError::UnclassifiedCharacter { ch, pos: self.pos })
            }
        }
    }
}

/// Closes the pending name and records the component on the level node,
/// incrementing the weight bucket the component belongs to.
fn confirm(
    node: &mut NodeBuilder,
    links: &mut Vec<PseudoLink>,
    state: ParserState,
    name: &mut String,
) -> Result<()> {
    if name.is_empty() {
        return Err(SyntaxError::TrailingCharacter(state.sign().to_string()));
    }
    if name.trim().len() != name.len() {
        return Err(SyntaxError::TrailingCharacter(name.clone()));
    }
    let name = mem::take(name);
    match state {
        ParserState::Type => {
            node.tag_name = Some(name);
            node.weight.2 += 1;
        }
        ParserState::Id => {
            node.id_name = Some(name);
            node.weight.0 += 1;
        }
        ParserState::Class => {
            node.class_names.push(name);
            node.weight.1 += 1;
        }
        ParserState::PseudoClass => {
            links.push(PseudoLink::Class(name));
            node.weight.1 += 1;
        }
        ParserState::PseudoElement => {
            links.push(PseudoLink::Element(name));
            node.weight.2 += 1;
        }
        // Combinator states never accumulate a name.
        ParserState::Descendant | ParserState::Child => unreachable!(),
    }
    Ok(())
}

/// Assembles the confirmed pseudo components into their nested shape: the
/// first one sits on the level node, every further one hangs off the
/// previous via `pseudo_class.nested` or `pseudo_element.children`.
fn attach_pseudo_links(node: &mut NodeBuilder, links: Vec<PseudoLink>) {
    let mut iter = links.into_iter();
    if let Some(first) = iter.next() {
        place_link(first, iter, &mut node.pseudo_class, &mut node.pseudo_element);
    }
}

fn place_link(
    link: PseudoLink,
    mut rest: std::vec::IntoIter<PseudoLink>,
    pseudo_class_slot: &mut Option<PseudoClassSelector>,
    pseudo_element_slot: &mut Option<PseudoElementSelector>,
) {
    let follower = match rest.next() {
        Some(next) => {
            let mut sub = SimpleSelectorNode::default();
            place_link(next, rest, &mut sub.pseudo_class, &mut sub.pseudo_element);
            Some(Box::new(sub))
        }
        None => None,
    };
    match link {
        PseudoLink::Class(name) => {
            *pseudo_class_slot = Some(PseudoClassSelector {
                name,
                nested: follower,
            });
        }
        PseudoLink::Element(name) => {
            *pseudo_element_slot = Some(PseudoElementSelector {
                name,
                children: follower,
            });
        }
    }
}
