use std::fmt;

use crate::utils::PrintableTree;

/// One simple selector together with its combinator successor, e.g. the
/// `div.active` level of `div.active > p`.
///
/// - https://www.w3.org/TR/selectors-3/#simple-selectors
/// - https://www.w3.org/TR/selectors-3/#combinators
///
/// At most one of `combinator_child` / `combinator_descendant` is set per
/// node; each node owns its successor exclusively, so the structure is a
/// chain, never a graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleSelectorNode {
    pub tag_name: Option<String>,
    pub id_name: Option<String>,
    /// Class names in source order.
    pub class_names: Vec<String>,
    pub pseudo_class: Option<PseudoClassSelector>,
    pub pseudo_element: Option<PseudoElementSelector>,
    /// Set when this node is followed by a `>` combinator.
    pub combinator_child: Option<Box<SimpleSelectorNode>>,
    /// Set when this node is followed by a whitespace combinator.
    pub combinator_descendant: Option<Box<SimpleSelectorNode>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PseudoClassSelector {
    pub name: String,
    /// A further pseudo component chained directly after this one, as in
    /// `:hover:focus`.
    pub nested: Option<Box<SimpleSelectorNode>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PseudoElementSelector {
    pub name: String,
    /// A pseudo-class scoped to this pseudo-element, as in `::before:hover`.
    pub children: Option<Box<SimpleSelectorNode>>,
}

/// (id count, class and pseudo-class count, type and pseudo-element count).
///
/// - https://www.w3.org/TR/selectors-3/#specificity
pub type Specificity = (u32, u32, u32);

/// The result for one comma-separated selector entry. Constructed once at
/// the end of parsing and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedSelector {
    pub source_text: String,
    pub specificity: Specificity,
    pub tree: SimpleSelectorNode,
}

/// Renders the components of this level only; combinator successors are
/// covered by the `ParsedSelector` tree dump.
impl fmt::Display for SimpleSelectorNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(tag) = &self.tag_name {
            write!(f, "{}", tag)?;
        }
        if let Some(id) = &self.id_name {
            write!(f, "#{}", id)?;
        }
        for class in &self.class_names {
            write!(f, ".{}", class)?;
        }
        if let Some(pseudo_class) = &self.pseudo_class {
            write!(f, ":{}", pseudo_class.name)?;
            if let Some(nested) = &pseudo_class.nested {
                write!(f, "{}", nested)?;
            }
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{}", pseudo_element.name)?;
            if let Some(children) = &pseudo_element.children {
                write!(f, "{}", children)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ParsedSelector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} {}", self.specificity, self.tree)?;
        let mut current = &self.tree;
        let mut depth = 0;
        while let Some((label, next)) = follow(current) {
            depth += 1;
            write!(f, "\n{}({}) {}", "  ".repeat(depth), label, next)?;
            current = next;
        }
        Ok(())
    }
}

impl PrintableTree for ParsedSelector {}

fn follow(node: &SimpleSelectorNode) -> Option<(&'static str, &SimpleSelectorNode)> {
    if let Some(child) = node.combinator_child.as_deref() {
        Some(("child", child))
    } else {
        node.combinator_descendant
            .as_deref()
            .map(|descendant| ("descendant", descendant))
    }
}
