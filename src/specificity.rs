use crate::parser::NodeBuilder;
use crate::selector::{ParsedSelector, SimpleSelectorNode, Specificity};

/// Finalizes one parsed selector entry: sums the per-level weight triples
/// along the combinator chain (the child link wins over the descendant link
/// when following the chain) and converts the parse-time tree into the
/// public, weight-free form.
pub(crate) fn reduce(source_text: &str, builder: NodeBuilder) -> ParsedSelector {
    let specificity = accumulate(&builder, (0, 0, 0));
    ParsedSelector {
        source_text: source_text.to_string(),
        specificity,
        tree: strip(builder),
    }
}

fn accumulate(node: &NodeBuilder, acc: Specificity) -> Specificity {
    let acc = (
        acc.0 + node.weight.0,
        acc.1 + node.weight.1,
        acc.2 + node.weight.2,
    );
    if let Some(child) = &node.combinator_child {
        accumulate(child, acc)
    } else if let Some(descendant) = &node.combinator_descendant {
        accumulate(descendant, acc)
    } else {
        acc
    }
}

fn strip(node: NodeBuilder) -> SimpleSelectorNode {
    SimpleSelectorNode {
        tag_name: node.tag_name,
        id_name: node.id_name,
        class_names: node.class_names,
        pseudo_class: node.pseudo_class,
        pseudo_element: node.pseudo_element,
        combinator_child: node.combinator_child.map(|child| Box::new(strip(*child))),
        combinator_descendant: node
            .combinator_descendant
            .map(|descendant| Box::new(strip(*descendant))),
    }
}
