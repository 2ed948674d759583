//! Thin selection layer over the parsed document tree.
//!
//! Selector paths are whitespace-separated element names, each step
//! matching *descendants* of the previous step's matches (CSS descendant
//! combinator semantics, element names only). Results come back in
//! document order without duplicates.

use roxmltree::Node;

/// All elements under `scope` (exclusive) matching `path`.
pub(crate) fn select_all<'a, 'input>(
    scope: Node<'a, 'input>,
    path: &str,
) -> Vec<Node<'a, 'input>> {
    let mut steps = path.split_whitespace().peekable();
    if steps.peek().is_none() {
        return Vec::new();
    }

    let mut current = vec![scope];
    for step in steps {
        let mut next: Vec<Node<'a, 'input>> = Vec::new();
        for node in &current {
            for descendant in node.descendants().skip(1) {
                if descendant.is_element()
                    && descendant.tag_name().name() == step
                    && !next.contains(&descendant)
                {
                    next.push(descendant);
                }
            }
        }
        if next.is_empty() {
            return Vec::new();
        }
        current = next;
    }
    current
}

/// First element under `scope` matching `path`, in document order.
pub(crate) fn select_first<'a, 'input>(
    scope: Node<'a, 'input>,
    path: &str,
) -> Option<Node<'a, 'input>> {
    select_all(scope, path).into_iter().next()
}

/// Trimmed concatenation of every text node under `node`.
pub(crate) fn text_content(node: Node<'_, '_>) -> String {
    let mut out = String::new();
    for descendant in node.descendants() {
        if descendant.is_text() {
            if let Some(text) = descendant.text() {
                out.push_str(text);
            }
        }
    }
    out.trim().to_string()
}
