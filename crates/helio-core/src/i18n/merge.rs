//! Deep merge of partial translation overrides onto a complete base tree.

use std::borrow::Cow;

use super::TextNode;

/// Merge `overrides` onto `base`.
///
/// Absent or empty overrides borrow `base` untouched. Otherwise groups merge key by
/// key so untouched siblings survive, leaves (texts and templates) replace wholesale,
/// a leaf never replaces a group (or the reverse), and keys the base does not know
/// are carried through. Neither input is mutated.
#[must_use]
pub fn merge_texts<'a>(base: &'a TextNode, overrides: Option<&TextNode>) -> Cow<'a, TextNode> {
    match overrides {
        None => Cow::Borrowed(base),
        Some(overrides) if overrides.is_empty_group() => Cow::Borrowed(base),
        Some(overrides) => Cow::Owned(merge_node(base, overrides)),
    }
}

fn merge_node(base: &TextNode, overrides: &TextNode) -> TextNode {
    match (base, overrides) {
        (TextNode::Group(base_children), TextNode::Group(override_children)) => {
            let mut merged = base_children.clone();
            for (key, over) in override_children {
                let next = match base_children.get(key) {
                    Some(existing) => merge_node(existing, over),
                    None => over.clone(),
                };
                merged.insert(key.clone(), next);
            }
            TextNode::Group(merged)
        }
        (TextNode::Group(_), _) | (_, TextNode::Group(_)) => base.clone(),
        (_, leaf) => leaf.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::tree::Template;

    fn base() -> TextNode {
        TextNode::group([
            (
                "a",
                TextNode::group([("x", TextNode::text("1")), ("y", TextNode::text("2"))]),
            ),
            ("b", TextNode::text("3")),
            ("trees", TextNode::Template(Template::plural("{count} tree", "{count} trees"))),
        ])
    }

    #[test]
    fn missing_or_empty_overrides_borrow_base() {
        let base = base();
        assert!(matches!(merge_texts(&base, None), Cow::Borrowed(b) if std::ptr::eq(b, &base)));
        let empty = TextNode::default();
        assert!(matches!(merge_texts(&base, Some(&empty)), Cow::Borrowed(_)));
    }

    #[test]
    fn nested_override_keeps_siblings() {
        let base = base();
        let overrides = TextNode::group([("a", TextNode::group([("x", TextNode::text("9"))]))]);
        let merged = merge_texts(&base, Some(&overrides));
        assert_eq!(merged.text_at("a.x"), Some("9"));
        assert_eq!(merged.text_at("a.y"), Some("2"));
        assert_eq!(merged.text_at("b"), Some("3"));
        assert_eq!(base.text_at("a.x"), Some("1"));
    }

    #[test]
    fn templates_are_replaced_whole() {
        let base = base();
        let overrides = TextNode::group([("trees", TextNode::Template(Template::new("{count} Bäume")))]);
        let merged = merge_texts(&base, Some(&overrides));
        assert_eq!(
            merged.get("trees"),
            Some(&TextNode::Template(Template::new("{count} Bäume")))
        );
    }

    #[test]
    fn shape_mismatches_keep_base_and_unknown_keys_pass_through() {
        let base = base();
        let overrides = TextNode::group([
            ("a", TextNode::text("flat")),
            ("b", TextNode::group([("nested", TextNode::text("x"))])),
            ("extra", TextNode::text("kept")),
        ]);
        let merged = merge_texts(&base, Some(&overrides));
        assert_eq!(merged.text_at("a.y"), Some("2"));
        assert_eq!(merged.text_at("b"), Some("3"));
        assert_eq!(merged.text_at("extra"), Some("kept"));
    }
}
