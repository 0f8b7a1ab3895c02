//! Translation tree nodes and dotted-path lookups.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::Language;
use crate::format::format_number;

/// One node of a translation dictionary.
///
/// JSON strings become [`TextNode::Text`], objects made only of `@other`/`@one`
/// keys become [`TextNode::Template`], and every other object is a [`TextNode::Group`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextNode {
    /// Plain localized string.
    Text(String),
    /// Interpolated (optionally pluralised) phrase; always replaced as a whole.
    Template(Template),
    /// Named sub-fields.
    Group(BTreeMap<String, TextNode>),
}

impl Default for TextNode {
    fn default() -> Self {
        Self::Group(BTreeMap::new())
    }
}

impl TextNode {
    /// Build a group node from `(key, node)` pairs.
    #[must_use]
    pub fn group<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Group(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a text leaf.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// True for a group with no children.
    #[must_use]
    pub fn is_empty_group(&self) -> bool {
        matches!(self, Self::Group(children) if children.is_empty())
    }

    /// Walk a dotted path (`legend.capacity`).
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Self> {
        let mut node = self;
        for segment in path.split('.') {
            match node {
                Self::Group(children) => node = children.get(segment)?,
                Self::Text(_) | Self::Template(_) => return None,
            }
        }
        Some(node)
    }

    /// Text leaf at `path`, if any.
    #[must_use]
    pub fn text_at(&self, path: &str) -> Option<&str> {
        match self.get(path)? {
            Self::Text(value) => Some(value),
            Self::Template(_) | Self::Group(_) => None,
        }
    }

    /// Text leaf at `path` or the caller default.
    #[must_use]
    pub fn text_or(&self, path: &str, default: &str) -> String {
        self.text_at(path).unwrap_or(default).to_string()
    }

    /// Render the leaf at `path`; templates are interpolated, plain text returned as-is.
    #[must_use]
    pub fn render(&self, path: &str, args: &[(&str, f64)], language: Language) -> Option<String> {
        match self.get(path)? {
            Self::Text(value) => Some(value.clone()),
            Self::Template(template) => Some(template.render(args, language)),
            Self::Group(_) => None,
        }
    }

    /// Every leaf path in the tree, sorted.
    #[must_use]
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_paths(self, String::new(), &mut paths);
        paths
    }
}

fn collect_paths(node: &TextNode, prefix: String, out: &mut Vec<String>) {
    match node {
        TextNode::Group(children) => {
            for (key, child) in children {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_paths(child, path, out);
            }
        }
        TextNode::Text(_) | TextNode::Template(_) => out.push(prefix),
    }
}

/// Phrase with `{name}` placeholders and an optional singular form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Template {
    /// Singular form used when `count == 1`.
    #[serde(rename = "@one", default)]
    pub one: Option<String>,
    /// General form.
    #[serde(rename = "@other")]
    pub other: String,
}

impl Template {
    /// Template without a singular variant.
    #[must_use]
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            one: None,
            other: other.into(),
        }
    }

    /// Template with singular and plural variants.
    #[must_use]
    pub fn plural(one: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            one: Some(one.into()),
            other: other.into(),
        }
    }

    /// Substitute `{name}` placeholders with locale-formatted numbers.
    ///
    /// Unknown placeholders are left untouched.
    #[must_use]
    pub fn render(&self, args: &[(&str, f64)], language: Language) -> String {
        let singular = args
            .iter()
            .any(|(name, value)| *name == "count" && (*value - 1.0).abs() < f64::EPSILON);
        let pattern = match (&self.one, singular) {
            (Some(one), true) => one.as_str(),
            _ => self.other.as_str(),
        };
        args.iter().fold(pattern.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), &format_number(*value, language))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> anyhow::Result<TextNode> {
        Ok(serde_json::from_str(
            r#"{
                "title": "Speicher",
                "legend": { "capacity": "Kapazität", "power": "Leistung" },
                "trees": { "@one": "{count} Baum", "@other": "{count} Bäume ≈ {kg} kg" }
            }"#,
        )?)
    }

    #[test]
    fn json_objects_map_to_groups_and_templates() -> anyhow::Result<()> {
        let tree = sample()?;
        assert!(matches!(tree.get("legend"), Some(TextNode::Group(_))));
        assert!(matches!(tree.get("trees"), Some(TextNode::Template(_))));
        assert_eq!(tree.text_at("legend.power"), Some("Leistung"));
        Ok(())
    }

    #[test]
    fn lookups_fall_back_to_defaults() -> anyhow::Result<()> {
        let tree = sample()?;
        assert_eq!(tree.text_or("legend.missing", "Fallback"), "Fallback");
        assert_eq!(tree.text_or("title.deeper", "Fallback"), "Fallback");
        assert!(tree.text_at("legend").is_none());
        Ok(())
    }

    #[test]
    fn templates_pick_plural_form_and_format_numbers() -> anyhow::Result<()> {
        let tree = sample()?;
        assert_eq!(
            tree.render("trees", &[("count", 1.0)], Language::De).as_deref(),
            Some("1 Baum")
        );
        assert_eq!(
            tree.render("trees", &[("count", 40.0), ("kg", 1234.5)], Language::De)
                .as_deref(),
            Some("40 Bäume ≈ 1.234,5 kg")
        );
        assert_eq!(
            tree.render("trees", &[("count", 40.0), ("kg", 1234.5)], Language::En)
                .as_deref(),
            Some("40 Bäume ≈ 1,234.5 kg")
        );
        Ok(())
    }

    #[test]
    fn leaf_paths_are_dotted_and_sorted() -> anyhow::Result<()> {
        let tree = sample()?;
        assert_eq!(
            tree.leaf_paths(),
            vec!["legend.capacity", "legend.power", "title", "trees"]
        );
        Ok(())
    }
}
