//! Declarative visibility rules.
//!
//! The source format attached an ad hoc closure to each conditional property
//! (`hidden: content => !content.showIcon`). Closures cannot be inspected, so
//! referenced keys could not be validated and rules could not be compared or
//! serialized. [`VisibilityRule`] replaces them with a small predicate AST
//! whose referenced keys are statically enumerable.
//!
//! A rule decides when a property is **hidden**. Evaluation reads the *raw*
//! content object, never resolved values, and fails open: a rule that cannot
//! be decided (its referenced key is absent) leaves the property visible. A
//! cosmetic-visibility bug must never take down resolution.

use serde::Serialize;
use serde_json::{Map, Value};

/// Predicate over a content object deciding when a property is hidden.
///
/// # Example
///
/// ```
/// use blueprint_core::VisibilityRule;
/// use serde_json::{json, Map};
///
/// // hidden: content => !content.showIcon
/// let rule = VisibilityRule::falsy("showIcon");
///
/// let mut content = Map::new();
/// content.insert("showIcon".into(), json!(false));
/// assert!(rule.hidden(&content));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum VisibilityRule {
    /// Hidden when the referenced value is falsy (`false`, `0`, `""`, `null`).
    Falsy(String),
    /// Hidden when the referenced value is truthy.
    Truthy(String),
    /// Hidden when the referenced value equals the given value.
    Eq(String, Value),
    /// Hidden when the referenced value differs from the given value.
    Ne(String, Value),
    /// Hidden when the referenced value is one of the given values.
    OneOf(String, Vec<Value>),
    /// Hidden when every sub-rule reports hidden.
    AllOf(Vec<VisibilityRule>),
    /// Hidden when any sub-rule reports hidden.
    AnyOf(Vec<VisibilityRule>),
}

impl VisibilityRule {
    /// `hidden: content => !content.key`
    pub fn falsy(key: impl Into<String>) -> Self {
        VisibilityRule::Falsy(key.into())
    }

    /// `hidden: content => content.key`
    pub fn truthy(key: impl Into<String>) -> Self {
        VisibilityRule::Truthy(key.into())
    }

    /// `hidden: content => content.key === value`
    pub fn eq(key: impl Into<String>, value: impl Into<Value>) -> Self {
        VisibilityRule::Eq(key.into(), value.into())
    }

    /// `hidden: content => content.key !== value`
    pub fn ne(key: impl Into<String>, value: impl Into<Value>) -> Self {
        VisibilityRule::Ne(key.into(), value.into())
    }

    /// `hidden: content => values.includes(content.key)`
    pub fn one_of(key: impl Into<String>, values: impl IntoIterator<Item = Value>) -> Self {
        VisibilityRule::OneOf(key.into(), values.into_iter().collect())
    }

    /// Conjunction of sub-rules.
    pub fn all_of(rules: impl IntoIterator<Item = VisibilityRule>) -> Self {
        VisibilityRule::AllOf(rules.into_iter().collect())
    }

    /// Disjunction of sub-rules.
    pub fn any_of(rules: impl IntoIterator<Item = VisibilityRule>) -> Self {
        VisibilityRule::AnyOf(rules.into_iter().collect())
    }

    /// Every content key this rule reads, in rule order, with duplicates.
    pub fn referenced_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        self.collect_keys(&mut keys);
        keys
    }

    fn collect_keys<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            VisibilityRule::Falsy(key)
            | VisibilityRule::Truthy(key)
            | VisibilityRule::Eq(key, _)
            | VisibilityRule::Ne(key, _)
            | VisibilityRule::OneOf(key, _) => out.push(key),
            VisibilityRule::AllOf(rules) | VisibilityRule::AnyOf(rules) => {
                for rule in rules {
                    rule.collect_keys(out);
                }
            }
        }
    }

    /// Evaluate the rule against a raw content object.
    ///
    /// Returns `true` when the property must be hidden. A leaf whose
    /// referenced key is absent (or null) evaluates to *not hidden*.
    pub fn hidden(&self, content: &Map<String, Value>) -> bool {
        match self {
            VisibilityRule::Falsy(key) => match lookup(content, key) {
                Some(value) => !is_truthy(value),
                None => fail_open(key),
            },
            VisibilityRule::Truthy(key) => match lookup(content, key) {
                Some(value) => is_truthy(value),
                None => fail_open(key),
            },
            VisibilityRule::Eq(key, expected) => match lookup(content, key) {
                Some(value) => values_equal(value, expected),
                None => fail_open(key),
            },
            VisibilityRule::Ne(key, expected) => match lookup(content, key) {
                Some(value) => !values_equal(value, expected),
                None => fail_open(key),
            },
            VisibilityRule::OneOf(key, values) => match lookup(content, key) {
                Some(value) => values.iter().any(|v| values_equal(value, v)),
                None => fail_open(key),
            },
            VisibilityRule::AllOf(rules) => rules.iter().all(|rule| rule.hidden(content)),
            VisibilityRule::AnyOf(rules) => rules.iter().any(|rule| rule.hidden(content)),
        }
    }
}

fn lookup<'a>(content: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    content.get(key).filter(|value| !value.is_null())
}

// Strict equality, except that integer and float representations of the
// same number compare equal (serde_json keeps them distinct).
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

fn fail_open(key: &str) -> bool {
    tracing::debug!(key, "visibility rule references absent key, staying visible");
    false
}

/// Truthiness as the host runtime sees it: everything except `null`, `false`,
/// `0`, and `""` is truthy. Empty arrays and objects are truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn falsy_hides_on_false_zero_and_empty_string() {
        let rule = VisibilityRule::falsy("x");
        assert!(rule.hidden(&content(&[("x", json!(false))])));
        assert!(rule.hidden(&content(&[("x", json!(0))])));
        assert!(rule.hidden(&content(&[("x", json!(""))])));
        assert!(!rule.hidden(&content(&[("x", json!(true))])));
        assert!(!rule.hidden(&content(&[("x", json!("left"))])));
    }

    #[test]
    fn absent_key_fails_open() {
        assert!(!VisibilityRule::falsy("missing").hidden(&Map::new()));
        assert!(!VisibilityRule::ne("missing", "single").hidden(&Map::new()));
        assert!(!VisibilityRule::eq("missing", 0).hidden(&Map::new()));
    }

    #[test]
    fn null_value_counts_as_absent() {
        let rule = VisibilityRule::falsy("x");
        assert!(!rule.hidden(&content(&[("x", Value::Null)])));
    }

    #[test]
    fn ne_hides_on_mismatch() {
        // Accordion: collapsible hidden when type !== "single"
        let rule = VisibilityRule::ne("type", "single");
        assert!(rule.hidden(&content(&[("type", json!("multiple"))])));
        assert!(!rule.hidden(&content(&[("type", json!("single"))])));
    }

    #[test]
    fn one_of_matches_any_listed_value() {
        // Button: showIcon hidden for the icon and loading variants
        let rule = VisibilityRule::one_of("variant", [json!("icon"), json!("loading")]);
        assert!(rule.hidden(&content(&[("variant", json!("icon"))])));
        assert!(!rule.hidden(&content(&[("variant", json!("default"))])));
    }

    #[test]
    fn any_of_is_a_disjunction() {
        // Breadcrumb: hidden when !maxItems || maxItems === 0
        let rule = VisibilityRule::any_of([
            VisibilityRule::falsy("maxItems"),
            VisibilityRule::eq("maxItems", 0),
        ]);
        assert!(rule.hidden(&content(&[("maxItems", json!(0))])));
        assert!(!rule.hidden(&content(&[("maxItems", json!(3))])));
    }

    #[test]
    fn all_of_requires_every_branch() {
        // Button: iconName hidden when !showIcon && variant !== "icon"
        let rule = VisibilityRule::all_of([
            VisibilityRule::falsy("showIcon"),
            VisibilityRule::ne("variant", "icon"),
        ]);
        assert!(rule.hidden(&content(&[
            ("showIcon", json!(false)),
            ("variant", json!("default")),
        ])));
        assert!(!rule.hidden(&content(&[
            ("showIcon", json!(false)),
            ("variant", json!("icon")),
        ])));
        // absent branch fails open, so the conjunction cannot hide
        assert!(!rule.hidden(&content(&[("variant", json!("default"))])));
    }

    #[test]
    fn referenced_keys_walks_nested_rules() {
        let rule = VisibilityRule::all_of([
            VisibilityRule::falsy("showIcon"),
            VisibilityRule::any_of([
                VisibilityRule::ne("variant", "icon"),
                VisibilityRule::truthy("loading"),
            ]),
        ]);
        assert_eq!(rule.referenced_keys(), ["showIcon", "variant", "loading"]);
    }

    #[test]
    fn numeric_equality_ignores_representation() {
        let rule = VisibilityRule::eq("maxItems", 0);
        assert!(rule.hidden(&content(&[("maxItems", json!(0.0))])));
    }
}
