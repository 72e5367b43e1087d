//! Annotations attached to interfaces, functions and fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Literal;

/// One value in an annotation.
///
/// The literal may be missing when the source wrote a key without a value;
/// consumers report that as a malformed annotation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationValue {
    pub literal: Option<Literal>,
}

impl AnnotationValue {
    pub fn new(literal: Literal) -> Self {
        Self {
            literal: Some(literal),
        }
    }

    /// A value whose literal is missing.
    pub fn missing() -> Self {
        Self { literal: None }
    }
}

impl From<Literal> for AnnotationValue {
    fn from(literal: Literal) -> Self {
        Self::new(literal)
    }
}

/// A single annotation, e.g. `@callflow(next={"open"})` or `@entry`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    /// Source line, used to attribute diagnostics.
    #[serde(default)]
    pub line: u32,
    /// Unnamed values, in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<AnnotationValue>,
    /// Named entries (`key=value` or `key={v1, v2}`), in source order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub entries: IndexMap<String, Vec<AnnotationValue>>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Append an unnamed value.
    pub fn value(mut self, value: impl Into<AnnotationValue>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Set a named entry.
    pub fn entry(mut self, key: impl Into<String>, values: Vec<AnnotationValue>) -> Self {
        self.entries.insert(key.into(), values);
        self
    }

    /// Check if a named entry exists.
    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Values of a named entry.
    pub fn get(&self, key: &str) -> Option<&[AnnotationValue]> {
        self.entries.get(key).map(Vec::as_slice)
    }
}

/// An ordered list of annotations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(Vec<Annotation>);

impl Annotations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, annotation: Annotation) {
        self.0.push(annotation);
    }

    /// First annotation with the given name.
    pub fn get(&self, name: &str) -> Option<&Annotation> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Annotation>> for Annotations {
    fn from(annotations: Vec<Annotation>) -> Self {
        Self(annotations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_first_match() {
        let annotations = Annotations::from(vec![
            Annotation::new("next_calls").at_line(3),
            Annotation::new("entry"),
            Annotation::new("next_calls").at_line(9),
        ]);
        assert_eq!(annotations.get("next_calls").map(|a| a.line), Some(3));
        assert!(annotations.has("entry"));
        assert!(!annotations.has("exit"));
    }

    #[test]
    fn test_named_entries() {
        let annotation = Annotation::new("range").entry(
            "normal",
            vec![Literal::number("1").into(), AnnotationValue::missing()],
        );
        assert!(annotation.has_key("normal"));
        assert_eq!(annotation.get("normal").map(<[_]>::len), Some(2));
        assert!(annotation.get("extreme").is_none());
    }

    #[test]
    fn test_missing_literal_from_json() {
        let json = r#"{"name": "hal_type", "line": 4, "values": [null, {"string": "camera"}]}"#;
        let annotation: Annotation = serde_json::from_str(json).expect("valid annotation json");
        assert_eq!(annotation.values[0], AnnotationValue::missing());
        assert_eq!(
            annotation.values[1],
            AnnotationValue::new(Literal::string("camera"))
        );
    }
}
