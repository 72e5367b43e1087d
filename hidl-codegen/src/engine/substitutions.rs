//! Ordered placeholder → replacement lists.

/// An ordered list of `(placeholder, replacement)` pairs.
///
/// This is a list rather than a map: facts are appended in the order they
/// are computed and composite facts are built by concatenating lists. When a
/// key appears twice the first entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    entries: Vec<(String, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Append every entry of `other`, keeping its order.
    pub fn extend(&mut self, other: Substitutions) {
        self.entries.extend(other.entries);
    }

    /// The replacement for `key` (first match).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<const N: usize> From<[(&str, String); N]> for Substitutions {
    fn from(entries: [(&str, String); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_wins() {
        let subs = Substitutions::new()
            .with("name", "first")
            .with("name", "second");
        assert_eq!(subs.get("name"), Some("first"));
        assert_eq!(subs.len(), 2);
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut subs = Substitutions::from([("a", "1".to_string())]);
        subs.extend(Substitutions::from([
            ("b", "2".to_string()),
            ("c", "3".to_string()),
        ]));
        let keys: Vec<&str> = subs.keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }
}
