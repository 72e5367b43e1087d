//! Single-pass placeholder filling.

use regex::{Captures, RegexBuilder};

use super::Substitutions;

/// Fill `template` with `subs` in one left-to-right scan.
///
/// Keys are literal text. At each position the longest key that matches is
/// replaced and the scan continues after it, so replacement values are never
/// scanned again and a key that is a substring of another key never splits
/// it. The order of `subs` does not affect the result.
pub fn fill(template: &str, subs: &Substitutions) -> Result<String, regex::Error> {
    let mut keys: Vec<&str> = subs
        .keys()
        .filter(|key| !key.is_empty() && template.contains(*key))
        .collect();
    if keys.is_empty() {
        return Ok(template.to_string());
    }

    // Leftmost-first alternation: longer keys must come first to win.
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    keys.dedup();

    let pattern = keys
        .iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");
    let re = RegexBuilder::new(&pattern).build()?;

    let filled = re.replace_all(template, |caps: &Captures<'_>| {
        subs.get(&caps[0]).unwrap_or_default().to_string()
    });
    Ok(filled.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subs(pairs: &[(&str, &str)]) -> Substitutions {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_fill_basic() {
        let out = fill("const NAME = VAL;", &subs(&[("NAME", "MAX"), ("VAL", "8")])).unwrap();
        assert_eq!(out, "const MAX = 8;");
    }

    #[test]
    fn test_fill_without_keys_is_identity() {
        let template = "no placeholders here";
        assert_eq!(fill(template, &Substitutions::new()).unwrap(), template);
        assert_eq!(fill(template, &subs(&[("absent", "x")])).unwrap(), template);
    }

    #[test]
    fn test_values_naming_other_keys_are_not_resubstituted() {
        let out = fill("A-B", &subs(&[("A", "B"), ("B", "A")])).unwrap();
        assert_eq!(out, "B-A");

        let out = fill("x y", &subs(&[("x", "y_x"), ("y", "Z")])).unwrap();
        assert_eq!(out, "y_x Z");
    }

    #[test]
    fn test_longest_key_wins_regardless_of_order() {
        let template = "param_name name";
        let forward = subs(&[("name", "N"), ("param_name", "P")]);
        let backward = subs(&[("param_name", "P"), ("name", "N")]);
        assert_eq!(fill(template, &forward).unwrap(), "P N");
        assert_eq!(fill(template, &backward).unwrap(), "P N");
    }

    #[test]
    fn test_keys_are_literal_text() {
        let out = fill("a.b axb (c) c", &subs(&[("a.b", "1"), ("(c)", "2")])).unwrap();
        assert_eq!(out, "1 axb 2 c");
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let out = fill("T T T", &subs(&[("T", "int")])).unwrap();
        assert_eq!(out, "int int int");
    }
}
