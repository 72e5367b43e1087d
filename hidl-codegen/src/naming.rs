//! Small text transformations shared by the generators.

/// Upper-case every character, inserting no separators
/// (e.g. "doThing" -> "DOTHING").
pub fn to_dispatch_token(name: &str) -> String {
    name.to_ascii_uppercase()
}

/// Flatten a multi-line fragment onto one line.
pub fn make_inline(s: &str) -> String {
    s.replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dispatch_token() {
        assert_eq!(to_dispatch_token("doThing"), "DOTHING");
        assert_eq!(to_dispatch_token("set_power_2"), "SET_POWER_2");
        assert_eq!(to_dispatch_token(""), "");
    }

    #[test]
    fn test_make_inline() {
        assert_eq!(make_inline("a\nb\n"), "a b ");
        assert_eq!(make_inline("flat"), "flat");
    }
}
