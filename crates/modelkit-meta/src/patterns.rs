//! Built-in regex patterns for the pattern-family constraints.

/// Case-insensitive email address pattern (ASCII local part, DNS labels).
pub const EMAIL: &str = r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*$";

/// http/https URL pattern.
pub const URL: &str = r"(?i)^https?://[^\s/$.?#][^\s]*$";

/// Password complexity checks, applied together: lowercase, uppercase,
/// digit, special character, and minimum length. Split into separate
/// patterns because the regex engine has no lookahead.
pub const PASSWORD_CHECKS: &[&str] = &["[a-z]", "[A-Z]", r"\d", r"[^0-9A-Za-z\s]", ".{8,}"];

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    #[test]
    fn email_pattern_matches_plausible_addresses() {
        let re = Regex::new(EMAIL).unwrap();
        assert!(re.is_match("user@example.com"));
        assert!(re.is_match("first.last+tag@sub.example.org"));
        assert!(!re.is_match("not-an-email"));
        assert!(!re.is_match("user@"));
    }

    #[test]
    fn url_pattern_requires_scheme() {
        let re = Regex::new(URL).unwrap();
        assert!(re.is_match("https://example.com/path?q=1"));
        assert!(re.is_match("http://localhost:8080"));
        assert!(!re.is_match("example.com"));
        assert!(!re.is_match("ftp://example.com"));
    }

    #[test]
    fn password_checks_compile_and_agree() {
        let checks: Vec<Regex> = PASSWORD_CHECKS
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect();
        let strong = "Passw0rd!";
        let weak = "password";
        assert!(checks.iter().all(|re| re.is_match(strong)));
        assert!(!checks.iter().all(|re| re.is_match(weak)));
    }
}
