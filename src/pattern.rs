//! Shell-glob matching for single path components.
//!
//! Supports `*` (any run of characters, including empty) and `?` (exactly
//! one character); every other character matches literally. Matching is
//! applied to one entry name at a time, so path separators get no special
//! treatment.

/// Match `input` against a glob pattern.
///
/// Returns true if the pattern matches the entire input. An empty pattern
/// matches only the empty input; the enumerator treats "no pattern" as
/// match-all before calling here.
pub(crate) fn glob_match(pattern: &str, input: &str) -> bool {
    let pat: Vec<char> = pattern.chars().collect();
    let inp: Vec<char> = input.chars().collect();

    let mut pi = 0;
    let mut ii = 0;
    // Most recent `*`: position after it in the pattern, and the input
    // position it is currently anchored at. Backtracking widens the run
    // the star consumes one character at a time.
    let mut star: Option<(usize, usize)> = None;

    while ii < inp.len() {
        if pi < pat.len() && (pat[pi] == '?' || pat[pi] == inp[ii]) {
            pi += 1;
            ii += 1;
        } else if pi < pat.len() && pat[pi] == '*' {
            star = Some((pi + 1, ii));
            pi += 1;
        } else if let Some((after_star, anchor)) = star {
            pi = after_star;
            ii = anchor + 1;
            star = Some((after_star, anchor + 1));
        } else {
            return false;
        }
    }

    // Trailing stars match the empty run
    while pi < pat.len() && pat[pi] == '*' {
        pi += 1;
    }
    pi == pat.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_matches() {
        assert!(glob_match("hello", "hello"));
        assert!(glob_match("", ""));
        assert!(!glob_match("hello", "world"));
        assert!(!glob_match("hello", "hell"));
        assert!(!glob_match("hello", "helloo"));
        assert!(!glob_match("", "a"));
    }

    #[test]
    fn star_wildcard() {
        assert!(glob_match("*", ""));
        assert!(glob_match("*", "anything"));
        assert!(glob_match("*.txt", "notes.txt"));
        assert!(glob_match("*.txt", ".txt"));
        assert!(glob_match("test*", "test"));
        assert!(glob_match("test*", "testing"));
        assert!(glob_match("*test*", "mytestfile"));
        assert!(glob_match("a*b*c", "abc"));
        assert!(glob_match("a*b*c", "aXXXbYYYc"));
        assert!(!glob_match("*.txt", "notes.md"));
        assert!(!glob_match("test*", "mytest"));
    }

    #[test]
    fn question_wildcard() {
        assert!(glob_match("?", "a"));
        assert!(glob_match("???", "abc"));
        assert!(glob_match("Foo???.doc", "FooBar.doc"));
        assert!(glob_match("?est", "test"));
        assert!(!glob_match("?", ""));
        assert!(!glob_match("?", "ab"));
        assert!(!glob_match("Foo???.doc", "FooBarBaz.doc"));
    }

    #[test]
    fn star_and_question_combined() {
        assert!(glob_match("*.tar.gz", "archive.tar.gz"));
        assert!(!glob_match("*.tar.gz", "archive.tar"));
        assert!(glob_match("v?.*", "v1.0"));
        assert!(glob_match("v?.*", "v2.11"));
        assert!(!glob_match("v?.*", "v10.0"));
        assert!(glob_match("*a?b", "XXXaXb"));
    }

    #[test]
    fn consecutive_stars() {
        assert!(glob_match("**", "anything"));
        assert!(glob_match("a**b", "ab"));
        assert!(glob_match("a**b", "aXXXb"));
    }

    #[test]
    fn no_separator_special_casing() {
        // Names never contain separators in practice, but the matcher
        // treats them as ordinary characters if one shows up.
        assert!(glob_match("*", "foo/bar"));
        assert!(glob_match("foo?bar", "foo/bar"));
    }

    #[test]
    fn case_sensitivity() {
        assert!(glob_match("Hello", "Hello"));
        assert!(!glob_match("Hello", "hello"));
    }

    #[test]
    fn unicode_basic() {
        assert!(glob_match("héllo", "héllo"));
        assert!(glob_match("*ñ*", "español"));
        assert!(glob_match("?", "ü"));
    }

    #[test]
    fn backtracking_stress() {
        assert!(glob_match("a*a*a*a*a*a*a*a", "aaaaaaaaaaaaaaaa"));
        assert!(!glob_match("a*a*a*a*a*a*a*ab", "aaaaaaaaaaaaaaaa"));
        assert!(glob_match("*a*b*c", "XXXaYYYbZZZc"));
        assert!(!glob_match("*a*b*c", "XXXaYYYcZZZb"));
    }
}
