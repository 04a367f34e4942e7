//! Value patterns for chain ids, atom names and residue numbers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pattern for matching string values such as chain ids and atom names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    /// Exact match
    Exact(String),
    /// `*` matches any run of characters, `?` exactly one
    Wildcard(String),
    /// Any of the listed patterns (`CA+CB`)
    List(Vec<Pattern>),
}

impl Pattern {
    pub fn exact(s: impl Into<String>) -> Self {
        Pattern::Exact(s.into())
    }

    pub fn wildcard(s: impl Into<String>) -> Self {
        Pattern::Wildcard(s.into())
    }

    pub fn list(patterns: Vec<Pattern>) -> Self {
        Pattern::List(patterns)
    }

    /// Parse `CA`, `C*` or `CA+CB+N*`
    pub fn parse(text: &str) -> Self {
        let mut parts: Vec<Pattern> = text
            .split('+')
            .filter(|p| !p.is_empty())
            .map(|p| {
                if p.contains(['*', '?']) {
                    Pattern::wildcard(p)
                } else {
                    Pattern::exact(p)
                }
            })
            .collect();
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Pattern::List(parts)
        }
    }

    /// Check if a value matches this pattern
    pub fn matches(&self, value: &str, case_sensitive: bool) -> bool {
        match self {
            Pattern::Exact(pattern) => {
                if case_sensitive {
                    value == pattern
                } else {
                    value.eq_ignore_ascii_case(pattern)
                }
            }
            Pattern::Wildcard(pattern) => wildcard_match(pattern, value, case_sensitive),
            Pattern::List(patterns) => patterns.iter().any(|p| p.matches(value, case_sensitive)),
        }
    }

    pub fn has_wildcards(&self) -> bool {
        match self {
            Pattern::Exact(_) => false,
            Pattern::Wildcard(_) => true,
            Pattern::List(patterns) => patterns.iter().any(Pattern::has_wildcards),
        }
    }
}

/// Greedy wildcard match with single-star backtracking
fn wildcard_match(pattern: &str, value: &str, case_sensitive: bool) -> bool {
    let norm = |c: char| if case_sensitive { c } else { c.to_ascii_uppercase() };
    let p: Vec<char> = pattern.chars().map(norm).collect();
    let v: Vec<char> = value.chars().map(norm).collect();

    let (mut pi, mut vi) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while vi < v.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == v[vi]) {
            pi += 1;
            vi += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some((pi, vi));
            pi += 1;
        } else if let Some((sp, sv)) = star {
            pi = sp + 1;
            vi = sv + 1;
            star = Some((sp, sv + 1));
        } else {
            return false;
        }
    }

    p[pi..].iter().all(|&c| c == '*')
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Exact(s) | Pattern::Wildcard(s) => write!(f, "{}", s),
            Pattern::List(patterns) => {
                let strings: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
                write!(f, "{}", strings.join("+"))
            }
        }
    }
}

/// Residue specification: numbers, ranges and insertion codes (`10-50+60A`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResiSpec {
    pub items: Vec<ResiItem>,
}

impl ResiSpec {
    pub fn single(resv: i32) -> Self {
        ResiSpec {
            items: vec![ResiItem::Single(resv)],
        }
    }

    pub fn range(start: i32, end: i32) -> Self {
        ResiSpec {
            items: vec![ResiItem::Range(start, end)],
        }
    }

    /// Check if a residue matches this specification
    pub fn matches(&self, resv: i32, inscode: char) -> bool {
        self.items.iter().any(|item| item.matches(resv, inscode))
    }

    /// Smallest and largest residue numbers covered
    pub fn bounds(&self) -> Option<(i32, i32)> {
        let lo = self.items.iter().map(ResiItem::start).min()?;
        let hi = self.items.iter().map(ResiItem::end).max()?;
        Some((lo, hi))
    }
}

/// A single item in a residue specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResiItem {
    /// `100` (any insertion code)
    Single(i32),
    /// `100-200` (any insertion code)
    Range(i32, i32),
    /// `100A`
    InsCode(i32, char),
    /// `100A-120`, `52-52C`: bounds compared as (number, insertion code)
    InsCodeRange(i32, char, i32, char),
}

impl ResiItem {
    pub fn matches(&self, resv: i32, inscode: char) -> bool {
        let code = normalize_inscode(inscode);
        match *self {
            ResiItem::Single(v) => resv == v,
            ResiItem::Range(start, end) => resv >= start && resv <= end,
            ResiItem::InsCode(v, c) => resv == v && code == normalize_inscode(c),
            ResiItem::InsCodeRange(sv, sc, ev, ec) => {
                let key = (resv, code);
                key >= (sv, normalize_inscode(sc)) && key <= (ev, normalize_inscode(ec))
            }
        }
    }

    pub fn start(&self) -> i32 {
        match *self {
            ResiItem::Single(v) | ResiItem::InsCode(v, _) => v,
            ResiItem::Range(s, _) | ResiItem::InsCodeRange(s, _, _, _) => s,
        }
    }

    pub fn end(&self) -> i32 {
        match *self {
            ResiItem::Single(v) | ResiItem::InsCode(v, _) => v,
            ResiItem::Range(_, e) | ResiItem::InsCodeRange(_, _, e, _) => e,
        }
    }
}

/// Blank insertion codes sort before any letter
fn normalize_inscode(c: char) -> char {
    if c == '\0' {
        ' '
    } else {
        c.to_ascii_uppercase()
    }
}

impl fmt::Display for ResiItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = |c: char| if c == ' ' { String::new() } else { c.to_string() };
        match *self {
            ResiItem::Single(v) => write!(f, "{}", v),
            ResiItem::Range(s, e) => write!(f, "{}-{}", s, e),
            ResiItem::InsCode(v, c) => write!(f, "{}{}", v, code(c)),
            ResiItem::InsCodeRange(sv, sc, ev, ec) => {
                write!(f, "{}{}-{}{}", sv, code(sc), ev, code(ec))
            }
        }
    }
}

impl fmt::Display for ResiSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strings: Vec<String> = self.items.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", strings.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_exact() {
        let pattern = Pattern::exact("CA");
        assert!(pattern.matches("CA", false));
        assert!(pattern.matches("ca", false));
        assert!(!pattern.matches("CB", false));
        assert!(!pattern.matches("ca", true));
    }

    #[test]
    fn test_pattern_wildcard() {
        let pattern = Pattern::wildcard("C*");
        assert!(pattern.matches("CA", false));
        assert!(pattern.matches("C", false));
        assert!(!pattern.matches("N", false));

        let pattern = Pattern::wildcard("*H*");
        assert!(pattern.matches("H", false));
        assert!(pattern.matches("1H2", false));
        assert!(!pattern.matches("CA", false));

        let pattern = Pattern::wildcard("C?");
        assert!(pattern.matches("CB", false));
        assert!(!pattern.matches("C", false));
        assert!(!pattern.matches("CG1", false));
    }

    #[test]
    fn test_pattern_parse() {
        assert_eq!(Pattern::parse("A"), Pattern::exact("A"));
        assert_eq!(Pattern::parse("C*"), Pattern::wildcard("C*"));
        let list = Pattern::parse("CA+CB");
        assert!(list.matches("CB", true));
        assert!(!list.matches("CG", true));
        assert_eq!(list.to_string(), "CA+CB");
    }

    #[test]
    fn test_resi_spec() {
        let spec = ResiSpec {
            items: vec![ResiItem::Single(100), ResiItem::Range(200, 210)],
        };
        assert!(spec.matches(100, ' '));
        assert!(spec.matches(100, 'A'));
        assert!(spec.matches(205, ' '));
        assert!(!spec.matches(150, ' '));
        assert_eq!(spec.bounds(), Some((100, 210)));
        assert_eq!(spec.to_string(), "100+200-210");
    }

    #[test]
    fn test_resi_inscode_range() {
        let item = ResiItem::InsCodeRange(52, 'A', 60, ' ');
        assert!(!item.matches(52, ' '));
        assert!(item.matches(52, 'A'));
        assert!(item.matches(52, 'C'));
        assert!(item.matches(60, ' '));
        assert!(!item.matches(60, 'A'));
        assert_eq!(item.to_string(), "52A-60");

        let exact = ResiItem::InsCode(100, 'A');
        assert!(exact.matches(100, 'a'));
        assert!(!exact.matches(100, ' '));
    }
}
