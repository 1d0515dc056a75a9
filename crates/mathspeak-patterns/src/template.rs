//! Output templates with positional backreferences.
//!
//! Syntax: `\1`..`\99` and `\g<N>` insert capture group N, `\\` is a literal
//! backslash, and any other backslash is kept as-is. A group that did not
//! participate in the match renders as the empty string.

use std::iter::Peekable;
use std::str::Chars;

use regex::Captures;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Group(usize),
}

/// A parsed output template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '\\' {
                literal.push(c);
                continue;
            }
            match chars.peek().copied() {
                Some(d) if d.is_ascii_digit() => {
                    let mut group = 0usize;
                    for _ in 0..2 {
                        match chars.peek().and_then(|d| d.to_digit(10)) {
                            Some(digit) => {
                                group = group * 10 + digit as usize;
                                chars.next();
                            }
                            None => break,
                        }
                    }
                    flush(&mut literal, &mut segments);
                    segments.push(Segment::Group(group));
                }
                Some('g') => match parse_named_group(&chars) {
                    Some((group, rest)) => {
                        chars = rest;
                        flush(&mut literal, &mut segments);
                        segments.push(Segment::Group(group));
                    }
                    None => literal.push('\\'),
                },
                Some('\\') => {
                    chars.next();
                    literal.push('\\');
                }
                _ => literal.push('\\'),
            }
        }
        flush(&mut literal, &mut segments);

        Self {
            source: source.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Highest group index referenced, or `None` for a template without
    /// backreferences.
    pub fn max_group(&self) -> Option<usize> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Group(g) => Some(*g),
                Segment::Literal(_) => None,
            })
            .max()
    }

    /// Expand the template for one match.
    pub fn render(&self, caps: &Captures<'_>) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Group(g) => out.push_str(caps.get(*g).map_or("", |m| m.as_str())),
            }
        }
        out
    }
}

/// Parse `g<N>` at the head of `chars`, returning the group and the iterator
/// positioned after the closing `>`.
fn parse_named_group<'a>(chars: &Peekable<Chars<'a>>) -> Option<(usize, Peekable<Chars<'a>>)> {
    let mut lookahead = chars.clone();
    lookahead.next(); // 'g'
    if lookahead.next() != Some('<') {
        return None;
    }
    let mut digits = String::new();
    while let Some(d) = lookahead.next_if(|c| c.is_ascii_digit()) {
        digits.push(d);
    }
    if lookahead.next() != Some('>') {
        return None;
    }
    digits.parse().ok().map(|group| (group, lookahead))
}

fn flush(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    fn expand(pattern: &str, template: &str, text: &str) -> String {
        let re = Regex::new(pattern).unwrap();
        let caps = re.captures(text).unwrap();
        Template::parse(template).render(&caps)
    }

    #[test]
    fn numbered_groups() {
        assert_eq!(
            expand(r"(\w) \+ (\w) = (\w)", r"\1 plus \2 equals \3", "x + y = z"),
            "x plus y equals z"
        );
    }

    #[test]
    fn two_digit_groups() {
        let pattern = "(a)(b)(c)(d)(e)(f)(g)(h)(i)(j)(k)(l)";
        assert_eq!(expand(pattern, r"\12-\1", "abcdefghijkl"), "l-a");
    }

    #[test]
    fn g_syntax_separates_digits() {
        assert_eq!(expand(r"(\d)", r"\g<1>0", "7"), "70");
    }

    #[test]
    fn unmatched_optional_group_is_empty() {
        assert_eq!(expand(r"(a)(b)?", r"[\1|\2]", "a"), "[a|]");
    }

    #[test]
    fn escaped_and_stray_backslashes() {
        assert_eq!(expand("(x)", r"\\frac \q \g \1", "x"), r"\frac \q \g x");
        assert_eq!(expand("(x)", "end\\", "x"), "end\\");
    }

    #[test]
    fn max_group_reports_highest_reference() {
        assert_eq!(Template::parse(r"\2 and \g<5>").max_group(), Some(5));
        assert_eq!(Template::parse("plain").max_group(), None);
    }
}
