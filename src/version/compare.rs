//! Debian version ordering.
//!
//! A version is split into `epoch:upstream-revision`. Each part is compared
//! as a sequence of runs: a non-digit run followed by a digit run. Non-digit
//! runs compare character by character with `~` sorting before everything
//! (including the end of the run), then letters, then all other characters.
//! Digit runs compare by numeric magnitude.

use std::cmp::Ordering;

/// A version string split into its three ordering tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebianVersion<'a> {
    pub epoch: &'a str,
    pub upstream: &'a str,
    pub revision: &'a str,
}

impl<'a> DebianVersion<'a> {
    /// Split a version string. Never fails: any string is a version.
    pub fn parse(version: &'a str) -> Self {
        let (epoch, rest) = match version.split_once(':') {
            Some((epoch, rest)) => (epoch, rest),
            None => ("0", version),
        };
        let (upstream, revision) = match rest.rsplit_once('-') {
            Some((upstream, revision)) => (upstream, revision),
            None => (rest, ""),
        };
        Self {
            epoch,
            upstream,
            revision,
        }
    }
}

impl Ord for DebianVersion<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_part(self.epoch, other.epoch)
            .then_with(|| compare_part(self.upstream, other.upstream))
            .then_with(|| compare_part(self.revision, other.revision))
    }
}

impl PartialOrd for DebianVersion<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two version strings under Debian ordering.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    DebianVersion::parse(a).cmp(&DebianVersion::parse(b))
}

/// One step of the alternating scan: a non-digit run and the digit run after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Run<'a> {
    text: &'a str,
    digits: &'a str,
}

/// Split a version part into alternating non-digit/digit runs.
fn runs(part: &str) -> Vec<Run<'_>> {
    let mut out = Vec::new();
    let mut rest = part;
    while !rest.is_empty() {
        let text_end = rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (text, after_text) = rest.split_at(text_end);
        let digits_end = after_text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after_text.len());
        let (digits, after_digits) = after_text.split_at(digits_end);
        out.push(Run { text, digits });
        rest = after_digits;
    }
    out
}

fn compare_part(a: &str, b: &str) -> Ordering {
    let left = runs(a);
    let right = runs(b);
    let len = left.len().max(right.len());
    for i in 0..len {
        let l = left.get(i).copied().unwrap_or_default();
        let r = right.get(i).copied().unwrap_or_default();
        let ord = compare_text(l.text, r.text).then_with(|| compare_digits(l.digits, r.digits));
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Sort weight of a character in a non-digit run; `None` is the end of the run.
fn weight(c: Option<char>) -> i64 {
    match c {
        None => 0,
        Some('~') => -1,
        Some(c) if c.is_ascii_alphabetic() => c as i64,
        Some(c) => c as i64 + 256,
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (l, r) => {
                let ord = weight(l).cmp(&weight(r));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Numeric comparison without parsing, so arbitrarily long runs cannot overflow.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
