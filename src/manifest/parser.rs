//! Manifest line parser.
//!
//! Each non-blank, non-comment line has the form
//!
//! ```text
//! package [profile !other] <op>version,<op>version
//! ```
//!
//! where both the bracketed selector clause and the comma-separated
//! constraint clause are optional.

use crate::error::{BindepError, Result};
use crate::version::{Operator, VersionConstraint};

const OPERATOR_CHARS: [char; 4] = ['<', '>', '=', '!'];

use super::rule::{Rule, Selector};

/// Parse manifest text into rules, in manifest order.
pub fn parse_manifest(text: &str) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(rule) = parse_line(line).map_err(|message| BindepError::Parse {
            line: index + 1,
            message,
        })? {
            rules.push(rule);
        }
    }
    Ok(rules)
}

/// Parse a single line. Blank and comment lines yield `None`.
pub fn parse_line(line: &str) -> std::result::Result<Option<Rule>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let name_end = line
        .find(|c: char| c.is_whitespace() || c == '[')
        .unwrap_or(line.len());
    let (package, rest) = line.split_at(name_end);
    validate_package(package)?;

    let mut rest = rest.trim_start();
    let mut selectors = Vec::new();
    if let Some(clause) = rest.strip_prefix('[') {
        let close = clause
            .find(']')
            .ok_or_else(|| "unbalanced '[' in selector clause".to_string())?;
        selectors = parse_selectors(&clause[..close])?;
        rest = clause[close + 1..].trim_start();
    }

    if rest.contains('[') || rest.contains(']') {
        return Err(format!("unbalanced selector brackets in '{}'", rest));
    }

    let constraints = if rest.is_empty() {
        Vec::new()
    } else {
        parse_constraints(rest)?
    };

    Ok(Some(Rule {
        package: package.to_string(),
        selectors,
        constraints,
    }))
}

fn validate_package(package: &str) -> std::result::Result<(), String> {
    if package.is_empty() || package.starts_with(OPERATOR_CHARS) {
        return Err("missing package name".to_string());
    }
    if package.contains(OPERATOR_CHARS) {
        return Err(format!(
            "invalid package name '{}': version constraints must follow whitespace",
            package
        ));
    }
    if package.contains(']') {
        return Err(format!("unbalanced ']' in '{}'", package));
    }
    if package.contains(',') {
        return Err(format!("invalid package name '{}'", package));
    }
    Ok(())
}

fn parse_selectors(clause: &str) -> std::result::Result<Vec<Selector>, String> {
    if clause.contains('[') {
        return Err("nested '[' in selector clause".to_string());
    }
    if clause.trim().is_empty() {
        return Err("empty selector clause".to_string());
    }
    clause
        .split_whitespace()
        .map(|token| {
            let (positive, profile) = match token.strip_prefix('!') {
                Some(profile) => (false, profile),
                None => (true, token),
            };
            if profile.is_empty() || profile.contains('!') {
                return Err(format!("invalid selector '{}'", token));
            }
            Ok(Selector {
                positive,
                profile: profile.to_string(),
            })
        })
        .collect()
}

fn parse_constraints(clause: &str) -> std::result::Result<Vec<VersionConstraint>, String> {
    clause.split(',').map(|piece| parse_constraint(piece.trim())).collect()
}

fn parse_constraint(piece: &str) -> std::result::Result<VersionConstraint, String> {
    if piece.is_empty() {
        return Err("empty version constraint".to_string());
    }
    let split = piece
        .find(|c: char| !OPERATOR_CHARS.contains(&c))
        .unwrap_or(piece.len());
    let (token, version) = piece.split_at(split);
    if token.is_empty() {
        return Err(format!("missing operator in constraint '{}'", piece));
    }
    let operator: Operator = token
        .parse()
        .map_err(|e| format!("{} in constraint '{}'", e, piece))?;
    if version.is_empty() {
        return Err(format!("missing version after '{}'", operator));
    }
    if version.contains(char::is_whitespace) {
        return Err(format!("unexpected whitespace in constraint '{}'", piece));
    }
    Ok(VersionConstraint::new(operator, version))
}
