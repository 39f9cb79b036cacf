//! Range expressions in the dialect found in `engines.node` and marker files.
//!
//! The grammar is npm-flavoured and rewritten into [`semver::VersionReq`]:
//! `||` separates alternatives, commas or whitespace join comparators, and
//! `A - B` is an inclusive range. A comparator without an operator is an
//! exact match on the components it names (`10.2` is any `10.2.x`), never a
//! caret range.

use crate::error::{Result, VersionError};
use once_cell::sync::Lazy;
use regex::Regex;
use semver::{Version, VersionReq};

static COMPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<op><=|>=|~>|<|>|=|~|\^)?v?(?<core>(?:[0-9]+|[xX*])(?:\.(?:[0-9]+|[xX*])){0,2})(?<tail>(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?)$").unwrap()
});

static OPERATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:<=|>=|~>|<|>|=|~|\^)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    raw:          String,
    alternatives: Vec<VersionReq>,
}

impl Constraint {
    pub fn parse(input: &str) -> Result<Self> {
        let alternatives = input
            .split("||")
            .map(|alt| parse_alternative(alt, input))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            raw: input.to_string(),
            alternatives,
        })
    }

    /// Whether any alternative admits `version`.
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }

    pub fn alternatives(&self) -> &[VersionReq] { &self.alternatives }
}

impl std::str::FromStr for Constraint {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> { Constraint::parse(s) }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.raw) }
}

fn parse_alternative(alt: &str, whole: &str) -> Result<VersionReq> {
    let range_error = |reason: &str| VersionError::Range {
        input:  whole.to_string(),
        reason: reason.to_string(),
    };

    let tokens = tokenize(alt);
    let comparators = match tokens.as_slice() {
        [] => return Err(range_error("empty alternative")),
        [low, dash, high] if dash == "-" => {
            let low = bare_version(low).ok_or_else(|| range_error("bad lower bound"))?;
            let high = bare_version(high).ok_or_else(|| range_error("bad upper bound"))?;
            vec![format!(">={low}"), format!("<={high}")]
        }
        tokens => tokens
            .iter()
            .map(|t| comparator(t).ok_or_else(|| range_error(&format!("bad comparator '{t}'"))))
            .collect::<Result<Vec<_>>>()?,
    };

    let rewritten = comparators.join(", ");
    VersionReq::parse(&rewritten).map_err(|source| VersionError::Req {
        input: whole.to_string(),
        source,
    })
}

/// Split on commas and whitespace, gluing a lone operator to the token after it.
fn tokenize(alt: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut pending_op: Option<&str> = None;
    for word in alt.split(|c: char| c == ',' || c.is_whitespace()).filter(|w| !w.is_empty()) {
        if OPERATOR_REGEX.is_match(word) && pending_op.is_none() {
            pending_op = Some(word);
            continue;
        }
        match pending_op.take() {
            Some(op) => tokens.push(format!("{op}{word}")),
            None => tokens.push(word.to_string()),
        }
    }
    if let Some(op) = pending_op {
        tokens.push(op.to_string());
    }
    tokens
}

fn comparator(token: &str) -> Option<String> {
    let caps = COMPARATOR_REGEX.captures(token)?;
    let core = &caps["core"];
    let tail = &caps["tail"];
    let op = match caps.name("op").map(|m| m.as_str()) {
        Some("~>") => "~",
        Some(op) => op,
        None if core.contains(['x', 'X', '*']) => "",
        None => "=",
    };
    Some(format!("{op}{core}{tail}"))
}

fn bare_version(token: &str) -> Option<String> {
    let caps = COMPARATOR_REGEX.captures(token)?;
    if caps.name("op").is_some() {
        return None;
    }
    Some(format!("{}{}", &caps["core"], &caps["tail"]))
}
