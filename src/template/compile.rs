use super::captures::Captures;
use super::error::FormatError;
use super::grammar::{scan, Part};

use regex::Regex;
use smallvec::SmallVec;

/// Matching representation of one template path, built at most once.
#[derive(Debug)]
pub(crate) struct Compiled {
    regex: Regex,
    groups: Vec<Group>,
}

/// One named placeholder, in encounter order. The synthetic label keeps the
/// mapping stable even when a custom sub-pattern contains capture groups of
/// its own, and lets duplicate user names coexist.
#[derive(Debug)]
struct Group {
    name: Box<str>,
    label: Box<str>,
}

pub(crate) fn compile(path: &str) -> Result<Compiled, FormatError> {
    let mut pattern = String::with_capacity(path.len() + 16);
    let mut groups: Vec<Group> = Vec::new();

    pattern.push('^');
    for part in scan(path) {
        match part {
            Part::Literal(lit) => pattern.push_str(&regex::escape(lit)),
            Part::Token(token) => {
                pattern.push_str("(?:");
                pattern.push_str(if token.sep == "." { "\\." } else { token.sep });
                if token.name.is_empty() {
                    pattern.push_str("(?:");
                    pattern.push_str(token.kind.fragment());
                    pattern.push(')');
                } else {
                    let label = format!("p{}", groups.len());
                    pattern.push_str("(?P<");
                    pattern.push_str(&label);
                    pattern.push('>');
                    pattern.push_str(token.kind.fragment());
                    pattern.push(')');
                    groups.push(Group {
                        name: token.name.into(),
                        label: label.into(),
                    });
                }
                pattern.push(')');
                if token.optional {
                    pattern.push('?');
                }
            }
        }
    }
    pattern.push('$');

    let regex = Regex::new(&pattern)?;
    Ok(Compiled { regex, groups })
}

impl Compiled {
    /// Applies the anchored pattern to a normalized path. `None` is the
    /// normal not-matched outcome. Placeholders that did not participate in
    /// the match are absent from the capture set.
    pub(crate) fn captures(&self, path: &str) -> Option<Captures> {
        let caps = self.regex.captures(path)?;
        let mut buf: SmallVec<[(Box<str>, Box<str>); 8]> = SmallVec::new();
        for group in &self.groups {
            if let Some(m) = caps.name(&group.label) {
                buf.push((group.name.clone(), m.as_str().into()));
            }
        }
        Some(Captures { buf })
    }

    #[cfg(test)]
    pub(crate) fn placeholder_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| &*g.name)
    }
}
