use super::captures::Captures;
use super::error::ReverseError;
use super::grammar::{scan, Part};

use std::collections::HashMap;

/// Parameter lookup for reverse routing.
pub trait Params {
    fn value(&self, name: &str) -> Option<&str>;
}

impl<'a> Params for [(&'a str, &'a str)] {
    fn value(&self, name: &str) -> Option<&str> {
        self.iter()
            .find_map(|&(k, v)| if k == name { Some(v) } else { None })
    }
}

impl<'a, const N: usize> Params for [(&'a str, &'a str); N] {
    fn value(&self, name: &str) -> Option<&str> {
        self[..].value(name)
    }
}

impl<'a> Params for HashMap<&'a str, &'a str> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

impl Params for HashMap<String, String> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Params for Captures {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

/// Walks the uncompiled path template and substitutes placeholder values.
/// Token boundaries come from the same scanner the compiler uses.
pub(crate) fn reverse<P: Params + ?Sized>(path: &str, params: &P) -> Result<String, ReverseError> {
    let mut out = String::with_capacity(path.len());
    for part in scan(path) {
        match part {
            Part::Literal(lit) => out.push_str(lit),
            Part::Token(token) => {
                if token.name.is_empty() {
                    return Err(ReverseError::Anonymous(token.text.into()));
                }
                match params.value(token.name) {
                    Some(value) => {
                        out.push_str(token.sep);
                        out.push_str(value);
                    }
                    // An omitted optional drops its separator with it.
                    None if token.optional => {}
                    None => return Err(ReverseError::MissingParameter(token.name.into())),
                }
            }
        }
    }
    Ok(out)
}
