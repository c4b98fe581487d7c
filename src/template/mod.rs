mod captures;
mod compile;
mod error;
mod grammar;
mod reverse;

pub use self::captures::Captures;
pub use self::error::{FormatError, ReverseError};
pub use self::reverse::Params;

use self::compile::Compiled;

use std::borrow::Cow;

use http::Method;
use once_cell::sync::OnceCell;
use smallvec::SmallVec;

/// One route template: an optional method restriction and a path with typed
/// placeholders, e.g. `GET|POST /posts/[i:id]`.
///
/// The route format is validated eagerly; the matching representation is
/// built on first use and cached. Construction from the same string always
/// yields the same matching behavior.
#[derive(Debug)]
pub struct Template {
    raw: Box<str>,
    methods: Option<SmallVec<[Method; 4]>>,
    path: Box<str>,
    compiled: OnceCell<Compiled>,
}

impl Template {
    pub fn new(route: &str) -> Result<Self, FormatError> {
        let (methods, path) = match route.split_once(char::is_whitespace) {
            Some((prefix, path)) => (Some(parse_methods(prefix)?), path),
            None => (None, route),
        };

        if path.is_empty() || path.contains(char::is_whitespace) {
            return Err(FormatError::Syntax);
        }
        if !path.starts_with('/') {
            return Err(FormatError::LeadingSlash);
        }
        let path = strip_trailing_slash(path);

        Ok(Self {
            raw: route.into(),
            methods,
            path: path.into(),
            compiled: OnceCell::new(),
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Path portion with the trailing slash stripped.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Allowed methods, or `None` when the template is unrestricted.
    pub fn methods(&self) -> Option<&[Method]> {
        self.methods.as_deref()
    }

    pub fn allows(&self, method: &Method) -> bool {
        match &self.methods {
            Some(methods) => methods.iter().any(|m| m == method),
            None => true,
        }
    }

    /// Tests the template against a request method and path.
    ///
    /// `Ok(None)` is the normal not-matched outcome. An `Err` only occurs
    /// when a custom placeholder carries an invalid sub-pattern, surfaced
    /// here because compilation is deferred to first use.
    pub fn match_path(&self, method: &Method, path: &str) -> Result<Option<Captures>, FormatError> {
        if !self.allows(method) {
            return Ok(None);
        }
        let compiled = self.compiled()?;
        let path = normalize(path);
        Ok(compiled.captures(&path))
    }

    /// Rebuilds a concrete path from this template and a parameter set, the
    /// dual of [`match_path`](Self::match_path). Values are substituted
    /// as-is, without checking them against the placeholder's type.
    pub fn reverse<P: Params + ?Sized>(&self, params: &P) -> Result<String, ReverseError> {
        reverse::reverse(&self.path, params)
    }

    fn compiled(&self) -> Result<&Compiled, FormatError> {
        // Compilation is a pure function of the path, so concurrent first
        // calls settle on one winner with an identical result.
        self.compiled.get_or_try_init(|| compile::compile(&self.path))
    }
}

fn parse_methods(prefix: &str) -> Result<SmallVec<[Method; 4]>, FormatError> {
    let mut methods = SmallVec::new();
    for token in prefix.split('|') {
        methods.push(match token {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            other => return Err(FormatError::Method(other.into())),
        });
    }
    Ok(methods)
}

fn strip_trailing_slash(path: &str) -> &str {
    if path.len() > 1 && path.ends_with('/') {
        &path[..path.len() - 1]
    } else {
        path
    }
}

/// Request paths get the same treatment as template paths: one leading
/// slash enforced, one trailing slash stripped. Idempotent.
pub(crate) fn normalize(path: &str) -> Cow<'_, str> {
    let path = strip_trailing_slash(path);
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{}", path))
    }
}
