use crate::template::{normalize, Captures, FormatError, Params, ReverseError, Template};

use std::collections::HashMap;
use std::fmt;

use http::Method;

/// Control signal returned by a route handler: keep dispatching or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Stop,
    Continue,
}

/// Result of testing one route against a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Path matched and the handler accepted; dispatch stops here.
    Matched,
    /// Path matched but the handler passed; dispatch moves on.
    Continue,
    NotMatched,
}

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("named route `{0}` is already defined")]
    DuplicateName(Box<str>),

    #[error("route `{0}` not found, did you forget to map it?")]
    UnknownName(Box<str>),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Reverse(#[from] ReverseError),
}

type Handler<E> = Box<dyn Fn(&Method, &str, &Captures, &E) -> Flow + Send + Sync>;

/// A template paired with the handler to run on a successful match. `E` is
/// caller-supplied extra data threaded through dispatch untouched.
pub struct Route<E = ()> {
    template: Template,
    handler: Handler<E>,
}

impl<E> Route<E> {
    pub fn new<F>(route: &str, handler: F) -> Result<Self, FormatError>
    where
        F: Fn(&Method, &str, &Captures, &E) -> Flow + Send + Sync + 'static,
    {
        Ok(Self {
            template: Template::new(route)?,
            handler: Box::new(handler),
        })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Matches the request and, on success, runs the handler with the
    /// normalized path and capture set. The handler's [`Flow`] decides
    /// between [`Outcome::Matched`] and [`Outcome::Continue`].
    pub fn try_match(&self, method: &Method, path: &str, extra: &E) -> Result<Outcome, FormatError> {
        let path = normalize(path);
        let captures = match self.template.match_path(method, &path)? {
            Some(captures) => captures,
            None => return Ok(Outcome::NotMatched),
        };
        match (self.handler)(method, &path, &captures, extra) {
            Flow::Stop => Ok(Outcome::Matched),
            Flow::Continue => Ok(Outcome::Continue),
        }
    }

    pub fn reverse<P: Params + ?Sized>(&self, params: &P) -> Result<String, ReverseError> {
        self.template.reverse(params)
    }
}

impl<E> fmt::Debug for Route<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Route").field(&self.template.raw()).finish()
    }
}

/// Ordered route table with first-match dispatch and reverse routing for
/// named routes.
pub struct Router<E = ()> {
    routes: Vec<Route<E>>,
    names: HashMap<Box<str>, usize>,
}

impl<E> fmt::Debug for Router<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("names", &self.names)
            .finish()
    }
}

impl<E> Router<E> {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// Maps a route, e.g. `GET|PUT|DELETE /pages/[i:id]`.
    pub fn map<F>(&mut self, route: &str, handler: F) -> Result<&mut Self, RouterError>
    where
        F: Fn(&Method, &str, &Captures, &E) -> Flow + Send + Sync + 'static,
    {
        self.routes.push(Route::new(route, handler)?);
        Ok(self)
    }

    /// Maps a route under a name usable with [`reverse`](Self::reverse).
    pub fn map_named<F>(
        &mut self,
        name: &str,
        route: &str,
        handler: F,
    ) -> Result<&mut Self, RouterError>
    where
        F: Fn(&Method, &str, &Captures, &E) -> Flow + Send + Sync + 'static,
    {
        if self.names.contains_key(name) {
            return Err(RouterError::DuplicateName(name.into()));
        }
        let id = self.routes.len();
        self.routes.push(Route::new(route, handler)?);
        self.names.insert(name.into(), id);
        Ok(self)
    }

    /// Dispatches a request through the routes in mapping order, stopping at
    /// the first [`Outcome::Matched`]. Returns whether any route matched.
    pub fn run(&self, method: &Method, path: &str, extra: &E) -> Result<bool, FormatError> {
        for route in &self.routes {
            match route.try_match(method, path, extra)? {
                Outcome::Matched => return Ok(true),
                Outcome::Continue | Outcome::NotMatched => {}
            }
        }
        Ok(false)
    }

    /// Builds the path for a named route from a parameter set.
    pub fn reverse<P: Params + ?Sized>(&self, name: &str, params: &P) -> Result<String, RouterError> {
        let &id = self
            .names
            .get(name)
            .ok_or_else(|| RouterError::UnknownName(name.into()))?;
        Ok(self.routes[id].reverse(params)?)
    }
}

impl<E> Default for Router<E> {
    fn default() -> Self {
        Self::new()
    }
}
