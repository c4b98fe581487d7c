#![forbid(unsafe_code)]

mod router;
mod template;

pub use crate::router::{Flow, Outcome, Route, Router, RouterError};
pub use crate::template::{Captures, FormatError, Params, ReverseError, Template};

pub use http::Method;
