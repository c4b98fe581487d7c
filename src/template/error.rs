/// Compile-time failure of a route template. Fatal to that route's
/// registration, never swallowed.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("invalid route format, route should look like `GET|POST /example/[i:id]`")]
    Syntax,

    #[error("unknown method `{0}` in route prefix")]
    Method(Box<str>),

    #[error("invalid route format, path should start with `/`")]
    LeadingSlash,

    #[error("invalid placeholder pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Failure to rebuild a path from a template and a parameter set. A partial
/// or incorrect path is never produced.
#[derive(Debug, thiserror::Error)]
pub enum ReverseError {
    #[error("placeholder `{0}` can not be reverse routed because it has no name")]
    Anonymous(Box<str>),

    #[error("parameter `{0}` not provided")]
    MissingParameter(Box<str>),
}
