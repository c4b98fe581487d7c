use std::str::FromStr;

use smallvec::SmallVec;

/// Name→value pairs captured by a successful match, in placeholder order.
///
/// Duplicate placeholder names are kept as separate entries; `get` returns
/// the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captures {
    pub(crate) buf: SmallVec<[(Box<str>, Box<str>); 8]>,
}

impl Captures {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if name == &**k { Some(&**v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.buf.iter().map(|(k, v)| (&**k, &**v))
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
