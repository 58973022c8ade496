use std::borrow::Cow;

use serde_json::Value;

/// A field value that may be a single candidate or an ordered list of them.
///
/// `first_present` yields the first candidate that is not null and not blank
/// (empty after trimming whitespace). The selected value is returned as given,
/// untrimmed.
pub trait Candidates {
    fn first_present(&self) -> Option<Cow<'_, str>>;
}

fn present(s: &str) -> Option<Cow<'_, str>> {
    if s.trim().is_empty() {
        None
    } else {
        Some(Cow::Borrowed(s))
    }
}

impl Candidates for str {
    fn first_present(&self) -> Option<Cow<'_, str>> {
        present(self)
    }
}

impl Candidates for String {
    fn first_present(&self) -> Option<Cow<'_, str>> {
        present(self)
    }
}

impl Candidates for Cow<'_, str> {
    fn first_present(&self) -> Option<Cow<'_, str>> {
        present(self)
    }
}

impl<T: Candidates + ?Sized> Candidates for &T {
    fn first_present(&self) -> Option<Cow<'_, str>> {
        (**self).first_present()
    }
}

impl<T: Candidates> Candidates for Option<T> {
    fn first_present(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|v| v.first_present())
    }
}

impl<T: Candidates> Candidates for [T] {
    fn first_present(&self) -> Option<Cow<'_, str>> {
        self.iter().find_map(|v| v.first_present())
    }
}

impl<T: Candidates, const N: usize> Candidates for [T; N] {
    fn first_present(&self) -> Option<Cow<'_, str>> {
        self.as_slice().first_present()
    }
}

impl<T: Candidates> Candidates for Vec<T> {
    fn first_present(&self) -> Option<Cow<'_, str>> {
        self.as_slice().first_present()
    }
}

/// JSON values coming from template contexts or option maps.
/// `null`, `false`, objects and blank strings count as blank; numbers are
/// stringified; arrays are searched in order (nested arrays included).
impl Candidates for Value {
    fn first_present(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::String(s) => present(s),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(true) => Some(Cow::Borrowed("true")),
            Value::Array(items) => items.iter().find_map(|v| v.first_present()),
            Value::Bool(false) | Value::Null | Value::Object(_) => None,
        }
    }
}
