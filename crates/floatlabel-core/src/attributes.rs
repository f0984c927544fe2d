//! Layout attributes.
//!
//! An [`AttributeSet`] holds the raw `name = value` pairs a layout
//! description attaches to a view. Names may carry a namespace prefix
//! (`app:gravity`, `android:hint`); lookups match on the local part only.
//! Typed accessors never fail: a value that does not parse is reported as
//! absent and logged at `debug`.

use crate::{Color, Gravity};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeSet {
    attrs: Vec<(String, String)>,
}

fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name`, replacing any attribute with the same local name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .attrs
            .iter_mut()
            .find(|(n, _)| local_name(n) == local_name(&name))
        {
            Some(slot) => *slot = (name, value),
            None => self.attrs.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let name = local_name(name);
        self.attrs
            .iter()
            .find(|(n, _)| local_name(n) == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn color(&self, name: &str) -> Option<Color> {
        let raw = self.get(name)?;
        let parsed = Color::parse_argb(raw);
        if parsed.is_none() {
            log::debug!("attribute `{name}`: `{raw}` is not a color; using default");
        }
        parsed
    }

    pub fn gravity(&self, name: &str) -> Option<Gravity> {
        let raw = self.get(name)?;
        let parsed = Gravity::parse(raw);
        if parsed.is_none() {
            log::debug!("attribute `{name}`: `{raw}` has no horizontal gravity; using default");
        }
        parsed
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Collects every `name="value"` (or `name='value'`) pair in a layout
    /// element. Tag names, bare words and unterminated values are skipped.
    pub fn parse(src: &str) -> Self {
        let mut set = Self::new();
        let mut rest = src;
        while let Some(eq) = rest.find('=') {
            let name = rest[..eq].split_whitespace().last().unwrap_or("");
            let after = rest[eq + 1..].trim_start();
            let Some(quote) = after.chars().next().filter(|c| *c == '"' || *c == '\'') else {
                rest = after;
                continue;
            };
            let body = &after[1..];
            let Some(end) = body.find(quote) else {
                break;
            };
            let name = name.trim_start_matches('<');
            if !name.is_empty() {
                set.insert(name, &body[..end]);
            }
            rest = &body[end + 1..];
        }
        set
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (n, v) in iter {
            set.insert(n, v);
        }
        set
    }
}
