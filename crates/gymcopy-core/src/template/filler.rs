//! Placeholder substitution for copy templates.
//!
//! Templates carry `{name}` tokens. Substitution is literal find-and-replace,
//! applied in the insertion order of the [`Replacements`] list. Tokens with no
//! entry are left in the output untouched.

/// Ordered placeholder → value list used by [`fill_template`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    entries: Vec<(String, String)>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or overwrites) the value for `key`. Values are stringified.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Replacements {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut replacements = Self::new();
        for (key, value) in iter {
            replacements.insert(key, value);
        }
        replacements
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for Replacements {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Upper-cases the first letter of `word` and lower-cases the rest.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Replaces every `{key}` in `template` with its value, entry by entry.
pub fn fill_template(template: &str, replacements: &Replacements) -> String {
    let mut filled = template.to_string();
    for (key, value) in replacements.iter() {
        let token = format!("{{{}}}", key);
        if filled.contains(&token) {
            filled = filled.replace(&token, value);
        }
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        let unresolved = placeholders(&filled);
        if !unresolved.is_empty() {
            tracing::debug!(?unresolved, "Template left placeholders unresolved");
        }
    }

    filled
}

/// Returns the placeholder names (without braces) found in `template`,
/// in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            break;
        };
        let name = &after[..end];
        // A nested '{' means the outer brace was stray text.
        if let Some(inner) = name.rfind('{') {
            rest = &after[inner..];
            continue;
        }
        if !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !found.iter().any(|f| f == name)
        {
            found.push(name.to_string());
        }
        rest = &after[end + 1..];
    }

    found
}
