//! Substitution resolution.
//! Derives the closed set of template tokens from the normalized options.

use crate::options::NormalizedOptions;
use cruet::Inflector;
use indexmap::IndexMap;
use std::fmt;

/// Every token a template bundle may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Name,
    WebName,
    FileName,
    FileNameUnderscore,
    ClassName,
    PropertyName,
    ConstantName,
    NpmScope,
    Ui,
    Anchor,
    AnchorEnabled,
    AnchorName,
    AnchorNameUnderscore,
    AnchorClassName,
}

impl Token {
    pub const ALL: [Token; 14] = [
        Token::Name,
        Token::WebName,
        Token::FileName,
        Token::FileNameUnderscore,
        Token::ClassName,
        Token::PropertyName,
        Token::ConstantName,
        Token::NpmScope,
        Token::Ui,
        Token::Anchor,
        Token::AnchorEnabled,
        Token::AnchorName,
        Token::AnchorNameUnderscore,
        Token::AnchorClassName,
    ];

    /// Name of the token as written in templates.
    pub fn key(&self) -> &'static str {
        match self {
            Token::Name => "name",
            Token::WebName => "webName",
            Token::FileName => "fileName",
            Token::FileNameUnderscore => "fileNameUnderscore",
            Token::ClassName => "className",
            Token::PropertyName => "propertyName",
            Token::ConstantName => "constantName",
            Token::NpmScope => "npmScope",
            Token::Ui => "ui",
            Token::Anchor => "anchor",
            Token::AnchorEnabled => "anchorEnabled",
            Token::AnchorName => "anchorName",
            Token::AnchorNameUnderscore => "anchorNameUnderscore",
            Token::AnchorClassName => "anchorClassName",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Token name to replacement value, in [`Token::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    values: IndexMap<String, String>,
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn token(&self, token: Token) -> Option<&str> {
        self.get(token.key())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rendering context for the template engine.
    ///
    /// `anchorEnabled` is exposed as a boolean so templates can branch on it
    /// directly; every other token is a string.
    pub fn to_context(&self) -> serde_json::Value {
        let context = self
            .values
            .iter()
            .map(|(key, value)| {
                let value = if key == Token::AnchorEnabled.key() {
                    serde_json::Value::Bool(value == "true")
                } else {
                    serde_json::Value::String(value.clone())
                };
                (key.clone(), value)
            })
            .collect();
        serde_json::Value::Object(context)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubstitutionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SubstitutionMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Replaces every `-` with `_`.
pub fn underscore(name: &str) -> String {
    name.replace('-', "_")
}

/// Derives every token for a run.
///
/// `npm_scope` is the workspace package scope; when the workspace has none the
/// application name is used in its place.
pub fn resolve_substitutions(
    options: &NormalizedOptions,
    npm_scope: Option<&str>,
) -> SubstitutionMap {
    let web_name = options.web_name();
    let file_name = web_name.to_kebab_case();
    let anchor_name = options.anchor_name();

    Token::ALL
        .iter()
        .map(|token| {
            let value = match token {
                Token::Name | Token::WebName => web_name.to_string(),
                Token::FileName => file_name.clone(),
                Token::FileNameUnderscore => underscore(&file_name),
                Token::ClassName => web_name.to_pascal_case(),
                Token::PropertyName => web_name.to_camel_case(),
                Token::ConstantName => web_name.to_screaming_snake_case(),
                Token::NpmScope => npm_scope.unwrap_or(web_name).to_string(),
                Token::Ui => options.ui().to_string(),
                Token::Anchor => options.anchor().to_string(),
                Token::AnchorEnabled => options.anchor().is_enabled().to_string(),
                Token::AnchorName => anchor_name.to_string(),
                Token::AnchorNameUnderscore => underscore(anchor_name),
                Token::AnchorClassName => anchor_name.to_pascal_case(),
            };
            (token.key(), value)
        })
        .collect()
}
