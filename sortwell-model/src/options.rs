//! Delimiters and token vocabularies used by the sort order text codec.
//!
//! Every vocabulary is an ordered list of accepted tokens. The first entry is
//! the canonical token written by the serializer; the rest are aliases that
//! the parser also accepts. Matching is case-insensitive.

use once_cell::sync::Lazy;

use crate::error::{ModelError, Result};

static DEFAULTS: Lazy<TextOptions> = Lazy::new(TextOptions::default);

/// Immutable codec configuration. Construct with [`TextOptions::builder`] or
/// use [`TextOptions::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TextOptionsDocument"))]
pub struct TextOptions {
    entry_separator: String,
    field_separator: String,
    asc_tokens: Vec<String>,
    desc_tokens: Vec<String>,
    case_insensitive_tokens: Vec<String>,
    case_sensitive_tokens: Vec<String>,
    nulls_first_tokens: Vec<String>,
    nulls_last_tokens: Vec<String>,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            entry_separator: ";".to_string(),
            field_separator: ",".to_string(),
            asc_tokens: tokens(&["asc", "true", "on", "1"]),
            desc_tokens: tokens(&["desc", "false", "off", "0"]),
            case_insensitive_tokens: tokens(&[
                "true",
                "1",
                "on",
                "i",
                "insensitive",
            ]),
            case_sensitive_tokens: tokens(&[
                "false",
                "0",
                "off",
                "s",
                "sensitive",
            ]),
            nulls_first_tokens: tokens(&["true"]),
            nulls_last_tokens: tokens(&["false"]),
        }
    }
}

impl TextOptions {
    /// Shared instance holding the default configuration.
    pub fn defaults() -> &'static TextOptions {
        &DEFAULTS
    }

    pub fn builder() -> TextOptionsBuilder {
        TextOptionsBuilder::default()
    }

    /// Separator between sort orders, `;` by default.
    pub fn entry_separator(&self) -> &str {
        &self.entry_separator
    }

    /// Separator between the arguments of one sort order, `,` by default.
    pub fn field_separator(&self) -> &str {
        &self.field_separator
    }

    pub fn asc_token(&self) -> &str {
        canonical(&self.asc_tokens, "asc")
    }

    pub fn desc_token(&self) -> &str {
        canonical(&self.desc_tokens, "desc")
    }

    pub fn direction_token(&self, ascending: bool) -> &str {
        if ascending {
            self.asc_token()
        } else {
            self.desc_token()
        }
    }

    pub fn case_insensitive_token(&self) -> &str {
        canonical(&self.case_insensitive_tokens, "true")
    }

    pub fn case_sensitive_token(&self) -> &str {
        canonical(&self.case_sensitive_tokens, "false")
    }

    pub fn case_token(&self, case_insensitive: bool) -> &str {
        if case_insensitive {
            self.case_insensitive_token()
        } else {
            self.case_sensitive_token()
        }
    }

    pub fn nulls_first_token(&self) -> &str {
        canonical(&self.nulls_first_tokens, "true")
    }

    pub fn nulls_last_token(&self) -> &str {
        canonical(&self.nulls_last_tokens, "false")
    }

    pub fn nulls_token(&self, nulls_first: bool) -> &str {
        if nulls_first {
            self.nulls_first_token()
        } else {
            self.nulls_last_token()
        }
    }

    /// Direction for a direction slot. Only a descending token turns the
    /// default (ascending) around.
    pub fn is_ascending(&self, token: &str) -> bool {
        !contains_token(&self.desc_tokens, token)
    }

    /// Case handling for a case slot. Only a case-sensitive token turns the
    /// default (case-insensitive) around.
    pub fn is_case_insensitive(&self, token: &str) -> bool {
        !contains_token(&self.case_sensitive_tokens, token)
    }

    /// Null placement for a nulls slot. Only a nulls-first token turns the
    /// default (nulls last) around.
    pub fn is_nulls_first(&self, token: &str) -> bool {
        contains_token(&self.nulls_first_tokens, token)
    }

    /// Checks the invariants the codec relies on.
    pub fn validated(self) -> Result<Self> {
        if self.entry_separator.is_empty() || self.field_separator.is_empty() {
            return Err(ModelError::InvalidOptions(
                "separators must not be empty".to_string(),
            ));
        }
        if self.entry_separator.contains(self.field_separator.as_str())
            || self.field_separator.contains(self.entry_separator.as_str())
        {
            return Err(ModelError::InvalidOptions(format!(
                "entry separator [{}] and field separator [{}] overlap",
                self.entry_separator, self.field_separator
            )));
        }

        let slots = [
            ("asc", &self.asc_tokens, "desc", &self.desc_tokens),
            (
                "case insensitive",
                &self.case_insensitive_tokens,
                "case sensitive",
                &self.case_sensitive_tokens,
            ),
            (
                "nulls first",
                &self.nulls_first_tokens,
                "nulls last",
                &self.nulls_last_tokens,
            ),
        ];
        for (name, left, other_name, right) in slots {
            check_vocabulary(name, left, &self)?;
            check_vocabulary(other_name, right, &self)?;
            if let Some(token) = left.iter().find(|t| contains_token(right, t)) {
                return Err(ModelError::InvalidOptions(format!(
                    "token [{token}] is both a {name} and a {other_name} token"
                )));
            }
        }
        Ok(self)
    }
}

/// Builder for [`TextOptions`]; unset options keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct TextOptionsBuilder {
    options: TextOptions,
}

impl TextOptionsBuilder {
    pub fn entry_separator(mut self, separator: impl Into<String>) -> Self {
        self.options.entry_separator = separator.into();
        self
    }

    pub fn field_separator(mut self, separator: impl Into<String>) -> Self {
        self.options.field_separator = separator.into();
        self
    }

    pub fn asc_tokens<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.asc_tokens = collect(values);
        self
    }

    pub fn desc_tokens<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.desc_tokens = collect(values);
        self
    }

    pub fn case_insensitive_tokens<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.case_insensitive_tokens = collect(values);
        self
    }

    pub fn case_sensitive_tokens<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.case_sensitive_tokens = collect(values);
        self
    }

    pub fn nulls_first_tokens<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.nulls_first_tokens = collect(values);
        self
    }

    pub fn nulls_last_tokens<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.nulls_last_tokens = collect(values);
        self
    }

    /// Validates and returns the options.
    pub fn build(self) -> Result<TextOptions> {
        self.options.validated()
    }
}

/// Configuration file shape; absent keys fall back to the defaults.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct TextOptionsDocument {
    entry_separator: String,
    field_separator: String,
    asc_tokens: Vec<String>,
    desc_tokens: Vec<String>,
    case_insensitive_tokens: Vec<String>,
    case_sensitive_tokens: Vec<String>,
    nulls_first_tokens: Vec<String>,
    nulls_last_tokens: Vec<String>,
}

#[cfg(feature = "serde")]
impl Default for TextOptionsDocument {
    fn default() -> Self {
        let d = TextOptions::default();
        TextOptionsDocument {
            entry_separator: d.entry_separator,
            field_separator: d.field_separator,
            asc_tokens: d.asc_tokens,
            desc_tokens: d.desc_tokens,
            case_insensitive_tokens: d.case_insensitive_tokens,
            case_sensitive_tokens: d.case_sensitive_tokens,
            nulls_first_tokens: d.nulls_first_tokens,
            nulls_last_tokens: d.nulls_last_tokens,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<TextOptionsDocument> for TextOptions {
    type Error = ModelError;

    fn try_from(doc: TextOptionsDocument) -> Result<Self> {
        TextOptions {
            entry_separator: doc.entry_separator,
            field_separator: doc.field_separator,
            asc_tokens: doc.asc_tokens,
            desc_tokens: doc.desc_tokens,
            case_insensitive_tokens: doc.case_insensitive_tokens,
            case_sensitive_tokens: doc.case_sensitive_tokens,
            nulls_first_tokens: doc.nulls_first_tokens,
            nulls_last_tokens: doc.nulls_last_tokens,
        }
        .validated()
    }
}

fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn collect<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

fn canonical<'a>(tokens: &'a [String], fallback: &'a str) -> &'a str {
    tokens.first().map(String::as_str).unwrap_or(fallback)
}

fn contains_token(tokens: &[String], value: &str) -> bool {
    let value = value.trim().to_lowercase();
    !value.is_empty() && tokens.iter().any(|t| t.to_lowercase() == value)
}

fn check_vocabulary(
    name: &str,
    tokens: &[String],
    options: &TextOptions,
) -> Result<()> {
    if tokens.is_empty() {
        return Err(ModelError::InvalidOptions(format!(
            "no {name} token configured"
        )));
    }
    for token in tokens {
        if token.trim().is_empty() {
            return Err(ModelError::InvalidOptions(format!(
                "blank {name} token"
            )));
        }
        // Slots are trimmed before matching.
        if token.trim() != token {
            return Err(ModelError::InvalidOptions(format!(
                "{name} token [{token}] has surrounding whitespace"
            )));
        }
        if token.contains(options.entry_separator.as_str())
            || token.contains(options.field_separator.as_str())
        {
            return Err(ModelError::InvalidOptions(format!(
                "{name} token [{token}] contains a separator"
            )));
        }
    }
    Ok(())
}
