//! Argument model for message lookups
//!
//! Lookup arguments form a closed, discriminated model: every argument is
//! either a plain substitution value or a pluralization directive, inspected
//! via pattern matching rather than runtime type probing.

use crate::error::{FormatError, FormatResult};
use crate::pluralization::PluralRule;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar value substituted into a positional placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormatValue {
    /// Text substituted verbatim
    String(String),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean, rendered as `true`/`false`
    Bool(bool),
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FormatValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FormatValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FormatValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FormatValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for FormatValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for FormatValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FormatValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A count-dependent phrase: the count, the candidate phrase templates
/// indexed by pluralization-rule outcome, and any extra substitution values.
///
/// When a lookup receives a `PluralArgument` as its sole argument, the
/// substitution sequence is rebuilt as `[count, ...arguments]`, so the count
/// always occupies position `{0}` in the selected form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluralArgument {
    /// Count the pluralization rule is applied to
    pub count: i64,
    /// Candidate phrase templates, indexed by rule outcome
    pub forms: Vec<String>,
    /// Extra substitution values, occupying positions `{1}` onward
    pub arguments: Vec<FormatValue>,
}

impl PluralArgument {
    /// Create a plural argument from a count and its candidate forms.
    pub fn new<I, S>(count: i64, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            count,
            forms: forms.into_iter().map(Into::into).collect(),
            arguments: Vec::new(),
        }
    }

    /// Append an extra substitution value.
    pub fn add_argument<V>(mut self, value: V) -> Self
    where
        V: Into<FormatValue>,
    {
        self.arguments.push(value.into());
        self
    }

    /// Select the phrase form for this count under the given rule.
    pub fn select_form(&self, rule: PluralRule) -> FormatResult<&str> {
        let index = rule(self.count);
        self.forms
            .get(index)
            .map(String::as_str)
            .ok_or(FormatError::MissingPluralForm {
                index,
                available: self.forms.len(),
            })
    }

    /// Substitution sequence for the selected form: the count first, then
    /// the extra arguments.
    pub fn format_values(&self) -> Vec<FormatValue> {
        let mut values = Vec::with_capacity(self.arguments.len() + 1);
        values.push(FormatValue::Int(self.count));
        values.extend(self.arguments.iter().cloned());
        values
    }
}

/// A single lookup argument: either a plain substitution value or a
/// pluralization directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormatArgument {
    /// Plain substitution value
    Value(FormatValue),
    /// Pluralization directive
    Plural(PluralArgument),
}

impl FormatArgument {
    /// Scalar rendering of this argument for positional substitution.
    ///
    /// A pluralization directive outside the single-argument position
    /// substitutes its count, the only deterministic scalar it carries.
    pub fn scalar_value(&self) -> FormatValue {
        match self {
            Self::Value(value) => value.clone(),
            Self::Plural(plural) => FormatValue::Int(plural.count),
        }
    }
}

impl From<PluralArgument> for FormatArgument {
    fn from(value: PluralArgument) -> Self {
        Self::Plural(value)
    }
}

impl From<FormatValue> for FormatArgument {
    fn from(value: FormatValue) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for FormatArgument {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for FormatArgument {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for FormatArgument {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for FormatArgument {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<u32> for FormatArgument {
    fn from(value: u32) -> Self {
        Self::Value(value.into())
    }
}

impl From<f64> for FormatArgument {
    fn from(value: f64) -> Self {
        Self::Value(value.into())
    }
}

impl From<bool> for FormatArgument {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

/// Macro to build a lookup argument vector from mixed literals.
#[macro_export]
macro_rules! localizer_args {
    () => {
        ::std::vec::Vec::<$crate::FormatArgument>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::FormatArgument::from($value)),+]
    };
}
