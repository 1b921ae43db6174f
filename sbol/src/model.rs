//! Core value and schema types.
//!
//! Property values are RDF terms ([`Value`]): a [`Uri`] or a [`Literal`].
//! Each entity kind declares its slots as [`PropertyDescriptor`]s (typed
//! scalar or list properties) and [`OwnedDescriptor`]s (child collections).
//! Assignments arrive as a dynamic [`Input`] and are coerced by the descriptor.

use std::fmt;

use crate::error::{Error, Result};
use crate::kinds::ObjectKind;
use crate::vocab::XSD_INTEGER;

/// An absolute URI (or a `_:`-prefixed blank node label read from a graph).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uri(String);

impl Uri {
    /// Wraps a URI string.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Returns the URI text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the URI, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// True for blank node labels.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.starts_with("_:")
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Uri {
    fn from(uri: &str) -> Self {
        Self(uri.to_string())
    }
}

impl From<String> for Uri {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

impl PartialEq<str> for Uri {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Uri {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An RDF literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    lexical: String,
    datatype: Option<String>,
    language: Option<String>,
}

impl Literal {
    /// A plain string literal.
    pub fn new(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    /// A literal with an explicit datatype IRI.
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
            language: None,
        }
    }

    /// A language-tagged literal.
    pub fn tagged(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }

    /// The lexical form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.lexical
    }

    /// The datatype IRI, `None` for plain and language-tagged literals.
    #[must_use]
    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    /// The language tag, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Parses the lexical form as an integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.lexical.trim().parse().ok()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexical)
    }
}

impl From<&str> for Literal {
    fn from(lexical: &str) -> Self {
        Self::new(lexical)
    }
}

impl PartialEq<str> for Literal {
    fn eq(&self, other: &str) -> bool {
        self.lexical == other
    }
}

impl PartialEq<&str> for Literal {
    fn eq(&self, other: &&str) -> bool {
        self.lexical == *other
    }
}

/// A stored property value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A resource reference.
    Uri(Uri),
    /// A literal.
    Literal(Literal),
}

impl Value {
    /// The URI text or the literal's lexical form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Value::Uri(uri) => uri.as_str(),
            Value::Literal(lit) => lit.as_str(),
        }
    }

    /// Returns the URI if this value is one.
    #[must_use]
    pub fn as_uri(&self) -> Option<&Uri> {
        match self {
            Value::Uri(uri) => Some(uri),
            Value::Literal(_) => None,
        }
    }

    /// Returns the literal if this value is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Literal(lit) => Some(lit),
            Value::Uri(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Uri> for Value {
    fn eq(&self, other: &Uri) -> bool {
        self.as_uri() == Some(other)
    }
}

impl PartialEq<Literal> for Value {
    fn eq(&self, other: &Literal) -> bool {
        self.as_literal() == Some(other)
    }
}

/// A value offered for assignment, before coercion.
///
/// Built through `From` conversions so callers can pass strings, integers,
/// URIs, entities, options and vectors directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// No value (unset).
    Null,
    /// A string.
    Text(String),
    /// An integer.
    Int(i64),
    /// A URI.
    Uri(Uri),
    /// A sequence of inputs.
    List(Vec<Input>),
}

impl Input {
    fn describe(&self) -> &'static str {
        match self {
            Input::Null => "null",
            Input::Text(_) => "string",
            Input::Int(_) => "integer",
            Input::Uri(_) => "URI",
            Input::List(_) => "sequence",
        }
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Text(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Text(s)
    }
}

impl From<&String> for Input {
    fn from(s: &String) -> Self {
        Input::Text(s.clone())
    }
}

impl From<i64> for Input {
    fn from(i: i64) -> Self {
        Input::Int(i)
    }
}

impl From<i32> for Input {
    fn from(i: i32) -> Self {
        Input::Int(i64::from(i))
    }
}

impl From<Uri> for Input {
    fn from(uri: Uri) -> Self {
        Input::Uri(uri)
    }
}

impl From<&Uri> for Input {
    fn from(uri: &Uri) -> Self {
        Input::Uri(uri.clone())
    }
}

impl From<Literal> for Input {
    fn from(lit: Literal) -> Self {
        Input::Text(lit.lexical)
    }
}

impl From<&Value> for Input {
    fn from(value: &Value) -> Self {
        match value {
            Value::Uri(uri) => Input::Uri(uri.clone()),
            Value::Literal(lit) => Input::Text(lit.lexical.clone()),
        }
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Null, Into::into)
    }
}

impl<T: Into<Input>> From<Vec<T>> for Input {
    fn from(items: Vec<T>) -> Self {
        Input::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Input>> From<&[T]> for Input {
    fn from(items: &[T]) -> Self {
        Input::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Input>, const N: usize> From<[T; N]> for Input {
    fn from(items: [T; N]) -> Self {
        Input::List(items.into_iter().map(Into::into).collect())
    }
}

/// A cardinality bound: `'0'`, `'1'` or `'*'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cardinality {
    /// `'0'`.
    Zero,
    /// `'1'`.
    One,
    /// `'*'`.
    Many,
}

impl Cardinality {
    /// Parses `'0'`, `'1'` or `'*'`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for any other text.
    pub fn parse(text: &str) -> Result<Self> {
        match text {
            "0" => Ok(Cardinality::Zero),
            "1" => Ok(Cardinality::One),
            "*" => Ok(Cardinality::Many),
            other => Err(Error::InvalidArgument(format!(
                "cardinality must be '0', '1' or '*', got {other:?}"
            ))),
        }
    }

    /// The textual form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::Zero => "0",
            Cardinality::One => "1",
            Cardinality::Many => "*",
        }
    }
}

/// How a property's values are coerced and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Free text, stored as plain literals.
    Text,
    /// A URI naming a term from an external vocabulary (roles, types, encodings).
    Uri,
    /// A non-owning pointer to another SBOL entity.
    Reference,
    /// An integer, stored as an `xsd:integer` literal.
    Integer,
}

/// A typed property slot: predicate, cardinality, coercion and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Field name (e.g. `"roles"`).
    pub name: &'static str,
    /// Predicate IRI backing the slot.
    pub predicate: &'static str,
    /// Value coercion.
    pub kind: ValueKind,
    /// Lower cardinality bound.
    pub lower: Cardinality,
    /// Upper cardinality bound.
    pub upper: Cardinality,
    /// Allowed values; empty means unrestricted.
    pub allowed: &'static [&'static str],
    /// Values written when the slot is first bound on an owner.
    pub default: &'static [&'static str],
}

impl PropertyDescriptor {
    /// A `0..1` slot.
    #[must_use]
    pub const fn optional(name: &'static str, predicate: &'static str, kind: ValueKind) -> Self {
        Self::with_bounds(name, predicate, kind, Cardinality::Zero, Cardinality::One)
    }

    /// A `1..1` slot.
    #[must_use]
    pub const fn required(name: &'static str, predicate: &'static str, kind: ValueKind) -> Self {
        Self::with_bounds(name, predicate, kind, Cardinality::One, Cardinality::One)
    }

    /// A `0..*` slot.
    #[must_use]
    pub const fn list(name: &'static str, predicate: &'static str, kind: ValueKind) -> Self {
        Self::with_bounds(name, predicate, kind, Cardinality::Zero, Cardinality::Many)
    }

    /// A slot with explicit bounds.
    #[must_use]
    pub const fn with_bounds(
        name: &'static str,
        predicate: &'static str,
        kind: ValueKind,
        lower: Cardinality,
        upper: Cardinality,
    ) -> Self {
        Self {
            name,
            predicate,
            kind,
            lower,
            upper,
            allowed: &[],
            default: &[],
        }
    }

    /// Restricts the slot to `values`.
    #[must_use]
    pub const fn allowing(mut self, values: &'static [&'static str]) -> Self {
        self.allowed = values;
        self
    }

    /// Sets the values written when the slot is bound.
    #[must_use]
    pub const fn defaulting(mut self, values: &'static [&'static str]) -> Self {
        self.default = values;
        self
    }

    /// Builds a descriptor from textual cardinalities (`'0'`, `'1'`, `'*'`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either bound does not parse or the
    /// pair is not a valid range.
    pub fn parse(
        name: &'static str,
        predicate: &'static str,
        kind: ValueKind,
        lower: &str,
        upper: &str,
    ) -> Result<Self> {
        let descriptor = Self::with_bounds(
            name,
            predicate,
            kind,
            Cardinality::parse(lower)?,
            Cardinality::parse(upper)?,
        );
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Checks that the bounds form a valid range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the lower bound is `'*'`, the upper
    /// bound is `'0'`, or lower exceeds upper.
    pub fn validate(&self) -> Result<()> {
        if self.lower == Cardinality::Many
            || self.upper == Cardinality::Zero
            || self.lower > self.upper
        {
            return Err(Error::InvalidArgument(format!(
                "{}: invalid cardinality {}..{}",
                self.name,
                self.lower.as_str(),
                self.upper.as_str()
            )));
        }
        Ok(())
    }

    /// True if the slot holds a sequence.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.upper == Cardinality::Many
    }

    /// The default values as an assignment.
    #[must_use]
    pub fn default_input(&self) -> Input {
        let items: Vec<Input> = self
            .default
            .iter()
            .map(|v| match self.kind {
                ValueKind::Integer => v.parse().map_or_else(|_| Input::from(*v), Input::Int),
                ValueKind::Uri | ValueKind::Reference => Input::Uri(Uri::from(*v)),
                ValueKind::Text => Input::from(*v),
            })
            .collect();
        match (self.is_list(), items.len()) {
            (_, 0) if self.is_list() => Input::List(Vec::new()),
            (_, 0) => Input::Null,
            (false, 1) => items.into_iter().next().unwrap_or(Input::Null),
            _ => Input::List(items),
        }
    }

    /// Coerces an assignment into the stored values.
    ///
    /// The whole input is validated before anything is returned, so a rejected
    /// element leaves the caller free to keep the previous values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when the input's shape or element types
    /// do not fit the slot, and [`Error::InvalidArgument`] for values outside
    /// the allowed set.
    pub fn coerce(&self, input: Input) -> Result<Vec<Value>> {
        let values = if self.is_list() {
            match input {
                Input::Null if self.nullable_elements() => Vec::new(),
                Input::Null => {
                    return Err(Error::TypeMismatch(format!(
                        "{} is a list property; assign an empty sequence to clear it",
                        self.name
                    )))
                }
                Input::List(items) => {
                    let mut values = Vec::with_capacity(items.len());
                    for item in items {
                        values.extend(self.coerce_element(item)?);
                    }
                    values
                }
                scalar => self.coerce_element(scalar)?.into_iter().collect(),
            }
        } else {
            match input {
                Input::List(_) => {
                    return Err(Error::TypeMismatch(format!(
                        "{} holds a single value; cannot assign a sequence",
                        self.name
                    )))
                }
                Input::Null => Vec::new(),
                scalar => self.coerce_element(scalar)?.into_iter().collect(),
            }
        };
        if !self.is_list() && values.is_empty() && self.lower == Cardinality::One {
            return Err(Error::TypeMismatch(format!(
                "{} is required and cannot be unset",
                self.name
            )));
        }
        self.check_allowed(&values)?;
        Ok(values)
    }

    /// Coerces one element. `Ok(None)` means the element resolves to "absent".
    pub(crate) fn coerce_element(&self, input: Input) -> Result<Option<Value>> {
        match (self.kind, input) {
            (_, Input::List(_)) => Err(Error::TypeMismatch(format!(
                "{}: nested sequences are not allowed",
                self.name
            ))),
            (ValueKind::Text, Input::Text(s)) => Ok(Some(Value::Literal(Literal::new(s)))),
            (ValueKind::Text, Input::Uri(uri)) => {
                Ok(Some(Value::Literal(Literal::new(uri.into_string()))))
            }
            (ValueKind::Text, Input::Null) if !self.is_list() => Ok(None),
            (ValueKind::Uri | ValueKind::Reference, Input::Null) => Ok(None),
            (ValueKind::Uri | ValueKind::Reference, Input::Text(s)) if s.is_empty() => Ok(None),
            (ValueKind::Uri | ValueKind::Reference, Input::Text(s)) => {
                Ok(Some(Value::Uri(Uri::new(s))))
            }
            (ValueKind::Uri | ValueKind::Reference, Input::Uri(uri)) if uri.as_str().is_empty() => {
                Ok(None)
            }
            (ValueKind::Uri | ValueKind::Reference, Input::Uri(uri)) => Ok(Some(Value::Uri(uri))),
            (ValueKind::Integer, Input::Int(i)) => {
                Ok(Some(Value::Literal(Literal::typed(i.to_string(), XSD_INTEGER))))
            }
            (ValueKind::Integer, Input::Null) if !self.is_list() => Ok(None),
            (kind, other) => Err(Error::TypeMismatch(format!(
                "{} expects {:?} values, got {}",
                self.name,
                kind,
                other.describe()
            ))),
        }
    }

    pub(crate) fn check_allowed(&self, values: &[Value]) -> Result<()> {
        if self.allowed.is_empty() {
            return Ok(());
        }
        match values.iter().find(|v| !self.allowed.contains(&v.as_str())) {
            Some(bad) => Err(Error::InvalidArgument(format!(
                "{} does not accept {}",
                self.name, bad
            ))),
            None => Ok(()),
        }
    }

    fn nullable_elements(&self) -> bool {
        matches!(self.kind, ValueKind::Uri | ValueKind::Reference)
    }
}

/// An owned-object slot: the predicate linking parent to children and the
/// kinds of children it may hold (the first is the default for `create`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnedDescriptor {
    /// Field name (e.g. `"components"`).
    pub name: &'static str,
    /// Predicate IRI linking parent and child.
    pub predicate: &'static str,
    /// Child kinds accepted by the collection.
    pub kinds: &'static [ObjectKind],
}

impl OwnedDescriptor {
    /// Creates an owned-object slot.
    #[must_use]
    pub const fn new(
        name: &'static str,
        predicate: &'static str,
        kinds: &'static [ObjectKind],
    ) -> Self {
        Self {
            name,
            predicate,
            kinds,
        }
    }
}

/// The result of reading a property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue<'a> {
    /// A `..1` property.
    Scalar(Option<&'a Value>),
    /// A `..*` property.
    List(&'a [Value]),
}

impl<'a> PropertyValue<'a> {
    /// The scalar value, or the first element of a list.
    #[must_use]
    pub fn first(&self) -> Option<&'a Value> {
        match *self {
            PropertyValue::Scalar(value) => value,
            PropertyValue::List(values) => values.first(),
        }
    }

    /// Number of values present.
    #[must_use]
    pub fn len(&self) -> usize {
        match *self {
            PropertyValue::Scalar(value) => usize::from(value.is_some()),
            PropertyValue::List(values) => values.len(),
        }
    }

    /// True if no value is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
