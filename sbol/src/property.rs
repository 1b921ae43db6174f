//! Property tables: the predicate → values mapping every entity owns.
//!
//! A [`PropertyTable`] is untyped storage. Typing happens at the edges: every
//! write goes through a [`PropertyDescriptor`], which validates the whole
//! assignment before the table is touched.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::model::{Input, PropertyDescriptor, PropertyValue, Value};

/// Ordered mapping from predicate IRI to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyTable {
    values: IndexMap<String, Vec<Value>>,
}

impl PropertyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the predicate has an entry (possibly empty).
    #[must_use]
    pub fn contains(&self, predicate: &str) -> bool {
        self.values.contains_key(predicate)
    }

    /// Values stored under `predicate`; empty if absent.
    #[must_use]
    pub fn values(&self, predicate: &str) -> &[Value] {
        self.values.get(predicate).map_or(&[], Vec::as_slice)
    }

    /// Iterates `(predicate, values)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.values.iter().map(|(p, v)| (p.as_str(), v.as_slice()))
    }

    /// Number of predicates with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no predicate has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Registers a slot on this table.
    ///
    /// The descriptor and its default are validated first; only then is a
    /// default entry inserted for the predicate, and only if none exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an invalid descriptor and
    /// [`Error::TypeMismatch`] if `default` does not fit it.
    pub fn bind(&mut self, descriptor: &PropertyDescriptor, default: Input) -> Result<()> {
        descriptor.validate()?;
        let initial = match default {
            Input::Null => Vec::new(),
            other => descriptor.coerce(other)?,
        };
        self.values
            .entry(descriptor.predicate.to_string())
            .or_insert(initial);
        Ok(())
    }

    /// Reads a slot: a scalar for `..1` descriptors, a slice for `..*`.
    #[must_use]
    pub fn get(&self, descriptor: &PropertyDescriptor) -> PropertyValue<'_> {
        let values = self.values(descriptor.predicate);
        if descriptor.is_list() {
            PropertyValue::List(values)
        } else {
            PropertyValue::Scalar(values.first())
        }
    }

    /// Replaces a slot's values. Nothing is written if validation fails.
    ///
    /// # Errors
    ///
    /// Propagates coercion errors from [`PropertyDescriptor::coerce`].
    pub fn set(&mut self, descriptor: &PropertyDescriptor, input: Input) -> Result<()> {
        let values = descriptor.coerce(input)?;
        self.values.insert(descriptor.predicate.to_string(), values);
        Ok(())
    }

    /// Appends one value to a list slot. Inputs that resolve to "absent" (a
    /// null reference) are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] on a scalar slot or a value of the wrong
    /// type, [`Error::InvalidArgument`] for a disallowed value.
    pub fn add(&mut self, descriptor: &PropertyDescriptor, input: Input) -> Result<()> {
        Self::require_list(descriptor, "add")?;
        if let Some(value) = descriptor.coerce_element(input)? {
            descriptor.check_allowed(std::slice::from_ref(&value))?;
            self.values
                .entry(descriptor.predicate.to_string())
                .or_default()
                .push(value);
        }
        Ok(())
    }

    /// Removes one element from a list slot.
    ///
    /// With `None` the first element is removed; on an empty list this is a
    /// no-op returning `Ok(None)`. With `Some(index)` the element at that
    /// position is removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] on a scalar slot and [`Error::NotFound`]
    /// when `index` is out of range.
    pub fn remove(
        &mut self,
        descriptor: &PropertyDescriptor,
        index: Option<usize>,
    ) -> Result<Option<Value>> {
        Self::require_list(descriptor, "remove")?;
        let values = self
            .values
            .entry(descriptor.predicate.to_string())
            .or_default();
        match index {
            None if values.is_empty() => Ok(None),
            None => Ok(Some(values.remove(0))),
            Some(i) if i < values.len() => Ok(Some(values.remove(i))),
            Some(i) => Err(Error::not_found(descriptor.name, format!("index {i}"))),
        }
    }

    /// Removes the first element equal to `value` from a list slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] on a scalar slot and [`Error::NotFound`]
    /// when no element matches.
    pub fn remove_value(&mut self, descriptor: &PropertyDescriptor, value: &str) -> Result<Value> {
        Self::require_list(descriptor, "remove")?;
        let values = self
            .values
            .get_mut(descriptor.predicate)
            .ok_or_else(|| Error::not_found(descriptor.name, value))?;
        let position = values
            .iter()
            .position(|v| v.as_str() == value)
            .ok_or_else(|| Error::not_found(descriptor.name, value))?;
        Ok(values.remove(position))
    }

    /// Writes values without coercion; used when loading a graph.
    pub(crate) fn push_raw(&mut self, predicate: &str, value: Value) {
        self.values
            .entry(predicate.to_string())
            .or_default()
            .push(value);
    }

    /// Overwrites a slot without coercion.
    pub(crate) fn put_raw(&mut self, predicate: &str, values: Vec<Value>) {
        self.values.insert(predicate.to_string(), values);
    }

    fn require_list(descriptor: &PropertyDescriptor, op: &str) -> Result<()> {
        if descriptor.is_list() {
            Ok(())
        } else {
            Err(Error::TypeMismatch(format!(
                "cannot {op} on {}: it holds a single value",
                descriptor.name
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::model::{Literal, ValueKind};
    use crate::vocab::{SO_CIRCULAR, SO_PLASMID};

    const ROLES: PropertyDescriptor =
        PropertyDescriptor::list("roles", "http://sbols.org/v2#role", ValueKind::Uri);
    const TESTING: PropertyDescriptor =
        PropertyDescriptor::list("testing", "http://sbols.org/v2#Testing", ValueKind::Text);
    const SINGLE: PropertyDescriptor =
        PropertyDescriptor::optional("single", "http://sbols.org/v2#Single", ValueKind::Text);

    #[test]
    fn bind_inserts_default_once() {
        let mut table = PropertyTable::new();
        assert!(!table.contains(TESTING.predicate));
        table.bind(&TESTING, Input::from("foo")).unwrap();
        assert!(table.contains(TESTING.predicate));
        assert_eq!(table.values(TESTING.predicate), [Value::Literal("foo".into())]);
        table.bind(&TESTING, Input::from("bar")).unwrap();
        assert_eq!(table.values(TESTING.predicate).len(), 1);
    }

    #[test]
    fn bind_rejects_default_before_writing() {
        let mut table = PropertyTable::new();
        let err = table.bind(&SINGLE, Input::from(vec!["a", "b"])).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TypeMismatch);
        assert!(!table.contains(SINGLE.predicate));
    }

    #[test]
    fn failed_list_assignment_keeps_previous_values() {
        let mut table = PropertyTable::new();
        table.set(&TESTING, Input::from(vec!["foo", "bar"])).unwrap();
        let bad = Input::List(vec![Input::from("baz"), Input::from(3)]);
        assert!(table.set(&TESTING, bad).is_err());
        assert_eq!(table.values(TESTING.predicate).len(), 2);
    }

    #[test]
    fn add_then_remove_first() {
        let mut table = PropertyTable::new();
        table.set(&ROLES, Input::from(vec![SO_PLASMID])).unwrap();
        table.add(&ROLES, Input::from(SO_CIRCULAR)).unwrap();
        assert_eq!(table.get(&ROLES).len(), 2);
        let removed = table.remove(&ROLES, None).unwrap();
        assert_eq!(removed.as_ref().map(Value::as_str), Some(SO_PLASMID));
        assert_eq!(table.values(ROLES.predicate), [Value::Uri(SO_CIRCULAR.into())]);
    }

    #[test]
    fn remove_policies() {
        let mut table = PropertyTable::new();
        assert_eq!(table.remove(&ROLES, None).unwrap(), None);
        assert_eq!(
            table.remove(&ROLES, Some(0)).unwrap_err().code(),
            ErrorCode::NotFound
        );
        assert_eq!(
            table.remove_value(&ROLES, SO_PLASMID).unwrap_err().code(),
            ErrorCode::NotFound
        );
        table.set(&ROLES, Input::from(vec![SO_PLASMID, SO_CIRCULAR])).unwrap();
        table.remove_value(&ROLES, SO_CIRCULAR).unwrap();
        assert_eq!(table.values(ROLES.predicate).len(), 1);
    }

    #[test]
    fn scalar_slots_refuse_list_operations() {
        let mut table = PropertyTable::new();
        assert_eq!(
            table.add(&SINGLE, Input::from("x")).unwrap_err().code(),
            ErrorCode::TypeMismatch
        );
        assert_eq!(
            table.remove(&SINGLE, None).unwrap_err().code(),
            ErrorCode::TypeMismatch
        );
    }

    #[test]
    fn get_shape_follows_descriptor() {
        let mut table = PropertyTable::new();
        table.set(&SINGLE, Input::from("foo")).unwrap();
        assert_eq!(
            table.get(&SINGLE),
            PropertyValue::Scalar(Some(&Value::Literal(Literal::new("foo"))))
        );
        table.set(&SINGLE, Input::Null).unwrap();
        assert_eq!(table.get(&SINGLE), PropertyValue::Scalar(None));
        assert_eq!(table.get(&TESTING), PropertyValue::List(&[]));
    }
}
