//! Ordering and membership.

use std::cmp::Ordering;

use super::Value;
use crate::errors::EvalError;

impl Value {
    /// Compare two values with JavaScript-like conversion.
    ///
    /// If both sides can be numeric they compare as decimals (`"10" > 9`);
    /// otherwise their canonical strings compare byte-wise (`"10" < "9a"`).
    pub fn compare_to(&self, other: &Value) -> Result<Ordering, EvalError> {
        let me = self.resolve()?;
        let them = other.resolve()?;
        if me.can_be_numeric()? && them.can_be_numeric()? {
            return Ok(me.as_decimal()?.cmp(&them.as_decimal()?));
        }
        Ok(me.as_string()?.cmp(&them.as_string()?))
    }

    /// Membership test behind `in` (`exact`) and `in~` (inexact).
    ///
    /// An array on the left is a subset test: every element must be in
    /// `other`, so `[]` is in anything. Any other value is in `other` when
    /// some element of `other.as_array()` compares equal to it and, for an
    /// exact test, has the same variant.
    pub fn contains_in(&self, other: &Value, exact: bool) -> Result<bool, EvalError> {
        self.is_member_of(&other.as_array()?, exact)
    }

    /// [`contains_in`](Self::contains_in) against an already materialized
    /// collection.
    pub fn is_member_of(&self, collection: &[Value], exact: bool) -> Result<bool, EvalError> {
        let me = self.resolve()?;
        if let Value::Array(items) = &me {
            for item in items.iter() {
                if !item.is_member_of(collection, exact)? {
                    return Ok(false);
                }
            }
            return Ok(true);
        }

        let kind = me.kind();
        for candidate in collection {
            let candidate = candidate.resolve()?;
            if exact && candidate.kind() != kind {
                continue;
            }
            if candidate.compare_to(&me)? == Ordering::Equal {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
