use std::collections::{HashSet, VecDeque};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::api::capture::*;
use crate::model::Arity;
use crate::prelude::Collectable;

/// A value switch whose destination is overwritten by each occurrence (precisely 1 value).
pub struct Scalar<'a, T> {
    variable: &'a mut T,
}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar switch field.
    pub fn new(variable: &'a mut T) -> Self {
        Self { variable }
    }
}

impl<'a, T> GenericCapturable<'a, T> for Scalar<'a, T>
where
    T: FromStr + 'static,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidConversion> {
        let value = convert::<T>(token)?;
        *self.variable = value;
        Ok(())
    }

    fn arity(&self) -> Arity {
        Arity::Value
    }
}

/// A flag switch which, when present, overwrites its destination with a fixed target (precisely 0 values).
pub struct Switch<'a, T> {
    variable: &'a mut T,
    target: T,
}

impl<'a, T> Switch<'a, T> {
    /// Create a flag switch field.
    /// Every match writes a copy of `target` into the `variable`.
    pub fn new(variable: &'a mut T, target: T) -> Self {
        Self { variable, target }
    }
}

impl<'a, T> GenericCapturable<'a, T> for Switch<'a, T>
where
    T: Clone,
{
    fn matched(&mut self) {
        *self.variable = self.target.clone();
    }

    fn capture(&mut self, _token: &str) -> Result<(), InvalidConversion> {
        unreachable!("internal error - must not capture on a Switch");
    }

    fn arity(&self) -> Arity {
        Arity::Flag
    }
}

/// A value switch whose destination accumulates every occurrence, in order (precisely 1 value each).
pub struct Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    variable: &'a mut C,
    _phantom: PhantomData<T>,
}

impl<'a, C, T> Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    /// Create a collection switch field.
    pub fn new(variable: &'a mut C) -> Self {
        Self {
            variable,
            _phantom: PhantomData,
        }
    }
}

impl<'a, C, T> GenericCapturable<'a, T> for Collection<'a, C, T>
where
    T: FromStr + 'static,
    C: 'a + Collectable<T>,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidConversion> {
        let value = convert::<T>(token)?;
        self.variable.add(value);
        Ok(())
    }

    fn arity(&self) -> Arity {
        Arity::Value
    }
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Collectable<T> for VecDeque<T> {
    fn add(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T: Eq + std::hash::Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }
}
