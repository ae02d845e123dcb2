use std::any::{Any, TypeId};
use std::str::FromStr;
use thiserror::Error;

use crate::model::Arity;

/// Behaviour to capture an explicit generic type T from an input `&str`.
///
/// We use this at the bottom of the switch parser object graph so the compiler can maintain each destination's type.
pub trait GenericCapturable<'a, T> {
    /// Declare that the switch has been matched.
    fn matched(&mut self);

    /// Capture a value into the generic type T for this switch.
    fn capture(&mut self, token: &str) -> Result<(), InvalidConversion>;

    /// Get the `Arity` for this implementation.
    fn arity(&self) -> Arity;
}

/// A token could not be converted into the destination type (via [`convert`]).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
pub struct InvalidConversion {
    /// The offending token.
    pub token: String,
    /// The name of the destination type.
    pub type_name: &'static str,
}

impl InvalidConversion {
    pub(crate) fn of<T>(token: &str) -> Self {
        Self {
            token: token.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Convert a token into `T`.
///
/// `bool` accepts `1`, `true`, `0` and `false`; every other type goes through [`std::str::FromStr`].
pub fn convert<T>(token: &str) -> Result<T, InvalidConversion>
where
    T: FromStr + 'static,
{
    if TypeId::of::<T>() == TypeId::of::<bool>() {
        let value: Box<dyn Any> = match token {
            "1" | "true" => Box::new(true),
            "0" | "false" => Box::new(false),
            _ => return Err(InvalidConversion::of::<T>(token)),
        };

        return Ok(*value
            .downcast::<T>()
            .expect("internal error - must be able to downcast the bool conversion"));
    }

    T::from_str(token).map_err(|_| InvalidConversion::of::<T>(token))
}
