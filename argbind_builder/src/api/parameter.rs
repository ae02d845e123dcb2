use crate::api::{GenericCapturable, InvalidConversion};
use crate::constant::{LONG_PREFIX, SHORT_PREFIX};
use crate::model::Arity;
use crate::registry::AnonymousCapturable;

pub(crate) struct AnonymousCapture<'a, T: 'a> {
    field: Box<dyn GenericCapturable<'a, T> + 'a>,
}

impl<'a, T> AnonymousCapture<'a, T> {
    pub(crate) fn bind(field: impl GenericCapturable<'a, T> + 'a) -> Self {
        Self {
            field: Box::new(field),
        }
    }
}

impl<'a, T> AnonymousCapturable for AnonymousCapture<'a, T> {
    fn matched(&mut self) {
        self.field.matched();
    }

    fn capture(&mut self, value: &str) -> Result<(), InvalidConversion> {
        self.field.capture(value)
    }
}

/// The pair of tokens a switch is known by: `-<short>` and `--<long>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SwitchNames {
    short: char,
    long: String,
}

impl SwitchNames {
    pub(crate) fn new(short: char, long: impl Into<String>) -> Self {
        Self {
            short,
            long: long.into(),
        }
    }

    pub(crate) fn short_token(&self) -> String {
        format!("{SHORT_PREFIX}{s}", s = self.short)
    }

    pub(crate) fn long_token(&self) -> String {
        format!("{LONG_PREFIX}{l}", l = self.long)
    }

    pub(crate) fn tokens(&self) -> [String; 2] {
        [self.short_token(), self.long_token()]
    }
}

impl std::fmt::Display for SwitchNames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.short_token(), self.long_token())
    }
}

pub(crate) struct ParameterInner<'a, T> {
    pub(crate) names: SwitchNames,
    pub(crate) arity: Arity,
    pub(crate) field: AnonymousCapture<'a, T>,
}

impl<'a, T> std::fmt::Debug for ParameterInner<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Switch[{t}, {arity}, {names}]",
            t = std::any::type_name::<T>(),
            arity = self.arity,
            names = self.names,
        )
    }
}

/// A switch parameter: a destination field known by a short (`-x`) and a long (`--name`) token.
///
/// The field decides the [`Arity`] of the switch:
/// * [`Switch`](crate::Switch): a flag, consuming no value token.
/// * [`Scalar`](crate::Scalar): a value, overwriting the destination.
/// * [`Collection`](crate::Collection): a value, appending to the destination.
///
/// Unlike [`SwitchParser::add_switch`](crate::SwitchParser::add_switch), this lets the arity be chosen independently of the type.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{Parameter, Scalar, Switch, SwitchParser};
///
/// let mut level: u8 = 0;
/// let mut confirm: bool = false;
/// let mut parser = SwitchParser::new(&["--loud", "-c", "true"])
///     .add(Parameter::new(Switch::new(&mut level, 3), 'l', "loud"))
///     .add(Parameter::new(Scalar::new(&mut confirm), 'c', "confirm"));
///
/// assert_eq!(parser.parse(), Ok(true));
/// drop(parser);
/// assert_eq!(level, 3);
/// assert!(confirm);
/// ```
pub struct Parameter<'a, T>(ParameterInner<'a, T>);

impl<'a, T> Parameter<'a, T> {
    /// Create a switch parameter, known by the tokens `-<short>` and `--<long>`.
    pub fn new(
        field: impl GenericCapturable<'a, T> + 'a,
        short: char,
        long: impl Into<String>,
    ) -> Self {
        let arity = field.arity();
        Self(ParameterInner {
            names: SwitchNames::new(short, long),
            arity,
            field: AnonymousCapture::bind(field),
        })
    }

    pub(crate) fn consume(self) -> ParameterInner<'a, T> {
        self.0
    }
}
