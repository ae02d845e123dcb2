use std::any::Any;
use std::env;
use std::str::FromStr;

use crate::api::{Collection, InvalidConversion, Parameter, ParameterInner, Scalar, Switch};
use crate::parser::{invoke, ConsoleInterface, ParseError, Parser, UserInterface};
use crate::prelude::Collectable;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The switch parser.
///
/// The parser captures the input tokens when it is created, and is then configured by registering switches.
/// Each switch is bound to a variable owned by the caller; parsing writes into those variables in place.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::SwitchParser;
///
/// let mut verbose: bool = false;
/// let mut count: u32 = 0;
/// let mut parser = SwitchParser::new(&["--verbose", "-n", "5"])
///     .add_switch('v', "verbose", &mut verbose)
///     .add_switch('n', "count", &mut count);
///
/// assert_eq!(parser.parse(), Ok(true));
/// drop(parser);
/// assert!(verbose);
/// assert_eq!(count, 5);
/// ```
pub struct SwitchParser<'a> {
    parser: Parser<'a>,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> std::fmt::Debug for SwitchParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitchParser")
            .field("parser", &self.parser)
            .finish()
    }
}

impl<'a> SwitchParser<'a> {
    /// Create a switch parser over the input `tokens` (excluding the program name).
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::SwitchParser;
    ///
    /// let mut parser = SwitchParser::new(&[]);
    /// assert_eq!(parser.parse(), Ok(true));
    /// ```
    pub fn new(tokens: &[&str]) -> Self {
        Self::with_interface(
            tokens.iter().map(|s| s.to_string()).collect(),
            Box::new(ConsoleInterface::default()),
        )
    }

    /// Create a switch parser over the Cli [`env::args`] (excluding the program name).
    pub fn from_env() -> Self {
        Self::with_interface(
            env::args().skip(1).collect(),
            Box::new(ConsoleInterface::default()),
        )
    }

    pub(crate) fn with_interface(
        tokens: Vec<String>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser: Parser::new(tokens),
            user_interface,
        }
    }

    /// The input tokens this parser was created with.
    pub fn tokens(&self) -> &[String] {
        self.parser.tokens()
    }

    /// Register a switch whose arity is decided by its [`Parameter`] field.
    ///
    /// Both `-<short>` and `--<long>` are registered.
    /// Registering a token that is already registered silently replaces its prior binding.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{Parameter, Switch, SwitchParser};
    ///
    /// let mut level: u8 = 1;
    /// let mut parser = SwitchParser::new(&["-q"])
    ///     .add(Parameter::new(Switch::new(&mut level, 0), 'q', "quiet"));
    ///
    /// assert_eq!(parser.parse(), Ok(true));
    /// drop(parser);
    /// assert_eq!(level, 0);
    /// ```
    pub fn add<T>(mut self, parameter: Parameter<'a, T>) -> Self {
        let inner = parameter.consume();
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Adding {inner:?}.");
        }

        let ParameterInner {
            names,
            arity,
            field,
        } = inner;
        self.parser.register(&names, arity, Box::new(field));
        self
    }

    /// Register a single value switch, overwriting `variable` on each occurrence.
    ///
    /// The arity follows the type:
    /// a `bool` variable makes a flag switch (its presence sets `true`, no value token is consumed),
    /// any other type makes a value switch (the following token is converted via [`convert`](crate::convert)).
    ///
    /// Use [`SwitchParser::add`] to choose the arity independently of the type.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::SwitchParser;
    ///
    /// let mut dry_run: bool = false;
    /// let mut name: String = "default".to_string();
    /// let mut parser = SwitchParser::new(&["--name", "abc", "-d"])
    ///     .add_switch('d', "dry-run", &mut dry_run)
    ///     .add_switch('n', "name", &mut name);
    ///
    /// assert_eq!(parser.parse(), Ok(true));
    /// drop(parser);
    /// assert!(dry_run);
    /// assert_eq!(name, "abc");
    /// ```
    pub fn add_switch<T>(self, short: char, long: impl Into<String>, variable: &'a mut T) -> Self
    where
        T: FromStr + 'static,
    {
        let variable: &'a mut dyn Any = variable;

        if variable.is::<bool>() {
            let flag = variable
                .downcast_mut::<bool>()
                .expect("internal error - must be able to downcast the bool switch");
            self.add(Parameter::new(Switch::new(flag, true), short, long))
        } else {
            let value = variable
                .downcast_mut::<T>()
                .expect("internal error - must be able to downcast the switch to its own type");
            self.add(Parameter::new(Scalar::new(value), short, long))
        }
    }

    /// Register a multi value switch, appending to `variable` on each occurrence.
    ///
    /// A multi value switch is always a value switch, including for `bool` items.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::SwitchParser;
    ///
    /// let mut items: Vec<u32> = Vec::default();
    /// let mut parser = SwitchParser::new(&["-i", "1", "--item", "2", "-i", "1"])
    ///     .add_multi_switch('i', "item", &mut items);
    ///
    /// assert_eq!(parser.parse(), Ok(true));
    /// drop(parser);
    /// assert_eq!(items, vec![1, 2, 1]);
    /// ```
    pub fn add_multi_switch<C, T>(
        self,
        short: char,
        long: impl Into<String>,
        variable: &'a mut C,
    ) -> Self
    where
        C: 'a + Collectable<T>,
        T: FromStr + 'static,
    {
        self.add(Parameter::new(Collection::new(variable), short, long))
    }

    /// Run the switch parser against the input tokens.
    ///
    /// Tokens are processed left to right.
    /// A flag switch consumes only itself; a value switch consumes itself and the following token.
    ///
    /// Returns:
    /// * `Ok(true)` when every token was consumed.
    /// * `Ok(false)` when a token is not a registered switch, or a value switch is the final token.
    /// * `Err(_)` when a value token cannot be converted into its destination type.
    ///
    /// Conversion errors are deliberately kept out of the `bool` channel; they are returned for the caller to handle or propagate (`?`).
    ///
    /// There is no rollback: variables written before the failing token keep their new values.
    /// Use [`SwitchParser::try_parse`] to learn which switch failed, and why.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::SwitchParser;
    ///
    /// let mut count: u32 = 0;
    /// let mut parser = SwitchParser::new(&["-n", "five"])
    ///     .add_switch('n', "count", &mut count);
    ///
    /// let error = parser.parse().unwrap_err();
    /// assert_eq!(error.to_string(), "cannot convert 'five' to u32.");
    /// ```
    pub fn parse(&mut self) -> Result<bool, InvalidConversion> {
        match self.try_parse() {
            Ok(()) => Ok(true),
            Err(ParseError::InvalidConversion { source, .. }) => Err(source),
            Err(_) => Ok(false),
        }
    }

    /// Run the switch parser against the input tokens, reporting every kind of failure as a [`ParseError`].
    ///
    /// This follows the same processing as [`SwitchParser::parse`].
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{ParseError, SwitchParser};
    ///
    /// let mut count: u32 = 0;
    /// let mut parser = SwitchParser::new(&["-n", "1", "-x"])
    ///     .add_switch('n', "count", &mut count);
    ///
    /// assert_eq!(parser.try_parse(), Err(ParseError::UnknownSwitch("-x".to_string())));
    /// drop(parser);
    /// assert_eq!(count, 1);
    /// ```
    pub fn try_parse(&mut self) -> Result<(), ParseError> {
        self.parser.consume().map_err(|(_, error)| error)
    }

    /// Run the switch parser against the input tokens, exiting the process on failure.
    ///
    /// On any failure (including a conversion error) the error is displayed on stderr, along with the input tokens and a marker at the point of failure.
    /// The process then exits with error code `1` (via [`std::process::exit`]).
    pub fn parse_or_exit(mut self) {
        if let Err(exit_code) = self.parse_reporting() {
            std::process::exit(exit_code);
        }
    }

    pub(crate) fn parse_reporting(&mut self) -> Result<(), i32> {
        invoke(&mut self.parser, &*self.user_interface)
    }
}
