use thiserror::Error;

use crate::api::{InvalidConversion, SwitchNames};
use crate::model::Arity;
use crate::registry::{AnonymousCapturable, SwitchRegistry};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The reason a parse stopped.
///
/// `UnknownSwitch` and `MissingValue` are invocation errors: the tokens do not fit the registered switches.
/// `InvalidConversion` is a conversion error: a value token does not fit its destination type.
///
/// Destinations mutated before the failing token keep their new values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token is not a registered switch (this includes any stray positional token).
    #[error("Parse error: unknown switch '{0}'.")]
    UnknownSwitch(String),

    /// The value switch is the final token, so it has no value to consume.
    #[error("Parse error: switch '{0}' requires a value.")]
    MissingValue(String),

    /// The value token could not be converted into the switch's destination type.
    #[error("Parse error: switch '{switch}' {source}")]
    InvalidConversion {
        /// The switch token that preceded the value.
        switch: String,
        /// The underlying conversion failure.
        source: InvalidConversion,
    },
}

impl ParseError {
    /// Whether this is an invocation error (`UnknownSwitch` or `MissingValue`), as opposed to a conversion error.
    pub fn is_invocation(&self) -> bool {
        !matches!(self, ParseError::InvalidConversion { .. })
    }
}

/// The registry together with the token list it is parsed against.
pub(crate) struct Parser<'a> {
    tokens: Vec<String>,
    registry: SwitchRegistry<'a>,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("tokens", &self.tokens)
            .field("registry", &self.registry)
            .finish()
    }
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            registry: SwitchRegistry::default(),
        }
    }

    pub(crate) fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub(crate) fn register(
        &mut self,
        names: &SwitchNames,
        arity: Arity,
        capture: Box<dyn AnonymousCapturable + 'a>,
    ) {
        self.registry.insert(names, arity, capture);
    }

    /// Walk the tokens left to right, dispatching each switch to its capture.
    ///
    /// On failure, returns the character offset (into the concatenated tokens) at which the problem was found.
    /// Offsets count `char`s, not bytes.
    pub(crate) fn consume(&mut self) -> Result<(), (usize, ParseError)> {
        let Parser { tokens, registry } = self;
        let mut cursor = 0;
        let mut offset = 0;

        while cursor < tokens.len() {
            let token = &tokens[cursor];
            let entry = registry.lookup(token).ok_or_else(|| {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Token #{cursor} '{token}' is not a registered switch.");
                }

                (offset, ParseError::UnknownSwitch(token.clone()))
            })?;

            match entry.arity() {
                Arity::Flag => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token #{cursor} '{token}' matched a flag.");
                    }

                    registry.capture_mut(entry).matched();
                }
                Arity::Value => {
                    // Check for the value before touching the destination.
                    let value = tokens.get(cursor + 1).ok_or_else(|| {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Token #{cursor} '{token}' is missing its value.");
                        }

                        (offset, ParseError::MissingValue(token.clone()))
                    })?;

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token #{cursor} '{token}' matched with value '{value}'.");
                    }

                    let capture = registry.capture_mut(entry);
                    capture.matched();
                    capture.capture(value).map_err(|source| {
                        (
                            offset + token.chars().count(),
                            ParseError::InvalidConversion {
                                switch: token.clone(),
                                source,
                            },
                        )
                    })?;
                }
            }

            let width = 1 + entry.arity().values();
            offset += tokens[cursor..cursor + width]
                .iter()
                .map(|t| t.chars().count())
                .sum::<usize>();
            cursor += width;
        }

        Ok(())
    }
}
