//! `argbind` is a small command line switch parser for Rust.
//!
//! It turns a flat list of command line tokens into typed values, written straight into variables owned by the caller.
//! There is no intermediate "matches" structure to query: each switch is bound to a variable when it is registered, and parsing assigns to that variable in place.
//!
//! `argbind` deliberately covers a narrow surface:
//! * *Two switch forms*: every switch is known by a short token `-x` and a long token `--name`.
//! Either form has an identical effect.
//! * *Two arities*: a flag switch consumes no value (its presence is the input), while a value switch consumes precisely the next token.
//! * *Two multiplicities*: a single value switch overwrites its variable on each occurrence, while a multi value switch appends to its collection.
//!
//! Everything else is out of scope: combined short flags (`-abc`), `--name=value` syntax, positional arguments, sub-commands, and help messages.
//! Any token that is not a registered switch, including a stray positional token, fails the parse.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/verbose_count.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ verbose_count --verbose -n 5
//! verbose: true, count: 5
//!
//! $ verbose_count -n
//! Parse error: switch '-n' requires a value.
//! -n
//! ^
//!
//! $ verbose_count -n five
//! Parse error: switch '-n' cannot convert 'five' to i32.
//! -n five
//!    ^
//! ```
//!
//! # Registration
//! Configure a [`SwitchParser`] by registering switches against your variables:
//! * [`SwitchParser::add_switch`]: overwrite the variable on each occurrence.
//! The arity follows the type: a `bool` variable is a flag switch (set to `true` when present), any other type is a value switch.
//! * [`SwitchParser::add_multi_switch`]: append to the [`Collectable`](./prelude/trait.Collectable.html) variable on each occurrence.
//! Always a value switch.
//! * [`SwitchParser::add`]: register a [`Parameter`] whose field chooses the arity explicitly.
//! For example, a non-`bool` flag via [`Switch`], or a `bool` that consumes a value via [`Scalar`].
//!
//! Registration cannot fail.
//! Registering a token that is already registered silently replaces its prior binding (only for that token).
//!
//! All value conversion in `argbind` goes through [`convert`].
//! A `bool` accepts `1`, `true`, `0` and `false`; every other type `T` is parsed via [`std::str::FromStr`].
//! `argbind` will parse any variable type `T`, as long as it implements `std::str::FromStr`.
//!
//! # Parsing
//! There are three ways to run the parser, which differ only in how failures are reported:
//!
//! ```console
//! Method                          | Unknown switch / missing value | Conversion error
//! --------------------------------------------------------------------------------------------
//! SwitchParser::parse             | Ok(false)                      | Err(InvalidConversion)
//! SwitchParser::try_parse         | Err(ParseError::..)            | Err(ParseError::InvalidConversion)
//! SwitchParser::parse_or_exit     | print to stderr & exit(1)      | print to stderr & exit(1)
//! ```
//!
//! In every case the parse stops at the first failure, and there is no rollback:
//! variables assigned before the failing token keep their new values.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events for registration and each step of the parse.
pub use argbind_builder::*;
