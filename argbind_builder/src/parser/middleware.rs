use crate::parser::{ErrorContext, Parser, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Run the parser, reporting any failure through the `user_interface`.
///
/// Returns the process exit code on failure.
pub(crate) fn invoke(
    parser: &mut Parser<'_>,
    user_interface: &(impl UserInterface + ?Sized),
) -> Result<(), i32> {
    match parser.consume() {
        Ok(()) => Ok(()),
        Err((offset, parse_error)) => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Parse failed at offset {offset}: {parse_error:?}.");
            }

            user_interface.print_error(parse_error);
            user_interface.print_error_context(ErrorContext::new(offset, parser.tokens()));
            Err(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SwitchNames;
    use crate::model::Arity;
    use crate::parser::test::BlackHole;
    use crate::parser::util::InMemoryInterface;
    use crate::test::assert_contains;

    fn parser(tokens: &[&str]) -> Parser<'static> {
        let mut parser = Parser::new(tokens.iter().map(|s| s.to_string()).collect());
        parser.register(
            &SwitchNames::new('n', "count"),
            Arity::Value,
            Box::new(BlackHole::default()),
        );
        parser
    }

    #[test]
    fn invoke_empty() {
        let interface = InMemoryInterface::default();
        let mut parser = parser(empty::slice());

        invoke(&mut parser, &interface).unwrap();

        assert_eq!(interface.consume(), (None, None));
    }

    #[test]
    fn invoke_ok() {
        let interface = InMemoryInterface::default();
        let mut parser = parser(&["-n", "1", "--count", "2"]);

        invoke(&mut parser, &interface).unwrap();

        assert_eq!(interface.consume(), (None, None));
    }

    #[test]
    fn invoke_unknown() {
        let interface = InMemoryInterface::default();
        let mut parser = parser(&["-n", "1", "positional"]);

        assert_eq!(invoke(&mut parser, &interface).unwrap_err(), 1);

        let (error, error_context) = interface.consume();
        let error = error.unwrap();
        assert_contains!(error, "unknown switch 'positional'");
        assert_eq!(error_context.unwrap(), "-n 1 positional\n     ^");
    }

    #[test]
    fn invoke_missing_value() {
        let interface = InMemoryInterface::default();
        let mut parser = parser(&["--count"]);

        assert_eq!(invoke(&mut parser, &interface).unwrap_err(), 1);

        let (error, error_context) = interface.consume();
        let error = error.unwrap();
        assert_contains!(error, "switch '--count' requires a value");
        assert_eq!(error_context.unwrap(), "--count\n^");
    }
}
