/// The tokens rendered on one line, with a caret under the position a parse failed at.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[String]) -> Self {
        Self {
            offset,
            tokens: tokens.to_vec(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.tokens.join(" ");
        // The offset counts token chars only; the column also counts the joining spaces.
        let mut consumed = 0;
        let mut column = 0;

        for token in &self.tokens {
            let width = token.chars().count();

            if consumed + width > self.offset {
                column += self.offset - consumed;
                break;
            }

            consumed += width;
            column += width + 1;
        }

        let column = std::cmp::min(column, line.chars().count().saturating_sub(1));
        write!(f, "{line}\n{:column$}^", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], 0, "\n^")]
    #[case(vec!["-x"], 0, "-x\n^")]
    #[case(vec!["--verbose", "-x"], 9, "--verbose -x\n          ^")]
    #[case(vec!["-v", "--count"], 2, "-v --count\n   ^")]
    #[case(vec!["--count", "three"], 7, "--count three\n        ^")]
    #[case(vec!["-n", "1", "-n"], 3, "-n 1 -n\n     ^")]
    #[case(vec!["-n"], 10, "-n\n ^")]
    #[case(vec!["-n", "é", "-x"], 3, "-n é -x\n     ^")]
    #[case(vec!["--name", "日本語", "abc"], 9, "--name 日本語 abc\n           ^")]
    #[case(vec!["ü"], 5, "ü\n^")]
    fn error_context(#[case] tokens: Vec<&str>, #[case] offset: usize, #[case] expected: &str) {
        let tokens: Vec<String> = tokens.into_iter().map(|s| s.to_string()).collect();
        let error_context = ErrorContext::new(offset, &tokens);
        assert_eq!(error_context.to_string(), expected);
    }
}
