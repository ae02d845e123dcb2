/// The number of tokens a switch consumes after its own token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// `-x`: The switch takes no value; its presence alone is the input.
    Flag,
    /// `-x VALUE`: The switch must be followed by precisely one value token.
    Value,
}

impl Arity {
    /// The number of tokens following the switch token that belong to it.
    pub fn values(&self) -> usize {
        match self {
            Arity::Flag => 0,
            Arity::Value => 1,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
