pub(crate) const SHORT_PREFIX: &str = "-";
pub(crate) const LONG_PREFIX: &str = "--";
