use std::collections::HashMap;

use crate::api::{InvalidConversion, SwitchNames};
use crate::model::Arity;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Behaviour to capture an implicit generic type T from an input `&str`.
///
/// We use this at the middle/top of the switch parser object graph so that different types may all be 'captured' in a single registry.
pub(crate) trait AnonymousCapturable {
    /// Declare that the switch has been matched.
    fn matched(&mut self);

    /// Capture a value anonymously for this switch.
    fn capture(&mut self, value: &str) -> Result<(), InvalidConversion>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    arity: Arity,
    index: usize,
}

impl Entry {
    pub(crate) fn arity(&self) -> Arity {
        self.arity
    }
}

/// The switch registry.
///
/// Every registered capture lives in the arena for as long as the registry does.
/// Both tokens of a switch point at the same arena slot.
/// Re-registering a token only re-points that token; the displaced capture stays in the arena, unreachable.
pub(crate) struct SwitchRegistry<'a> {
    // We need a (dyn .. [ignoring T] ..) here in order to put all the fields of varying types T under one collection.
    captures: Vec<Box<dyn AnonymousCapturable + 'a>>,
    entries: HashMap<String, Entry>,
}

impl<'a> std::fmt::Debug for SwitchRegistry<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitchRegistry")
            .field("captures", &self.captures.len())
            .field("entries", &self.entries)
            .finish()
    }
}

impl<'a> Default for SwitchRegistry<'a> {
    fn default() -> Self {
        Self {
            captures: Vec::default(),
            entries: HashMap::default(),
        }
    }
}

impl<'a> SwitchRegistry<'a> {
    pub(crate) fn insert(
        &mut self,
        names: &SwitchNames,
        arity: Arity,
        capture: Box<dyn AnonymousCapturable + 'a>,
    ) {
        let index = self.captures.len();
        self.captures.push(capture);

        for token in names.tokens() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Registering '{token}' as a {arity} switch (capture #{index}).");
            }

            if let Some(_previous) = self.entries.insert(token, Entry { arity, index }) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Replaced the prior binding of '{names}' (previous capture #{}).",
                        _previous.index
                    );
                }
            }
        }
    }

    pub(crate) fn lookup(&self, token: &str) -> Option<Entry> {
        self.entries.get(token).copied()
    }

    pub(crate) fn capture_mut(&mut self, entry: Entry) -> &mut (dyn AnonymousCapturable + 'a) {
        &mut **self
            .captures
            .get_mut(entry.index)
            .expect("internal error - registry entry must index a capture")
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}


#[cfg(test)]
mod tests {
    use super::test::Recorder;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn registry_empty() {
        let registry = SwitchRegistry::default();
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.lookup("-v"), None);
        assert_eq!(registry.lookup("--verbose"), None);
    }

    #[test]
    fn registry_insert() {
        let mut registry = SwitchRegistry::default();
        registry.insert(
            &SwitchNames::new('v', "verbose"),
            Arity::Flag,
            Box::new(Recorder::default()),
        );
        registry.insert(
            &SwitchNames::new('n', "count"),
            Arity::Value,
            Box::new(Recorder::default()),
        );

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.lookup("-v").unwrap().arity(), Arity::Flag);
        assert_eq!(registry.lookup("--verbose").unwrap().arity(), Arity::Flag);
        assert_eq!(registry.lookup("-n").unwrap().arity(), Arity::Value);
        assert_eq!(registry.lookup("--count").unwrap().arity(), Arity::Value);
        assert_eq!(registry.lookup("-v"), registry.lookup("--verbose"));
        assert_ne!(registry.lookup("-v"), registry.lookup("-n"));
        assert_eq!(registry.lookup("verbose"), None);
        assert_eq!(registry.lookup("-count"), None);
        assert_eq!(registry.lookup("--n"), None);
    }

    #[test]
    fn registry_override() {
        let log = Rc::new(RefCell::new(Vec::default()));
        let mut registry = SwitchRegistry::default();
        registry.insert(
            &SwitchNames::new('v', "verbose"),
            Arity::Flag,
            Box::new(Recorder::default()),
        );
        registry.insert(
            &SwitchNames::new('v', "value"),
            Arity::Value,
            Box::new(Recorder { log: log.clone() }),
        );

        // '-v' is re-pointed, '--verbose' keeps its original binding.
        assert_eq!(registry.len(), 3);
        let short = registry.lookup("-v").unwrap();
        assert_eq!(short.arity(), Arity::Value);
        assert_eq!(short, registry.lookup("--value").unwrap());
        assert_eq!(registry.lookup("--verbose").unwrap().arity(), Arity::Flag);

        registry.capture_mut(short).capture("x").unwrap();
        assert_eq!(*log.borrow(), vec!["capture:x".to_string()]);
    }
}
