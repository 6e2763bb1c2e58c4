//! Accumulating error list, used to report every violated vehicle invariant at once
//! rather than stopping at the first one.  Errors may be nested under context entries
//! naming the object that failed, and render as an indented tree.

use std::fmt;
use std::ops::Deref;

/// Error along with the number of context entries enclosing it
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ComboError<E> {
    depth: usize,
    error: E,
}

impl<E> ComboError<E> {
    /// 0 for an outermost entry
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn error(&self) -> &E {
        &self.error
    }
}

pub struct ComboErrors<E>(Vec<ComboError<E>>);

impl<E> ComboErrors<E> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: E) {
        self.0.push(ComboError { depth: 0, error });
    }

    /// Places `context` in front of the collected errors and nests them one level under it
    pub fn add_context(&mut self, context: E) {
        self.0.iter_mut().for_each(|entry| entry.depth += 1);
        self.0.insert(0, ComboError { depth: 0, error: context });
    }

    /// `Ok` when nothing was collected
    pub fn make_err(self) -> Result<(), Self> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Like [ComboErrors::make_err], nesting any collected errors under `context` first
    pub fn make_err_in(mut self, context: E) -> Result<(), Self> {
        if !self.0.is_empty() {
            self.add_context(context);
        }
        self.make_err()
    }

    fn write_tree(
        &self,
        f: &mut fmt::Formatter<'_>,
        write_entry: impl Fn(&mut fmt::Formatter<'_>, &E) -> fmt::Result,
    ) -> fmt::Result {
        for entry in &self.0 {
            write!(f, "{:indent$}- ", "", indent = 2 * entry.depth)?;
            write_entry(f, &entry.error)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<E> Default for ComboErrors<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Deref for ComboErrors<E> {
    type Target = [ComboError<E>];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<E: fmt::Display> fmt::Display for ComboErrors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, |f, error| write!(f, "{error}"))
    }
}

impl<E: fmt::Debug> fmt::Debug for ComboErrors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, |f, error| write!(f, "{error:?}"))
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for ComboErrors<E> {}
