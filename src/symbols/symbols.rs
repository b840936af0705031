use std::rc::Rc;

use tracing::trace;

use crate::{
    errors::errors::{CourierResult, Diagnostic, DiagnosticKind},
    values::values::ValueRef,
};

#[derive(Debug, Clone)]
pub struct SymbolEntry {
    pub name: String,
    pub scope_depth: u32,
    /// `None` for a declaration that has not been bound yet.
    pub value: Option<ValueRef>,
}

/// Flat, append-only table of declarations annotated with scope depth.
///
/// The parser supplies depths as it enters and leaves blocks; the table does
/// not track nesting itself.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable { entries: vec![] }
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter()
    }

    /// True if any entry has this name, bound or not.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Returns the value of the first entry with this name in insertion
    /// order. A shadowing entry added later at a deeper scope is not
    /// preferred over an outer one.
    pub fn find(&self, name: &str) -> Option<ValueRef> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .and_then(|entry| entry.value.as_ref().map(Rc::clone))
    }

    /// Declares `name` at `scope_depth`.
    ///
    /// Fails with `DuplicateVariable` when the name already exists at the same
    /// or a deeper depth. Declaring it strictly deeper shadows it.
    pub fn add(
        &mut self,
        name: &str,
        scope_depth: u32,
        value: Option<ValueRef>,
    ) -> CourierResult<()> {
        if self
            .entries
            .iter()
            .any(|entry| entry.name == name && entry.scope_depth >= scope_depth)
        {
            return Err(Diagnostic::new(DiagnosticKind::DuplicateVariable).with_message(name));
        }

        self.entries
            .try_reserve(1)
            .map_err(|_| Diagnostic::new(DiagnosticKind::AllocationFailure).with_message(name))?;

        trace!(name, scope_depth, "declare");
        self.entries.push(SymbolEntry {
            name: name.to_string(),
            scope_depth,
            value,
        });

        Ok(())
    }

    /// Removes every entry declared deeper than `scope_depth`, keeping the
    /// order of the rest.
    pub fn drop_above_scope(&mut self, scope_depth: u32) -> CourierResult<()> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.scope_depth <= scope_depth);

        trace!(scope_depth, dropped = before - self.entries.len(), "drop scope");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
