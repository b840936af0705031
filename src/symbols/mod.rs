//! Scope-aware symbol table driven by the parser.
//!
//! Names are bound to shared [`Value`](crate::values::values::Value) handles
//! together with the depth of the block that declared them. Leaving a block
//! evicts everything declared inside it with
//! [`drop_above_scope`](symbols::SymbolTable::drop_above_scope).

pub mod symbols;
