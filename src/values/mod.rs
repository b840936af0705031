//! Runtime values bound to names in the symbol table.

pub mod values;
