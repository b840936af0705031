use std::{fmt::Display, rc::Rc};

/// Shared handle to a value. A value lives as long as its longest holder,
/// whether that is the symbol table or an expression result.
pub type ValueRef = Rc<Value>;

pub const DEFAULT_WIDTH: u8 = 32;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ValueKind {
    SignedInteger,
    UnsignedInteger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    SignedInteger { data: i32, width: u8 },
    UnsignedInteger { data: u32, width: u8 },
}

impl Value {
    pub fn signed(data: i32, width: u8) -> Self {
        Value::SignedInteger { data, width }
    }

    pub fn unsigned(data: u32, width: u8) -> Self {
        Value::UnsignedInteger { data, width }
    }

    pub fn default_signed() -> Self {
        Value::signed(0, DEFAULT_WIDTH)
    }

    pub fn default_unsigned() -> Self {
        Value::unsigned(0, DEFAULT_WIDTH)
    }

    pub fn into_ref(self) -> ValueRef {
        Rc::new(self)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::SignedInteger { .. } => ValueKind::SignedInteger,
            Value::UnsignedInteger { .. } => ValueKind::UnsignedInteger,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::SignedInteger { .. } => "int",
            Value::UnsignedInteger { .. } => "uint",
        }
    }

    /// Bit-width tag the value was declared with.
    pub fn width(&self) -> u8 {
        match self {
            Value::SignedInteger { width, .. } | Value::UnsignedInteger { width, .. } => *width,
        }
    }

    pub fn to_display_string(&self) -> String {
        match self {
            Value::SignedInteger { data, .. } => data.to_string(),
            Value::UnsignedInteger { data, .. } => data.to_string(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}
