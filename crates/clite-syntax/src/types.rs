//! Primitive type definitions.
//! 基本类型定义。

use serde::Serialize;
use std::fmt;

/// A CLite primitive type.
/// CLite 基本类型。
///
/// The set is closed and the values are plain constants; a declaration
/// stores its type by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Type {
    Int,
    Bool,
    Float,
    Char,
}

impl Type {
    /// The keyword spelling of this type.
    /// 此类型的关键字拼写。
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Bool => "bool",
            Type::Float => "float",
            Type::Char => "char",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
