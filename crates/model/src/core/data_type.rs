use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage types an entity column can declare.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    LongLong,
    Double,
    Boolean,
    VarChar,
    String,
    Null,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Int => "INT",
            DataType::LongLong => "BIGINT",
            DataType::Double => "DOUBLE",
            DataType::Boolean => "BOOLEAN",
            DataType::VarChar => "VARCHAR",
            DataType::String => "TEXT",
            DataType::Null => "NULL",
        };
        write!(f, "{name}")
    }
}
