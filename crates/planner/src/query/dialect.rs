//! Defines the `Dialect` trait for database-specific SQL syntax.

use model::core::data_type::DataType;

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - SQLite and PostgreSQL use double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    ///
    /// - SQLite uses `?1`, `?2`, etc.
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL uses `?`
    fn get_placeholder(&self, index: usize) -> String;

    /// Renders a generic `DataType` into a database-specific SQL type string.
    fn render_data_type(&self, data_type: &DataType, max_length: Option<usize>) -> String;

    /// Returns the name of the dialect (e.g., "SQLite", "PostgreSQL").
    fn name(&self) -> String;
}

fn quote_with(ident: &str, quote: char) -> String {
    let escaped = ident.replace(quote, &format!("{quote}{quote}"));
    format!("{quote}{escaped}{quote}")
}

fn with_length(type_name: &str, max_length: Option<usize>) -> String {
    match max_length {
        Some(max_len) => format!("{type_name}({max_len})"),
        None => type_name.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn quote_identifier(&self, ident: &str) -> String {
        quote_with(ident, '"')
    }

    fn get_placeholder(&self, index: usize) -> String {
        format!("?{}", index + 1)
    }

    fn render_data_type(&self, data_type: &DataType, _max_length: Option<usize>) -> String {
        // SQLite only honours type affinity; lengths are not enforced.
        match data_type {
            DataType::Int | DataType::LongLong | DataType::Boolean => "INTEGER".into(),
            DataType::Double => "REAL".into(),
            DataType::VarChar | DataType::String => "TEXT".into(),
            DataType::Null => "BLOB".into(),
        }
    }

    fn name(&self) -> String {
        "SQLite".into()
    }
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        quote_with(ident, '"')
    }

    fn get_placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }

    fn render_data_type(&self, data_type: &DataType, max_length: Option<usize>) -> String {
        match data_type {
            DataType::Int => "INTEGER".into(),
            DataType::LongLong => "BIGINT".into(),
            DataType::Double => "DOUBLE PRECISION".into(),
            DataType::Boolean => "BOOLEAN".into(),
            DataType::VarChar => with_length("VARCHAR", max_length),
            DataType::String => "TEXT".into(),
            DataType::Null => "NULL".into(),
        }
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        quote_with(ident, '`')
    }

    fn get_placeholder(&self, _index: usize) -> String {
        // MySQL uses ?
        "?".into()
    }

    fn render_data_type(&self, data_type: &DataType, max_length: Option<usize>) -> String {
        match data_type {
            DataType::Int => "INT".into(),
            DataType::LongLong => "BIGINT".into(),
            DataType::Double => "DOUBLE".into(),
            DataType::Boolean => "BOOLEAN".into(),
            DataType::VarChar => with_length("VARCHAR", max_length.or(Some(255))),
            DataType::String => "TEXT".into(),
            DataType::Null => "NULL".into(),
        }
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}

#[cfg(test)]
mod tests {
    use super::{Dialect, MySql, Postgres, Sqlite};
    use model::core::data_type::DataType;

    #[test]
    fn test_quote_identifier_escapes_quotes() {
        assert_eq!(Sqlite.quote_identifier(r#"we"ird"#), r#""we""ird""#);
        assert_eq!(MySql.quote_identifier("item"), "`item`");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Sqlite.get_placeholder(0), "?1");
        assert_eq!(Postgres.get_placeholder(2), "$3");
        assert_eq!(MySql.get_placeholder(5), "?");
    }

    #[test]
    fn test_render_data_type() {
        assert_eq!(
            Postgres.render_data_type(&DataType::VarChar, Some(255)),
            "VARCHAR(255)"
        );
        assert_eq!(Sqlite.render_data_type(&DataType::VarChar, Some(255)), "TEXT");
        assert_eq!(MySql.render_data_type(&DataType::VarChar, None), "VARCHAR(255)");
    }
}
