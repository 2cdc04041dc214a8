//! Type definitions of a low-level SQL string representation.

use serde::Serialize;

/// A SQL string and the parameters it refers to, in placeholder order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SQL {
    pub sql: String,
    pub params: Vec<Param>,
    #[serde(skip)]
    pub placeholders: PlaceholderStyle,
}

impl Default for SQL {
    fn default() -> Self {
        Self::new()
    }
}

/// How parameters are referred to in the SQL string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `?`, as used by MySQL and SQLite.
    #[default]
    QuestionMark,
    /// `$1`, `$2`, ..., as used by PostgreSQL.
    Dollar,
}

/// A parameter for a parameterized query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Param {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
    /// Arrays and objects, passed on as JSON.
    Json(serde_json::Value),
}

impl SQL {
    pub fn new() -> SQL {
        SQL::with_placeholders(PlaceholderStyle::default())
    }

    pub fn with_placeholders(placeholders: PlaceholderStyle) -> SQL {
        SQL {
            sql: String::new(),
            params: vec![],
            placeholders,
        }
    }

    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    pub fn append_param(&mut self, param: Param) {
        self.params.push(param);
        match self.placeholders {
            PlaceholderStyle::QuestionMark => self.sql.push('?'),
            PlaceholderStyle::Dollar => {
                self.sql.push_str(format!("${}", self.params.len()).as_str());
            }
        }
    }
}
