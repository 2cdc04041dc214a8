//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::string::*;

/// Render a SELECT with the given placeholder style.
pub fn select_to_sql(select: &Select, placeholders: PlaceholderStyle) -> SQL {
    let mut sql = SQL::with_placeholders(placeholders);
    select.to_sql(&mut sql);
    sql
}

// Convert to SQL strings

impl RawSql {
    pub fn to_sql(&self, sql: &mut SQL) {
        let RawSql(text) = self;
        sql.append_syntax(text);
    }
}

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");

        self.select_list.to_sql(sql);

        if let Some(from) = &self.from {
            from.to_sql(sql);
        }

        for join in &self.joins {
            join.to_sql(sql);
        }

        self.where_.to_sql(sql);

        self.group_by.to_sql(sql);

        self.order_by.to_sql(sql);

        self.limit.to_sql(sql);
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        let SelectList(list) = self;
        list.to_sql(sql);
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut SQL) {
        let From(source) = self;
        sql.append_syntax(" FROM ");
        source.to_sql(sql);
    }
}

impl Join {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Join(clause) = self;
        sql.append_syntax(" ");
        clause.to_sql(sql);
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Where(expressions) = self;
        if !expressions.is_empty() {
            sql.append_syntax(" WHERE ");
            for (index, expression) in expressions.iter().enumerate() {
                expression.to_sql(sql);
                if index < (expressions.len() - 1) {
                    sql.append_syntax(" AND ");
                }
            }
        }
    }
}

impl GroupBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" GROUP BY ");
            for (index, element) in self.elements.iter().enumerate() {
                element.to_sql(sql);
                if index < (self.elements.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" ORDER BY ");
            for (index, order_by_item) in self.elements.iter().enumerate() {
                order_by_item.to_sql(sql);
                if index < (self.elements.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

impl OrderByElement {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.target.to_sql(sql);
        self.direction.to_sql(sql);
    }
}

impl OrderByDirection {
    pub fn to_sql(&self, sql: &mut SQL) {
        let OrderByDirection(direction) = self;
        if !direction.is_empty() {
            sql.append_syntax(" ");
            sql.append_syntax(direction);
        }
    }
}

impl Limit {
    pub fn to_sql(&self, sql: &mut SQL) {
        if let Some(limit) = self.limit {
            sql.append_syntax(" LIMIT ");
            sql.append_syntax(limit.to_string().as_str());
        }
        if let Some(offset) = self.offset {
            sql.append_syntax(" OFFSET ");
            sql.append_syntax(offset.to_string().as_str());
        }
    }
}

// scalars
impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
            }
            Expression::ColumnReference(column) => column.to_sql(sql),
            Expression::Value(value) => value.to_sql(sql),
        }
    }
}

impl BinaryOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        let BinaryOperator(name) = self;
        sql.append_syntax(" ");
        sql.append_syntax(name);
        sql.append_syntax(" ");
    }
}

// names
impl ColumnReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        let ColumnReference(name) = self;
        sql.append_syntax(name);
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Value::Int8(i) => sql.append_param(Param::Integer(*i)),
            Value::Float8(f) => sql.append_param(Param::Float(*f)),
            Value::Bool(b) => sql.append_param(Param::Bool(*b)),
            Value::String(s) => sql.append_param(Param::String(s.clone())),
            Value::Null => sql.append_param(Param::Null),
            Value::JsonValue(j) => sql.append_param(Param::Json(j.clone())),
        }
    }
}
