use crate::query::{
    ast::{
        common::{JoinKind, OrderDir},
        select::{Join, OrderBy, Select, Source},
    },
    renderer::{Render, Renderer},
};
use model::core::value::Value;

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("SELECT ");
        render_list(&self.columns, r);

        if let Some(from) = &self.from {
            r.sql.push_str(" FROM ");
            from.render(r);
        }

        for join in &self.joins {
            join.render(r);
        }

        if let Some(condition) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            condition.render(r);
        }

        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            render_list(&self.order_by, r);
        }

        // Paging values are bound like any other parameter.
        if let Some(limit) = self.limit {
            r.sql.push_str(" LIMIT ");
            r.add_param(Value::Int(limit.into()));
        }
        if let Some(offset) = self.offset {
            r.sql.push_str(" OFFSET ");
            r.add_param(Value::Int(offset.into()));
        }
    }
}

fn render_list(nodes: &[impl Render], r: &mut Renderer) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(", ");
        }
        node.render(r);
    }
}

impl Render for Source {
    fn render(&self, r: &mut Renderer) {
        r.render_table_ref(&self.table);
        if let Some(alias) = &self.alias {
            r.sql.push_str(" AS ");
            r.push_ident(alias);
        }
    }
}

impl Render for Join {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(match self.kind {
            JoinKind::Inner => " INNER JOIN ",
            JoinKind::Left => " LEFT JOIN ",
        });
        self.source.render(r);
        r.sql.push_str(" ON ");
        self.on.render(r);
    }
}

impl Render for OrderBy {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        r.sql.push_str(match self.direction {
            OrderDir::Asc => " ASC",
            OrderDir::Desc => " DESC",
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        query::{
            ast::{
                common::{JoinKind, OrderDir},
                expr::{BinaryOp, BinaryOperator, Expr},
            },
            builder::select::SelectBuilder,
            count_all,
            dialect::{MySql, Postgres, Sqlite},
            ident, qualified,
            renderer::render_sql,
            value,
        },
        table_ref,
    };
    use model::core::value::Value;

    fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp(Box::new(BinaryOp { left, op, right }))
    }

    #[test]
    fn test_aliased_select_sqlite() {
        let ast = SelectBuilder::new()
            .select(vec![qualified("item", "id"), qualified("item", "name")])
            .from(table_ref!("item"), Some("item"))
            .where_clause(binary(
                qualified("item", "name"),
                BinaryOperator::Eq,
                value("itemA".into()),
            ))
            .build();

        let (sql, params) = render_sql(&ast, &Sqlite);
        assert_eq!(
            sql,
            r#"SELECT "item"."id", "item"."name" FROM "item" AS "item" WHERE ("item"."name" = ?1)"#
        );
        assert_eq!(params, vec![Value::String("itemA".to_string())]);
    }

    #[test]
    fn test_unaliased_select_mysql() {
        let ast = SelectBuilder::new()
            .select(vec![ident("id"), ident("name")])
            .from(table_ref!("shop"), None)
            .where_clause(binary(ident("name"), BinaryOperator::Eq, value("shopA".into())))
            .build();

        let (sql, params) = render_sql(&ast, &MySql);
        assert_eq!(sql, "SELECT `id`, `name` FROM `shop` WHERE (`name` = ?)");
        assert_eq!(params, vec![Value::String("shopA".to_string())]);
    }

    #[test]
    fn test_join_order_and_paging_postgres() {
        let ast = SelectBuilder::new()
            .select(vec![qualified("s", "id"), qualified("s", "name")])
            .from(table_ref!("shop"), Some("s"))
            .join(
                JoinKind::Left,
                table_ref!("item"),
                Some("i"),
                binary(qualified("s", "id"), BinaryOperator::Eq, qualified("i", "shop_id")),
            )
            .where_clause(binary(qualified("i", "stock"), BinaryOperator::Gt, value(0.into())))
            .order_by(qualified("s", "name"), OrderDir::Desc)
            .limit(10)
            .offset(20)
            .build();

        let (sql, params) = render_sql(&ast, &Postgres);
        assert_eq!(
            sql,
            concat!(
                r#"SELECT "s"."id", "s"."name" FROM "shop" AS "s" "#,
                r#"LEFT JOIN "item" AS "i" ON ("s"."id" = "i"."shop_id") "#,
                r#"WHERE ("i"."stock" > $1) ORDER BY "s"."name" DESC LIMIT $2 OFFSET $3"#
            )
        );
        assert_eq!(params, vec![Value::Int(0), Value::Int(10), Value::Int(20)]);
    }

    #[test]
    fn test_count_projection() {
        let ast = SelectBuilder::new()
            .select(vec![count_all()])
            .from(table_ref!("item"), Some("item"))
            .build();

        let (sql, params) = render_sql(&ast, &Sqlite);
        assert_eq!(sql, r#"SELECT COUNT(*) FROM "item" AS "item""#);
        assert!(params.is_empty());
    }
}
