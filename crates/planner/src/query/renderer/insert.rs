use crate::query::{
    ast::insert::{Insert, Upsert},
    renderer::{Render, Renderer},
};

const EXCLUDED: &str = "excluded";

impl Render for Insert {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("INSERT INTO ");
        r.render_table_ref(&self.table);
        r.sql.push(' ');
        r.push_ident_list(&self.columns);

        r.sql.push_str(" VALUES ");
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.sql.push('(');
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    r.sql.push_str(", ");
                }
                value.render(r);
            }
            r.sql.push(')');
        }

        if let Some(upsert) = &self.upsert {
            upsert.render(r);
        }
        r.sql.push(';');
    }
}

impl Render for Upsert {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(" ON CONFLICT ");
        r.push_ident_list(&self.key);

        if self.update.is_empty() {
            r.sql.push_str(" DO NOTHING");
            return;
        }

        r.sql.push_str(" DO UPDATE SET ");
        for (i, column) in self.update.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.push_ident(column);
            r.sql.push_str(" = ");
            r.push_ident(EXCLUDED);
            r.sql.push('.');
            r.push_ident(column);
        }
    }
}
