use crate::query::{
    ast::create_table::{ColumnDef, CreateTable, ForeignKeyDef},
    renderer::{Render, Renderer},
};

impl Render for CreateTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE TABLE ");
        if self.if_not_exists {
            r.sql.push_str("IF NOT EXISTS ");
        }
        r.render_table_ref(&self.table);
        r.sql.push_str(" (");

        let mut first = true;
        let mut separate = |r: &mut Renderer| {
            if !first {
                r.sql.push(',');
            }
            first = false;
            r.sql.push_str("\n\t");
        };

        for column in &self.columns {
            separate(r);
            column.render(r);
        }
        for fk in &self.foreign_keys {
            separate(r);
            fk.render(r);
        }

        r.sql.push_str("\n);");
    }
}

impl Render for ColumnDef {
    fn render(&self, r: &mut Renderer) {
        r.push_ident(&self.name);
        r.sql.push(' ');
        r.sql
            .push_str(&r.dialect.render_data_type(&self.data_type, self.max_length));

        // A primary key is implicitly NOT NULL.
        if self.primary_key {
            r.sql.push_str(" PRIMARY KEY");
        } else if !self.nullable {
            r.sql.push_str(" NOT NULL");
        }
    }
}

impl Render for ForeignKeyDef {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("FOREIGN KEY ");
        r.push_ident_list(&[&self.column]);
        r.sql.push_str(" REFERENCES ");
        r.render_table_ref(&self.references);
        r.sql.push(' ');
        r.push_ident_list(&[&self.referenced_column]);
    }
}
