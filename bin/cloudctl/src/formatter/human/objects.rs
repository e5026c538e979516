//! Format API objects into tables.
use anyhow::Result;

use crate::formatter::resource::columns;
use crate::formatter::Record;

/// Format a list of API objects into a table, one row per object.
pub struct ObjectTable {
    columns: Vec<&'static str>,
    table: comfy_table::Table,
}

impl ObjectTable {
    pub fn new(fields: &'static [&'static str], properties: &[String]) -> ObjectTable {
        let columns = columns(fields, properties);
        let mut table = comfy_table::Table::new();
        table.set_header(columns.iter().map(|column| column.to_uppercase()));
        ObjectTable { columns, table }
    }
}

impl crate::formatter::ObjectList for ObjectTable {
    fn append(&mut self, record: Record) -> Result<()> {
        self.table.add_row(record.select(&self.columns));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!("{}", self.table);
        Ok(())
    }
}
