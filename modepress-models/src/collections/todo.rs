use modepress_schema::{Schema, SchemaItemFactory as F, SchemaResult};

use crate::Collection;

/// A simple task list entry.
pub struct Todo;

impl Collection for Todo {
    const NAME: &'static str = "todos";

    fn schema() -> SchemaResult<Schema> {
        let mut schema = Schema::new();
        schema
            .add(F::text_bounded("title", "New Todo", 1, 20))?
            .add(F::text_bounded("description", "", 0, 500))?
            .add(F::bool("done", false))?
            .add(F::date("createdOn").indexable())?
            .add(F::date_now("lastUpdated").indexable())?;
        Ok(schema)
    }
}
