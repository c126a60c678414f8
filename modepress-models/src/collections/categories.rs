use modepress_schema::{Schema, SchemaItemFactory as F, SchemaResult};

use crate::Collection;

/// Post categories. `parent` holds the slug of the parent category, if any.
pub struct Categories;

impl Collection for Categories {
    const NAME: &'static str = "categories";

    fn schema() -> SchemaResult<Schema> {
        let mut schema = Schema::new();
        schema
            .add(F::text_bounded("title", "", 1, 100))?
            .add(F::text_bounded("slug", "", 1, 100).unique())?
            .add(F::text_bounded("description", "", 0, 500))?
            .add(F::text_bounded("parent", "", 0, 100))?;
        Ok(schema)
    }
}
