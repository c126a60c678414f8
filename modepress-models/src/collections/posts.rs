use modepress_schema::{Schema, SchemaItemFactory as F, SchemaResult};

use crate::Collection;

/// Blog posts and pages.
pub struct Posts;

impl Collection for Posts {
    const NAME: &'static str = "posts";

    fn schema() -> SchemaResult<Schema> {
        let mut schema = Schema::new();
        schema
            .add(F::text_bounded("author", "", 1, 100).indexable())?
            .add(F::text_bounded("title", "", 1, 200))?
            .add(F::text_bounded("slug", "", 1, 512).unique())?
            .add(F::text_bounded("brief", "", 0, 200))?
            .add(F::bool("public", true))?
            .add(F::html("content", ""))?
            .add(F::text_bounded("featuredImage", "", 0, 1000))?
            .add(F::text_array_bounded("categories", vec![], 0, 100, 1, 100))?
            .add(F::text_array_bounded("tags", vec![], 0, 100, 1, 100))?
            .add(F::date("createdOn").indexable())?
            .add(F::date_now("lastUpdated").indexable())?;
        Ok(schema)
    }
}
