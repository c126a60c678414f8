use modepress_schema::{Schema, SchemaItemFactory as F, SchemaResult};

use crate::Collection;

/// Reader comments on posts, optionally threaded under a parent comment.
pub struct Comments;

impl Collection for Comments {
    const NAME: &'static str = "comments";

    fn schema() -> SchemaResult<Schema> {
        let mut schema = Schema::new();
        schema
            .add(F::text_bounded("author", "", 1, 100).indexable())?
            .add(F::id("post", None).indexable())?
            .add(F::id("parent", None))?
            .add(F::bool("public", true))?
            .add(F::html_bounded("content", "", 1, 1000))?
            .add(F::date("createdOn").indexable())?
            .add(F::date_now("lastUpdated").indexable())?;
        Ok(schema)
    }
}
