use modepress_schema::{Schema, SchemaItemFactory as F, SchemaResult};

use crate::Collection;

/// Largest pre-rendered page kept, in characters.
const MAX_RENDER_CHARACTERS: usize = 15_000_000;

/// Pre-rendered html snapshots of public pages, served to crawlers.
pub struct Renders;

impl Collection for Renders {
    const NAME: &'static str = "renders";

    fn schema() -> SchemaResult<Schema> {
        let mut schema = Schema::new();
        schema
            .add(F::text_bounded("url", "", 1, 1000).unique())?
            .add(F::int("expiration", 0.0, 0.0, f64::INFINITY))?
            .add(F::html_unfiltered("html", "", MAX_RENDER_CHARACTERS))?
            .add(F::date("createdOn").indexable())?
            .add(F::date_now("updateDate").indexable())?;
        Ok(schema)
    }
}
