use serde_json::Value;

use crate::items::{
    BoolItem, DateItem, HtmlItem, IdItem, ItemKind, JsonItem, NumArrayItem, NumberItem,
    NumberType, SchemaItem, TextArrayItem, TextItem, DEFAULT_DECIMAL_PLACES, DEFAULT_MAX_ITEMS,
};

/// Shorthand constructors for pre-configured schema items.
///
/// Flags are applied with the builder methods on [`SchemaItem`]:
///
/// ```
/// use modepress_schema::SchemaItemFactory as F;
///
/// let slug = F::text_bounded("slug", "", 1, 512).unique();
/// assert!(slug.is_indexable());
/// ```
pub struct SchemaItemFactory;

impl SchemaItemFactory {
    /// Text bounded to `[0, 10000]` characters.
    pub fn text(name: &str, value: &str) -> SchemaItem {
        SchemaItem::new(name, ItemKind::Text(TextItem::new(value)))
    }

    /// Text with explicit character bounds.
    pub fn text_bounded(name: &str, value: &str, min: usize, max: usize) -> SchemaItem {
        SchemaItem::new(name, ItemKind::Text(TextItem::bounded(value, min, max)))
    }

    /// Fully specified number.
    pub fn number(
        name: &str,
        value: f64,
        min: f64,
        max: f64,
        number_type: NumberType,
        decimal_places: u8,
    ) -> SchemaItem {
        SchemaItem::new(
            name,
            ItemKind::Number(NumberItem::with_constraints(
                value,
                min,
                max,
                number_type,
                decimal_places,
            )),
        )
    }

    /// Integer within `[min, max]`.
    pub fn int(name: &str, value: f64, min: f64, max: f64) -> SchemaItem {
        Self::number(name, value, min, max, NumberType::Int, DEFAULT_DECIMAL_PLACES)
    }

    /// Unbounded float rounded to `decimal_places`.
    pub fn float(name: &str, value: f64, decimal_places: u8) -> SchemaItem {
        Self::number(
            name,
            value,
            f64::NEG_INFINITY,
            f64::INFINITY,
            NumberType::Float,
            decimal_places,
        )
    }

    /// Unset date; reads as "now" until assigned.
    pub fn date(name: &str) -> SchemaItem {
        SchemaItem::new(name, ItemKind::Date(DateItem::new(None)))
    }

    /// Date refreshed to the current time on every validation.
    pub fn date_now(name: &str) -> SchemaItem {
        SchemaItem::new(name, ItemKind::Date(DateItem::use_now()))
    }

    pub fn bool(name: &str, value: bool) -> SchemaItem {
        SchemaItem::new(name, ItemKind::Bool(BoolItem::new(Some(value))))
    }

    /// Text list with no entry or length limits beyond the defaults.
    pub fn text_array(name: &str, value: Vec<String>) -> SchemaItem {
        SchemaItem::new(name, ItemKind::TextArray(TextArrayItem::new(value)))
    }

    /// Text list with entry-count and per-entry character bounds.
    pub fn text_array_bounded(
        name: &str,
        value: Vec<String>,
        min_items: usize,
        max_items: usize,
        min_characters: usize,
        max_characters: usize,
    ) -> SchemaItem {
        SchemaItem::new(
            name,
            ItemKind::TextArray(TextArrayItem::bounded(
                value,
                min_items,
                max_items,
                min_characters,
                max_characters,
            )),
        )
    }

    /// Number list with a shared value range.
    pub fn num_array(
        name: &str,
        value: Vec<f64>,
        min: f64,
        max: f64,
        number_type: NumberType,
    ) -> SchemaItem {
        SchemaItem::new(
            name,
            ItemKind::NumArray(NumArrayItem::with_constraints(
                value,
                0,
                DEFAULT_MAX_ITEMS,
                min,
                max,
                number_type,
                DEFAULT_DECIMAL_PLACES,
            )),
        )
    }

    /// Optional reference to another document.
    pub fn id(name: &str, value: Option<&str>) -> SchemaItem {
        SchemaItem::new(name, ItemKind::Id(IdItem::new(value.map(str::to_string))))
    }

    /// Html restricted to the default tag whitelist.
    pub fn html(name: &str, value: &str) -> SchemaItem {
        SchemaItem::new(name, ItemKind::Html(HtmlItem::new(value)))
    }

    /// Html restricted to the default tag whitelist with character bounds.
    pub fn html_bounded(name: &str, value: &str, min: usize, max: usize) -> SchemaItem {
        SchemaItem::new(name, ItemKind::Html(HtmlItem::bounded(value, min, max)))
    }

    /// Html kept verbatim, such as a pre-rendered page.
    pub fn html_unfiltered(name: &str, value: &str, max: usize) -> SchemaItem {
        SchemaItem::new(name, ItemKind::Html(HtmlItem::permissive(value, max)))
    }

    pub fn json(name: &str, value: Value) -> SchemaItem {
        SchemaItem::new(name, ItemKind::Json(JsonItem::new(value)))
    }
}
