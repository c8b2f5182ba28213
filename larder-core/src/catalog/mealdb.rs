//! Response decoding for TheMealDB and TheCocktailDB.
//!
//! Both catalogs share one API shape and differ only in field names, so a
//! single decoder handles either, keyed by [`ItemType`].

use serde_json::Value;

use super::{CatalogItem, ItemType};
use crate::error::CatalogError;

struct Fields {
    list: &'static str,
    id: &'static str,
    name: &'static str,
    thumb: &'static str,
}

const CATEGORY: &str = "strCategory";

fn fields(kind: ItemType) -> Fields {
    match kind {
        ItemType::Meal => Fields {
            list: "meals",
            id: "idMeal",
            name: "strMeal",
            thumb: "strMealThumb",
        },
        ItemType::Drink => Fields {
            list: "drinks",
            id: "idDrink",
            name: "strDrink",
            thumb: "strDrinkThumb",
        },
    }
}

/// Pull the record array out of a response. A null, missing, or non-array
/// field (TheCocktailDB sometimes answers `"no data found"`) means no results.
fn records(kind: ItemType, body: &str) -> Result<Vec<Value>, CatalogError> {
    let mut root: Value = serde_json::from_str(body)?;
    let list = root
        .get_mut(fields(kind).list)
        .map(Value::take)
        .unwrap_or(Value::Null);

    Ok(match list {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

fn text(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Decode a `search.php` response into normalized catalog items.
pub fn parse_search(kind: ItemType, body: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let f = fields(kind);
    Ok(records(kind, body)?
        .iter()
        .map(|record| CatalogItem {
            id: text(record, f.id).unwrap_or_default(),
            name: text(record, f.name),
            image: text(record, f.thumb),
            category: text(record, CATEGORY),
            kind,
        })
        .collect())
}

/// Decode a `lookup.php` response into the first raw record, if any.
pub fn parse_lookup(kind: ItemType, body: &str) -> Result<Option<Value>, CatalogError> {
    Ok(records(kind, body)?
        .into_iter()
        .next()
        .filter(Value::is_object))
}
