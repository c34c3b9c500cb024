//! Custom assertions for todoview JSON output.
//!
//! Provides high-level assertions that make tests more readable:
//! - Item count and id order on a todo page
//! - Pagination metadata
//! - User list selection

use anyhow::{Context, Result};
use serde_json::Value;

fn items(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["items"]
        .as_array()
        .context("Expected 'content.items' array in JSON")
}

/// Assert that the page contains the expected number of items.
pub fn assert_item_count(json: &Value, expected: usize) -> Result<()> {
    let items = items(json)?;
    if items.len() != expected {
        anyhow::bail!("Expected {} items, got {}", expected, items.len());
    }
    Ok(())
}

/// Assert the ids on the page, in display order.
pub fn assert_item_ids(json: &Value, expected: &[u64]) -> Result<()> {
    let ids: Vec<u64> = items(json)?
        .iter()
        .map(|item| item["id"].as_u64().context("Item missing numeric id"))
        .collect::<Result<_>>()?;

    if ids != expected {
        anyhow::bail!("Expected item ids {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

/// Assert total page count and matching item count.
pub fn assert_pagination(json: &Value, total_pages: u64, total_items: u64) -> Result<()> {
    let content = &json["content"];
    let pages = content["total_pages"]
        .as_u64()
        .context("Expected 'content.total_pages'")?;
    let matching = content["total_items"]
        .as_u64()
        .context("Expected 'content.total_items'")?;

    if pages != total_pages || matching != total_items {
        anyhow::bail!(
            "Expected {} pages / {} items, got {} pages / {} items",
            total_pages,
            total_items,
            pages,
            matching
        );
    }
    Ok(())
}

/// Assert that every listed user is ordered by age and only `selected` is marked.
pub fn assert_users_sorted_with_selection(json: &Value, selected: Option<u64>) -> Result<()> {
    let users = json["content"]["users"]
        .as_array()
        .context("Expected 'content.users' array in JSON")?;

    let mut last_age = 0;
    for (i, user) in users.iter().enumerate() {
        let age = user["age"]
            .as_u64()
            .with_context(|| format!("User {} missing age", i))?;
        if age < last_age {
            anyhow::bail!("User {} (age {}) is out of order", i, age);
        }
        last_age = age;

        let is_selected = user["selected"].as_bool().unwrap_or(false);
        let should_be = selected.is_some() && user["id"].as_u64() == selected;
        if is_selected != should_be {
            anyhow::bail!("User {} has selected = {}", user["id"], is_selected);
        }
    }
    Ok(())
}
