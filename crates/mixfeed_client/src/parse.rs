use mixfeed_core::{Article, Error, Result};
use serde_json::Value;

/// Known locations of the article list, tried in preference order. The feed
/// gained a `response` wrapper between schema generations; both still occur.
const ITEM_ARRAY_PATHS: [&[&str]; 2] = [&["response", "leadContent"], &["leadContent"]];

/// Parse a feed body into articles.
///
/// Absent or blank input is a legitimately empty feed, not an error. A body
/// that is not JSON, or JSON without the article list at a known path, fails
/// with `MalformedPayload`. Individual items missing a required field are
/// dropped without affecting their neighbors; upstream item payloads are not
/// contractually stable, so the item boundary is where leniency lives.
pub fn parse_feed(body: Option<&str>) -> Result<Vec<Article>> {
    let Some(body) = body else {
        return Ok(Vec::new());
    };
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let root: Value = serde_json::from_str(body)
        .map_err(|e| Error::MalformedPayload(format!("invalid JSON: {}", e)))?;
    let items = item_array(&root).ok_or_else(|| {
        Error::MalformedPayload("no leadContent array at a known path".to_string())
    })?;

    let mut articles = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match parse_item(item) {
            Some(article) => articles.push(article),
            None => tracing::debug!(index, "skipping feed item with missing or mistyped fields"),
        }
    }
    Ok(articles)
}

fn item_array(root: &Value) -> Option<&Vec<Value>> {
    ITEM_ARRAY_PATHS.iter().find_map(|path| {
        let mut node = root;
        for key in *path {
            node = node.get(key)?;
        }
        node.as_array()
    })
}

fn parse_item(item: &Value) -> Option<Article> {
    let title = item.get("webTitle")?.as_str()?;
    let published_at = item.get("webPublicationDate")?.as_str()?;
    let url = item.get("webUrl")?.as_str()?;
    let author = item.get("fields")?.get("byline")?.as_str()?;
    let summary = summary_text(item.get("blocks")?)?;
    let section = item
        .get("sectionName")
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(Article {
        title: title.to_string(),
        author: author.to_string(),
        published_at: published_at.to_string(),
        summary,
        url: url.to_string(),
        section,
    })
}

/// Newer payloads nest the summary in the first element of the `body` array;
/// older ones carry it directly on `blocks`. Tried in that order.
fn summary_text(blocks: &Value) -> Option<String> {
    if let Some(entries) = blocks.get("body").and_then(Value::as_array) {
        return entries
            .first()?
            .get("bodyTextSummary")?
            .as_str()
            .map(str::to_string);
    }
    blocks.get("bodyTextSummary")?.as_str().map(str::to_string)
}
