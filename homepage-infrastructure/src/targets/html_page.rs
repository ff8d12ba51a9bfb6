//! Host page render target.
//!
//! Widgets write into elements of an existing HTML document, addressed by
//! their `id` attribute. Every lookup parses the page with `scraper`, so
//! optional end tags, RCDATA elements and comments follow the HTML parsing
//! rules. The page is written back in the parser's serialized form.

use std::path::Path;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use scraper::node::Text;
use scraper::{Html, Node, Selector};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use homepage_domain::ports::RenderTarget;
use homepage_domain::ContainerId;

const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

pub struct HtmlPageTarget {
    document: Mutex<String>,
}

impl HtmlPageTarget {
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(html.into()),
        }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let html = fs::read_to_string(path)
            .await
            .map_err(|err| anyhow!("failed to read host page {}: {}", path.display(), err))?;
        Ok(Self::from_html(html))
    }

    pub async fn html(&self) -> String {
        self.document.lock().await.clone()
    }

    pub async fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let html = self.html().await;
        fs::write(path, html).await?;
        Ok(())
    }
}

#[async_trait]
impl RenderTarget for HtmlPageTarget {
    async fn has_container(&self, id: &ContainerId) -> bool {
        let document = self.document.lock().await;
        contains_container(&document, id.as_str())
    }

    async fn set_inner_html(&self, id: &ContainerId, html: &str) -> Result<()> {
        let mut document = self.document.lock().await;
        let updated = replace_children(&document, id.as_str(), html)?;
        debug!(container = %id, bytes = html.len(), "replacing container content");
        *document = updated;
        Ok(())
    }
}

fn id_selector() -> Result<Selector> {
    Selector::parse("[id]").map_err(|err| anyhow!("invalid id selector: {:?}", err))
}

/// Whether the parsed page holds an element whose `id` equals `id`.
fn contains_container(source: &str, id: &str) -> bool {
    let Ok(selector) = id_selector() else {
        return false;
    };
    let document = Html::parse_document(source);
    let found = document
        .select(&selector)
        .any(|element| element.value().attr("id") == Some(id));
    found
}

/// Serializes `source` with the children of element `id` replaced by `html`.
///
/// The container's children are swapped for a text marker in the tree, and
/// the marker is replaced by the fragment after serialization, so the
/// fragment reaches the page exactly as rendered.
fn replace_children(source: &str, id: &str, html: &str) -> Result<String> {
    let selector = id_selector()?;
    let mut document = Html::parse_document(source);
    let (node_id, name) = document
        .select(&selector)
        .find(|element| element.value().attr("id") == Some(id))
        .map(|element| (element.id(), element.value().name().to_ascii_lowercase()))
        .ok_or_else(|| anyhow!("container '{}' not found in host page", id))?;
    if VOID_ELEMENTS.contains(&name.as_str()) {
        return Err(anyhow!("container '{}' is a void <{}> element", id, name));
    }

    let marker = unique_marker(source, html);
    let mut container = document
        .tree
        .get_mut(node_id)
        .ok_or_else(|| anyhow!("container '{}' vanished from host page", id))?;
    while let Some(mut child) = container.first_child() {
        child.detach();
    }
    container.append(Node::Text(Text {
        text: marker.as_str().into(),
    }));

    let serialized = document.html();
    if !serialized.contains(&marker) {
        return Err(anyhow!("container '{}' cannot hold content", id));
    }
    Ok(serialized.replacen(&marker, html, 1))
}

fn unique_marker(source: &str, html: &str) -> String {
    let mut counter = 0u32;
    loop {
        let marker = format!("homepage-widget-slot-{}", counter);
        if !source.contains(&marker) && !html.contains(&marker) {
            return marker;
        }
        counter += 1;
    }
}
