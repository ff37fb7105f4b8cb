//! Markup builders
//!
//! Navigation markup follows the Bootstrap pagination structure: a `<ul>` of
//! `<li>` items whose links carry a `data-page` attribute for click dispatch.

use crate::config::{MarkupConfig, PaginationConfig};
use crate::error::Result;
use crate::template::{self, escape_html, TemplateContext};
use crate::types::JsonValue;
use crate::window::NavItem;
use serde_json::json;

/// Attribute carried by every clickable navigation element
pub const PAGE_ATTRIBUTE: &str = "data-page";

/// Most placeholder slots rendered while a page loads
pub const MAX_LOADING_SLOTS: u32 = 100;

/// Loading placeholder: one `loading_html` per record slot on the page,
/// up to [`MAX_LOADING_SLOTS`]
pub fn loading_markup(markup: &MarkupConfig, page_size: u32) -> String {
    markup
        .loading_html
        .repeat(page_size.min(MAX_LOADING_SLOTS) as usize)
}

/// Render a page of records
///
/// Uses the record function when one is configured, then the `record_html`
/// template, then an escaped JSON dump of each record. Templates can read
/// `{{ page.current }}` and `{{ page.size }}`.
pub fn records_markup(
    config: &PaginationConfig,
    page: u32,
    records: &[JsonValue],
) -> Result<String> {
    if let Some(template_fn) = &config.record_template {
        return Ok(records.iter().map(|r| template_fn.render(r)).collect());
    }

    match &config.markup.record_html {
        Some(record_html) => {
            let page = json!({ "current": page, "size": config.page_size });
            records
                .iter()
                .map(|record| {
                    let ctx = TemplateContext::for_record(record.clone(), page.clone());
                    template::render_markup(record_html, &ctx)
                })
                .collect()
        }
        None => Ok(records
            .iter()
            .map(|record| format!("<div>{}</div>", escape_html(&record.to_string())))
            .collect()),
    }
}

/// Render an error message into the content region
pub fn error_markup(config: &PaginationConfig, message: &str) -> String {
    if let Some(template_fn) = &config.error_template {
        return template_fn.render(message);
    }

    let ctx = TemplateContext::with_vars(json!({ "message": message }));
    template::render_markup(&config.markup.error_html, &ctx)
        .unwrap_or_else(|_| escape_html(message))
}

/// Render navigation items
///
/// No items means an empty region.
pub fn navigation_markup(items: &[NavItem], markup: &MarkupConfig) -> String {
    if items.is_empty() {
        return String::new();
    }

    let item_class = escape_html(&markup.page_item_class);
    let link_class = escape_html(&markup.page_link_class);

    let mut html = format!(r#"<ul class="{}">"#, escape_html(&markup.pagination_class));

    for item in items {
        let li = match *item {
            NavItem::Previous { page } => link_item(
                &item_class,
                &link_class,
                page,
                r#"<span aria-hidden="true">&laquo;</span>"#,
                Some("Previous"),
            ),
            NavItem::Next { page } => link_item(
                &item_class,
                &link_class,
                page,
                r#"<span aria-hidden="true">&raquo;</span>"#,
                Some("Next"),
            ),
            NavItem::First => link_item(&item_class, &link_class, 1, "1", None),
            NavItem::Last { page } => {
                link_item(&item_class, &link_class, page, &page.to_string(), None)
            }
            NavItem::Ellipsis => format!(
                r#"<li class="{item_class} disabled"><span class="{link_class}">...</span></li>"#
            ),
            NavItem::Page { number, active } => {
                let class = if active {
                    format!("{item_class} {}", escape_html(&markup.active_page_class))
                } else {
                    item_class.clone()
                };
                link_item(&class, &link_class, number, &number.to_string(), None)
            }
            NavItem::LoadMore { page } => format!(
                r##"<li class="{item_class}"><a class="{link_class}" href="#" {PAGE_ATTRIBUTE}="{page}" data-action="load-more">{}</a></li>"##,
                escape_html(&markup.load_more_label)
            ),
        };
        html.push_str(&li);
    }

    html.push_str("</ul>");
    html
}

fn link_item(
    item_class: &str,
    link_class: &str,
    page: u32,
    label: &str,
    aria_label: Option<&str>,
) -> String {
    let aria = aria_label
        .map(|a| format!(r#" aria-label="{a}""#))
        .unwrap_or_default();
    format!(
        r##"<li class="{item_class}"><a class="{link_class}" href="#" {PAGE_ATTRIBUTE}="{page}"{aria}>{label}</a></li>"##
    )
}
