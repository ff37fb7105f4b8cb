//! Template interpolation for markup
//!
//! Handles `{{ variable }}` interpolation in record, no-data and error markup.
//! Supports nested access like `{{ record.author.name }}` and `{{ page.current }}`.
//! Bare paths such as `{{ title }}` resolve against the record first.

use crate::error::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Regex for matching template variables: {{ variable.path }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*)\s*\}\}")
        .expect("template regex is valid")
});

/// Context for template interpolation
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    /// The record being rendered
    pub record: Value,
    /// Page information (`current`, `total_pages`, ...)
    pub page: Value,
    /// Additional context variables (e.g. `message` for error markup)
    pub vars: Value,
}

impl TemplateContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create context for a single record
    pub fn with_record(record: Value) -> Self {
        Self {
            record,
            ..Default::default()
        }
    }

    /// Create context carrying only extra variables
    pub fn with_vars(vars: Value) -> Self {
        Self {
            vars,
            ..Default::default()
        }
    }

    /// Create context for a record rendered on a page
    pub fn for_record(record: Value, page: Value) -> Self {
        Self {
            record,
            page,
            ..Default::default()
        }
    }

    /// Get a value by path (e.g., "record.title")
    pub fn get(&self, path: &str) -> Option<&Value> {
        let parts: Vec<&str> = path.split('.').collect();
        if parts.is_empty() {
            return None;
        }

        let root = match parts[0] {
            "record" => &self.record,
            "page" => &self.page,
            "vars" => &self.vars,
            _ => {
                if let Some(val) = get_nested_value(&self.record, &parts) {
                    return Some(val);
                }
                return get_nested_value(&self.vars, &parts);
            }
        };

        if parts.len() == 1 {
            Some(root)
        } else {
            get_nested_value(root, &parts[1..])
        }
    }
}

/// Get a nested value from a JSON value by path
pub(crate) fn get_nested_value<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for part in path {
        match current {
            Value::Object(map) => {
                current = map.get(*part)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Render a template for insertion into markup, HTML-escaping every substituted value
///
/// Undefined variables are an error rather than silent blanks.
pub fn render_markup(template: &str, ctx: &TemplateContext) -> Result<String> {
    let mut errors = Vec::new();

    let rendered = TEMPLATE_REGEX.replace_all(template, |cap: &regex::Captures<'_>| {
        let var_path = &cap[1];
        match ctx.get(var_path) {
            Some(value) => escape_html(&value_to_string(value)),
            None => {
                errors.push(var_path.to_string());
                String::new()
            }
        }
    });

    if errors.is_empty() {
        Ok(rendered.into_owned())
    } else {
        Err(Error::undefined_var(errors.join(", ")))
    }
}

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Convert a JSON value to a string for template substitution
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // For complex types, use JSON serialization
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_substitution() {
        let ctx = TemplateContext::with_record(json!({"title": "Hello"}));

        let result = render_markup("<h3>{{ record.title }}</h3>", &ctx).unwrap();
        assert_eq!(result, "<h3>Hello</h3>");
    }

    #[test]
    fn test_bare_path_resolves_against_record() {
        let ctx = TemplateContext::with_record(json!({"id": 7, "name": "Ada"}));

        let result = render_markup("<li data-id=\"{{ id }}\">{{ name }}</li>", &ctx).unwrap();
        assert_eq!(result, "<li data-id=\"7\">Ada</li>");
    }

    #[test]
    fn test_nested_value() {
        let ctx = TemplateContext::with_record(json!({
            "author": {"name": "Grace", "handle": "@grace"}
        }));

        let result = render_markup("by {{ record.author.name }}", &ctx).unwrap();
        assert_eq!(result, "by Grace");
    }

    #[test]
    fn test_page_and_vars_context() {
        let mut ctx =
            TemplateContext::for_record(json!({}), json!({"current": 3, "total_pages": 9}));
        ctx.vars = json!({"message": "offline"});

        let result = render_markup(
            "{{ page.current }}/{{ page.total_pages }} {{ message }}",
            &ctx,
        )
        .unwrap();
        assert_eq!(result, "3/9 offline");
    }

    #[test]
    fn test_undefined_variable() {
        let ctx = TemplateContext::new();
        let result = render_markup("{{ record.missing }}", &ctx);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("record.missing"));
    }

    #[test]
    fn test_render_markup_escapes_values() {
        let ctx = TemplateContext::with_record(json!({"title": "<script>\"x\" & 'y'</script>"}));

        let result = render_markup("<p>{{ title }}</p>", &ctx).unwrap();
        assert_eq!(
            result,
            "<p>&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn test_no_templates() {
        let ctx = TemplateContext::new();
        let result = render_markup("plain string without templates", &ctx).unwrap();
        assert_eq!(result, "plain string without templates");
    }

    #[test]
    fn test_number_and_bool_substitution() {
        let ctx = TemplateContext::with_record(json!({"price": 12.5, "stock": true}));

        let result = render_markup("{{ price }}|{{ stock }}", &ctx).unwrap();
        assert_eq!(result, "12.5|true");
    }

    #[test]
    fn test_whitespace_in_template() {
        let ctx = TemplateContext::with_record(json!({"key": "value"}));

        assert_eq!(render_markup("{{record.key}}", &ctx).unwrap(), "value");
        assert_eq!(render_markup("{{ record.key }}", &ctx).unwrap(), "value");
        assert_eq!(render_markup("{{  record.key  }}", &ctx).unwrap(), "value");
    }
}
