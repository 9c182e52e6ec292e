//! Config file document
//!
//! Config files are read as loosely typed YAML (JSON parses as YAML too) and
//! coerced into a `RenderConfig`. Values of the wrong type are converted;
//! unknown slots and non-mapping sections are skipped with a warning.

use super::builder::RenderConfigBuilder;
use super::types::RenderConfig;
use crate::types::{AnchorSlot, CssSlot, PaginationMode};
use serde::Deserialize;
use serde_yaml::Value;
use tracing::warn;

/// Raw render configuration as written in a config file
///
/// ```yaml
/// mode: increment            # or 1 / 2 / 3
/// show_first_page_link: true
/// css:
///   normal: page-link
///   active: current
/// anchors:
///   next_page: { text: "next", title: "Next page" }
///   last_page: "end"
/// query_params:              # emitted in this order
///   sort: name
///   dir: asc
/// fragment_identifier: "#results"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfigFile {
    #[serde(alias = "pagination_type")]
    pub mode: Option<Value>,
    #[serde(alias = "showFirstPageLink")]
    pub show_first_page_link: Option<Value>,
    #[serde(alias = "showLastPageLink")]
    pub show_last_page_link: Option<Value>,
    #[serde(alias = "showPreviousBlockLink")]
    pub show_previous_block_link: Option<Value>,
    #[serde(alias = "showNextBlockLink")]
    pub show_next_block_link: Option<Value>,
    #[serde(alias = "css_classes", alias = "cssClasses")]
    pub css: Option<Value>,
    pub anchors: Option<Value>,
    #[serde(alias = "extra_query_params", alias = "extraQueryParams")]
    pub query_params: Option<Value>,
    #[serde(alias = "fragmentIdentifier")]
    pub fragment_identifier: Option<Value>,
}

impl RenderConfigFile {
    /// Coerce the document into a finalized config
    pub fn into_config(self) -> RenderConfig {
        let mut builder = RenderConfigBuilder::new();

        if let Some(mode) = &self.mode {
            builder = builder.mode(coerce_mode(mode));
        }
        if let Some(show) = &self.show_first_page_link {
            builder = builder.show_first_page_link(coerce_bool(show));
        }
        if let Some(show) = &self.show_last_page_link {
            builder = builder.show_last_page_link(coerce_bool(show));
        }
        if let Some(show) = &self.show_previous_block_link {
            builder = builder.show_previous_block_link(coerce_bool(show));
        }
        if let Some(show) = &self.show_next_block_link {
            builder = builder.show_next_block_link(coerce_bool(show));
        }

        for (key, class) in entries(self.css.as_ref(), "css") {
            let key = coerce_string(key);
            match CssSlot::from_key(&key) {
                Some(slot) => builder = builder.css_class(slot, coerce_string(class)),
                None => warn!("Ignoring unknown CSS slot '{}'", key),
            }
        }

        for (key, anchor) in entries(self.anchors.as_ref(), "anchors") {
            let key = coerce_string(key);
            let Some(slot) = AnchorSlot::from_key(&key) else {
                warn!("Ignoring unknown anchor slot '{}'", key);
                continue;
            };
            builder = apply_anchor(builder, slot, anchor);
        }

        for (key, value) in entries(self.query_params.as_ref(), "query_params") {
            builder = builder.query_param(coerce_string(key), coerce_string(value));
        }

        if let Some(fragment) = &self.fragment_identifier {
            builder = builder.fragment_identifier(coerce_string(fragment));
        }

        builder.build()
    }
}

/// Entries of a mapping field; any other value is skipped with a warning
fn entries<'a>(
    value: Option<&'a Value>,
    field: &str,
) -> impl Iterator<Item = (&'a Value, &'a Value)> {
    let map = match value {
        None | Some(Value::Null) => None,
        Some(Value::Mapping(map)) => Some(map),
        Some(_) => {
            warn!("Ignoring '{}': expected a mapping", field);
            None
        }
    };
    map.into_iter().flatten()
}

/// Apply an anchor entry: a mapping with `text`/`title`, or a bare text
fn apply_anchor(
    mut builder: RenderConfigBuilder,
    slot: AnchorSlot,
    anchor: &Value,
) -> RenderConfigBuilder {
    match anchor {
        Value::Mapping(fields) => {
            let text = fields.get("text").or_else(|| fields.get("anchor"));
            if let Some(text) = text {
                builder = builder.anchor_text(slot, coerce_string(text));
            }
            if let Some(title) = fields.get("title") {
                builder = builder.anchor_title(slot, coerce_string(title));
            }
            builder
        }
        other => builder.anchor_text(slot, coerce_string(other)),
    }
}

/// Convert any YAML value to a string
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Tagged(tagged) => coerce_string(&tagged.value),
        // For complex types, use JSON serialization
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Convert any YAML value to a bool by truthiness
///
/// False: `null`, `false`, zero, `""`, `"0"`, `"false"`, `"no"`, `"off"`,
/// and empty sequences or mappings. Everything else is true.
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty()
                || s == "0"
                || s.eq_ignore_ascii_case("false")
                || s.eq_ignore_ascii_case("no")
                || s.eq_ignore_ascii_case("off"))
        }
        Value::Sequence(items) => !items.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => coerce_bool(&tagged.value),
    }
}

/// Convert a YAML value to a mode: a numeric code or a mode name
///
/// Anything unrecognized selects `Normal`.
pub fn coerce_mode(value: &Value) -> PaginationMode {
    match value {
        Value::Number(n) => {
            let code = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64));
            code.map_or(PaginationMode::Normal, PaginationMode::from_code)
        }
        Value::String(s) => s.parse().unwrap_or_else(|e| {
            warn!("{}, using normal", e);
            PaginationMode::Normal
        }),
        Value::Tagged(tagged) => coerce_mode(&tagged.value),
        _ => PaginationMode::Normal,
    }
}
