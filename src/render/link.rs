//! Link target construction
//!
//! Every href of the strip has the shape
//!
//! ```text
//! <path>?<extra params>&amp;<page param>=<P>&amp;<separator param>=<S>[#<fragment>]
//! ```
//!
//! The output is embedded in HTML, so pairs are joined with `&amp;`.

use crate::config::{QueryParams, RenderConfig};
use crate::state::PaginationState;
use url::form_urlencoded;

/// HTML-escaped query pair delimiter
pub const AMP: &str = "&amp;";

/// Page/separator pair a link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTarget {
    /// Page number; block links may carry only a separator
    pub page: Option<u32>,
    pub separator: u32,
}

impl LinkTarget {
    /// Target a page within a block
    pub fn page(page: u32, separator: u32) -> Self {
        Self {
            page: Some(page),
            separator,
        }
    }

    /// Target a block by its separator alone
    pub fn separator(separator: u32) -> Self {
        Self {
            page: None,
            separator,
        }
    }
}

/// Builds hrefs for one render call
///
/// The path and extra query parameters are encoded once up front.
#[derive(Debug, Clone)]
pub struct LinkBuilder<'a> {
    prefix: String,
    page_param: &'a str,
    separator_param: &'a str,
    fragment: Option<&'a str>,
}

impl<'a> LinkBuilder<'a> {
    /// Prepare links for a request path, state and config
    pub fn new(
        current_path: &str,
        state: &'a PaginationState,
        config: &'a RenderConfig,
    ) -> Self {
        let mut prefix = String::from(request_path(current_path));
        prefix.push('?');
        prefix.push_str(&query_prefix(&config.query_params));

        Self {
            prefix,
            page_param: &state.page_param,
            separator_param: &state.separator_param,
            fragment: config.fragment_identifier.as_deref(),
        }
    }

    /// Full href of a target
    pub fn href(&self, target: LinkTarget) -> String {
        let mut href = self.prefix.clone();
        if let Some(page) = target.page {
            push_pair(&mut href, self.page_param, &page.to_string());
            href.push_str(AMP);
        }
        push_pair(&mut href, self.separator_param, &target.separator.to_string());
        if let Some(fragment) = self.fragment {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }
}

fn push_pair(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push('=');
    out.push_str(value);
}

/// Request path with any query string removed
pub fn request_path(current_path: &str) -> &str {
    current_path
        .split_once('?')
        .map_or(current_path, |(path, _)| path)
}

/// Extra parameters as `key=value&amp;` pairs, in insertion order
///
/// Parameters with an empty value are left out entirely. Values are
/// form-urlencoded; keys are emitted as given.
pub fn query_prefix(params: &QueryParams) -> String {
    let mut query = String::new();
    for (key, value) in params.iter().filter(|(_, value)| !value.is_empty()) {
        push_pair(&mut query, key, &encode_value(value));
        query.push_str(AMP);
    }
    query
}

/// Form-urlencode a query value (space becomes `+`)
pub fn encode_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
