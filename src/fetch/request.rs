//! Request tagging for host-performed web requests.
//!
//! The Zellij host performs every HTTP request and reports completion as a
//! separate event. The only thing that survives the round trip is the string
//! context map handed to `web_request`, so each request carries a
//! [`RequestTag`] encoded into that map. The tag identifies the page load
//! (its generation) and the slot the response belongs to.

use std::collections::BTreeMap;

const KEY_GENERATION: &str = "pokedex.generation";
const KEY_KIND: &str = "pokedex.kind";
const KEY_INDEX: &str = "pokedex.index";

const KIND_LIST: &str = "list";
const KIND_DETAIL: &str = "detail";

/// What a response is for within one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// The list page request that starts a load.
    List,
    /// The detail request for the item at `index` in list order.
    Detail { index: usize },
}

/// Identifies a response: which page load issued it and for which slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag {
    pub generation: u64,
    pub kind: RequestKind,
}

impl RequestTag {
    #[must_use]
    pub const fn list(generation: u64) -> Self {
        Self {
            generation,
            kind: RequestKind::List,
        }
    }

    #[must_use]
    pub const fn detail(generation: u64, index: usize) -> Self {
        Self {
            generation,
            kind: RequestKind::Detail { index },
        }
    }

    /// Encodes the tag into a web request context map.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokedex::fetch::RequestTag;
    ///
    /// let tag = RequestTag::detail(7, 3);
    /// assert_eq!(RequestTag::from_context(&tag.to_context()), Some(tag));
    /// ```
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(KEY_GENERATION.to_string(), self.generation.to_string());
        match self.kind {
            RequestKind::List => {
                context.insert(KEY_KIND.to_string(), KIND_LIST.to_string());
            }
            RequestKind::Detail { index } => {
                context.insert(KEY_KIND.to_string(), KIND_DETAIL.to_string());
                context.insert(KEY_INDEX.to_string(), index.to_string());
            }
        }
        context
    }

    /// Decodes a tag from a web request context map.
    ///
    /// Returns `None` when the context was not produced by [`to_context`](Self::to_context),
    /// e.g. for requests issued by something other than the page loader.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let generation = context.get(KEY_GENERATION)?.parse().ok()?;
        let kind = match context.get(KEY_KIND)?.as_str() {
            KIND_LIST => RequestKind::List,
            KIND_DETAIL => RequestKind::Detail {
                index: context.get(KEY_INDEX)?.parse().ok()?,
            },
            _ => return None,
        };
        Some(Self { generation, kind })
    }
}

/// A GET request the plugin runtime should hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub tag: RequestTag,
}

impl FetchRequest {
    #[must_use]
    pub fn new(url: impl Into<String>, tag: RequestTag) -> Self {
        Self {
            url: url.into(),
            tag,
        }
    }

    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        self.tag.to_context()
    }
}
