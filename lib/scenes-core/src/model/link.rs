use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// `_links` of a list response; `next` is present only while more pages exist
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub prev: Option<Link>,
    pub next: Option<Link>,
}

impl PagingLinks {
    pub fn next_href(&self) -> Option<&str> {
        self.next.as_ref().map(|link| link.href.as_str())
    }
}

/// One page of a paged list together with its navigation links
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub links: Option<PagingLinks>,
}

impl<T> Page<T> {
    pub fn next_href(&self) -> Option<&str> {
        self.links.as_ref().and_then(PagingLinks::next_href)
    }

    pub fn has_next(&self) -> bool {
        self.next_href().is_some()
    }
}
