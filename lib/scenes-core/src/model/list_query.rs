use serde::Serialize;
use serde_with::skip_serializing_none;

/// `$top`/`$skip` paging parameters of list operations
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    #[serde(rename = "$top")]
    pub top: Option<u32>,
    #[serde(rename = "$skip")]
    pub skip: Option<u32>,
}

impl ListQuery {
    pub fn page(top: u32, skip: u32) -> Self {
        Self {
            top: Some(top),
            skip: Some(skip),
        }
    }
}
