//! Composite request DTOs

use serde::Deserialize;
use validator::Validate;

use core_kernel::PageRequest;

/// Optional page coordinates of a composite read
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page_number: Option<u32>,
    #[validate(range(min = 1))]
    pub page_size: Option<u32>,
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        PageRequest::new(query.page_number, query.page_size)
    }
}
