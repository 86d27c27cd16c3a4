use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Pagination envelope shared by every list endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
}

impl PaginationDto {
    pub fn new(total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };
        Self {
            total,
            page,
            total_pages,
        }
    }
}
