//! Response envelope shared by every endpoint: `{ meta: { status }, data }`.

use serde::{Deserialize, Serialize};

pub const STATUS_OK: &str = "OK";
pub const STATUS_FAILURE: &str = "FAILURE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub meta: Meta,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub status: String,
}

impl Meta {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_OK)
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            meta: Meta {
                status: STATUS_OK.to_string(),
            },
            data,
        }
    }
}

impl ApiResponse<FailureMessage> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            meta: Meta {
                status: STATUS_FAILURE.to_string(),
            },
            data: FailureMessage {
                message: message.into(),
            },
        }
    }
}

/// `data` payload of a failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureMessage {
    #[serde(rename = "mensaje")]
    pub message: String,
}

/// `data` payload of póliza update/delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub mensaje: MessageId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageId {
    #[serde(rename = "idMensaje")]
    pub id: String,
}

/// `data` payload of the paginated endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,

    #[serde(rename = "totalItems")]
    pub total_items: u64,

    #[serde(rename = "totalPages")]
    pub total_pages: u32,

    #[serde(rename = "currentPage", default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_items: 0,
            total_pages: 0,
            current_page: None,
        }
    }
}

impl<T> Page<T> {
    /// Cut one page out of an already filtered and sorted collection
    pub fn slice(all: Vec<T>, page: usize, size: usize) -> Self {
        let size = size.max(1);
        let total_items = all.len();
        let total_pages = total_items.div_ceil(size);
        let content: Vec<T> = all
            .into_iter()
            .skip(page.saturating_mul(size))
            .take(size)
            .collect();
        Self {
            content,
            total_items: total_items as u64,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
            current_page: Some(u32::try_from(page).unwrap_or(u32::MAX)),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
            current_page: self.current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::failure("Artículo no encontrado")).unwrap();
        assert_eq!(json["meta"]["status"], "FAILURE");
        assert_eq!(json["data"]["mensaje"], "Artículo no encontrado");
    }

    #[test]
    fn test_page_slice() {
        let page = Page::slice((1..=23).collect::<Vec<i32>>(), 2, 10);
        assert_eq!(page.content, vec![21, 22, 23]);
        assert_eq!(page.total_items, 23);
        assert_eq!(page.total_pages, 3);

        let past_end = Page::slice(vec![1, 2], 5, 10);
        assert!(past_end.content.is_empty());
        assert_eq!(past_end.total_pages, 1);
    }

    #[test]
    fn test_page_slice_far_past_end() {
        let page = Page::slice(vec![1, 2, 3], usize::MAX, 50);
        assert!(page.content.is_empty());
        assert_eq!(page.total_items, 3);
        assert_eq!(page.current_page, Some(u32::MAX));
    }

    #[test]
    fn test_page_reads_spring_payload() {
        let json = r#"{"content":[1,2],"currentPage":0,"totalItems":2,"totalPages":1}"#;
        let page: Page<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2]);
        assert_eq!(page.current_page, Some(0));
    }
}
