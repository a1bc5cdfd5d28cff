//! Backend response envelope types.
//!
//! Every backend endpoint wraps its payload in a `result` field; list
//! endpoints additionally page it under `result.content`.

use serde::{Deserialize, Serialize};

/// Top-level envelope: `{"result": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: T,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope.
    pub fn into_result(self) -> T {
        self.result
    }
}

/// A page of a list endpoint: `{"content": [...], ...}`.
///
/// The backend sends additional paging metadata (total counts, page
/// number) that none of the pages consume; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
}

impl<T> Page<T> {
    /// Number of items in this page.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether this page is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u64,
        name: String,
    }

    #[test]
    fn test_paged_envelope_deserializes() {
        let json = r#"{"result":{"content":[{"id":1,"name":"Clothing"},{"id":2,"name":"Outdoor"}],"totalElements":2,"page":0}}"#;
        let resp: ApiResponse<Page<Item>> = serde_json::from_str(json).unwrap();
        let page = resp.into_result();
        assert_eq!(page.len(), 2);
        assert_eq!(page.content[0].name, "Clothing");
    }

    #[test]
    fn test_missing_content_is_empty() {
        let json = r#"{"result":{"totalElements":0}}"#;
        let resp: ApiResponse<Page<Item>> = serde_json::from_str(json).unwrap();
        assert!(resp.result.is_empty());
    }

    #[test]
    fn test_singular_envelope_deserializes() {
        let json = r#"{"result":{"id":7,"name":"Rug"}}"#;
        let resp: ApiResponse<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.result, Item { id: 7, name: "Rug".to_string() });
    }
}
