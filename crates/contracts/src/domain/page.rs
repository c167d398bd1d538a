use serde::{Deserialize, Serialize};

/// Paginated list envelope returned by the listing endpoints.
///
/// Every field is defaulted: a response missing a pagination field is treated
/// as an empty first page of ten, never as a parse error. The server is
/// authoritative for all four pagination values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub number: usize,
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: usize,
}

fn default_size() -> usize {
    10
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            number: 0,
            size: default_size(),
            total_elements: 0,
            total_pages: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_yields_defaults() {
        let page: Page<i32> = serde_json::from_str("{}").unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.number, 0);
        assert_eq!(page.size, 10);
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_full_envelope() {
        let json = r#"{
            "content": [1, 2, 3],
            "number": 2,
            "size": 25,
            "totalElements": 53,
            "totalPages": 3
        }"#;
        let page: Page<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.number, 2);
        assert_eq!(page.size, 25);
        assert_eq!(page.total_elements, 53);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_empty_content_is_not_an_error() {
        let json = r#"{"content": [], "totalElements": 0, "totalPages": 0}"#;
        let page: Page<i32> = serde_json::from_str(json).unwrap();
        assert!(page.content.is_empty());
    }
}
