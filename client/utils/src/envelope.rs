//! Response envelopes wrapping API payloads.
use serde::Deserialize;

/// Wrapper around all successful API response payloads.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    /// The payload of the response.
    pub data: T,

    /// Additional information about the response.
    #[serde(default)]
    pub meta: Meta,
}

/// Additional information attached to API responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Meta {
    /// Location of a newly created resource.
    #[serde(default)]
    pub location: Option<String>,

    /// Pagination information for list responses.
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Position of a page within a paginated list response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Pagination {
    /// Number of items in the current page.
    #[serde(default)]
    pub count: u32,

    /// Index of the current page, starting at 1.
    #[serde(default)]
    pub current_page: u32,

    /// Maximum number of items returned in each page.
    #[serde(default)]
    pub per_page: u32,

    /// Total number of items matching the request.
    #[serde(default)]
    pub total: u32,

    /// Total number of pages matching the request.
    #[serde(default)]
    pub total_pages: u32,
}

impl Pagination {
    /// Check if more pages are available after the given one.
    ///
    /// The page number is tracked by the caller, `current_page` is informational only.
    pub fn has_next(&self, page: u32) -> bool {
        page < self.total_pages
    }
}

/// Identifier of a resource returned by create operations.
#[derive(Clone, Debug, Deserialize)]
pub struct Created<I> {
    pub id: I,
}

#[cfg(test)]
mod tests {
    use super::Created;
    use super::Envelope;

    #[test]
    fn decode_list_envelope() {
        let body = r#"{
            "data": [1, 2],
            "meta": {"pagination": {"total": 4, "count": 2, "per_page": 2, "current_page": 1, "total_pages": 2}}
        }"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data, vec![1, 2]);
        let pagination = envelope.meta.pagination.unwrap();
        assert!(pagination.has_next(1));
        assert!(!pagination.has_next(2));
    }

    #[test]
    fn decode_created_envelope_without_meta() {
        let body = r#"{"data": {"id": 42}}"#;
        let envelope: Envelope<Created<i32>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.id, 42);
        assert!(envelope.meta.pagination.is_none());
    }

    #[test]
    fn last_page_has_no_next() {
        let body = r#"{"data": [], "meta": {"pagination": {"current_page": 3, "total_pages": 3}}}"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(body).unwrap();
        assert!(!envelope.meta.pagination.unwrap().has_next(3));
    }

    #[test]
    fn next_page_ignores_missing_current_page() {
        let body = r#"{"data": [], "meta": {"pagination": {"total_pages": 2}}}"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(body).unwrap();
        let pagination = envelope.meta.pagination.unwrap();
        assert_eq!(pagination.current_page, 0);
        assert!(pagination.has_next(1));
        assert!(!pagination.has_next(2));
    }
}
