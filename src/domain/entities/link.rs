//! Link entity representing a shortened URL mapping.

/// A persisted mapping from a short code to a full URL.
///
/// `id` is assigned by the store, increases monotonically and is never
/// reused after deletion. Links are immutable: they are only created and
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub full_url: String,
    pub short_code: String,
}

impl Link {
    pub fn new(id: i64, full_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            id,
            full_url: full_url.into(),
            short_code: short_code.into(),
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub full_url: String,
    pub short_code: String,
}

impl NewLink {
    pub fn new(full_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            full_url: full_url.into(),
            short_code: short_code.into(),
        }
    }

    /// Attaches the store-assigned id.
    pub fn into_link(self, id: i64) -> Link {
        Link {
            id,
            full_url: self.full_url,
            short_code: self.short_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let link = Link::new(1, "https://example.com", "abc123");

        assert_eq!(link.id, 1);
        assert_eq!(link.full_url, "https://example.com");
        assert_eq!(link.short_code, "abc123");
    }

    #[test]
    fn test_new_link_into_link() {
        let link = NewLink::new("https://rust-lang.org", "xYz789").into_link(42);

        assert_eq!(link, Link::new(42, "https://rust-lang.org", "xYz789"));
    }
}
