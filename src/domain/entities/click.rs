//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a shortened link is accessed.
///
/// Append-only; exactly one is recorded per successful redirect. Client
/// metadata is optional to handle missing headers gracefully.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

/// Input data for recording a new click event.
///
/// The `link_id` must reference an existing link; the timestamp is assigned
/// by the ledger when the event is appended.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_creation_with_all_fields() {
        let now = Utc::now();
        let click = Click {
            id: 1,
            link_id: 42,
            clicked_at: now,
            user_agent: Some("Mozilla/5.0".to_string()),
            referer: Some("https://google.com".to_string()),
        };

        assert_eq!(click.link_id, 42);
        assert_eq!(click.clicked_at, now);
        assert_eq!(click.user_agent.as_deref(), Some("Mozilla/5.0"));
    }

    #[test]
    fn test_new_click_minimal() {
        let new_click = NewClick {
            link_id: 10,
            user_agent: None,
            referer: None,
        };

        assert_eq!(new_click.link_id, 10);
        assert!(new_click.user_agent.is_none());
        assert!(new_click.referer.is_none());
    }
}
