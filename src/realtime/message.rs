//! Wire format of dashboard push messages.

use serde::{Deserialize, Serialize};

/// One analytics update pushed to a dashboard.
///
/// `link_id` carries the public short id, matching what the dashboard already
/// holds from the link list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClickUpdate {
    pub link_id: String,
    pub click_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_expected_shape() {
        let update = ClickUpdate {
            link_id: "abc123xy".to_string(),
            click_count: 5,
        };

        let value = serde_json::to_value(&update).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "link_id": "abc123xy", "click_count": 5 })
        );
    }
}
