//! Per-turn query analysis.
//!
//! Orchestrates extraction, profile merging and intent classification for
//! one incoming message, producing a transient `QueryAnalysis`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::extractor;
use super::intent::{QueryClassifier, QueryType};
use crate::models::UserProfile;
use crate::profile_store::ProfileStore;

/// Transient result of analyzing one turn. Recomputed every message,
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// Original user message
    pub query: String,
    /// Classified intent
    pub query_type: QueryType,
    /// Fields extracted from this message only
    pub extracted: UserProfile,
    /// Full accumulated profile after merging this turn's extraction
    pub profile: UserProfile,
    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

/// Analyzer combining the extractor and the intent classifier.
#[derive(Debug, Default)]
pub struct QueryAnalyzer {
    classifier: QueryClassifier,
}

impl QueryAnalyzer {
    pub fn new() -> Self {
        Self {
            classifier: QueryClassifier::new(),
        }
    }

    /// Analyze a message for `user_id`: extract biometric facts, merge them
    /// into the stored profile, classify intent, and snapshot the profile.
    pub fn analyze(&self, query: &str, store: &ProfileStore, user_id: &str) -> QueryAnalysis {
        let extracted = extractor::extract(query);
        store.merge(user_id, &extracted);

        let profile = store.get(user_id);
        let query_type = self.classifier.classify(query);

        debug!(
            user_id,
            query_type = query_type.label(),
            missing = ?profile.missing_fields(),
            "analyzed query"
        );

        QueryAnalysis {
            query: query.to_string(),
            query_type,
            extracted,
            profile,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_merges_into_store() {
        let store = ProfileStore::new();
        let analyzer = QueryAnalyzer::new();

        let analysis = analyzer.analyze("I'm 80kg and want to lose weight", &store, "u1");

        assert_eq!(analysis.query_type, QueryType::WeightLoss);
        assert_eq!(analysis.extracted.weight_kg, Some(80.0));
        assert_eq!(store.get("u1").weight_kg, Some(80.0));
    }

    #[test]
    fn test_snapshot_includes_earlier_turns() {
        let store = ProfileStore::new();
        let analyzer = QueryAnalyzer::new();

        analyzer.analyze("I'm 80kg", &store, "u1");
        let analysis = analyzer.analyze("I'm 180 cm", &store, "u1");

        assert_eq!(analysis.extracted.weight_kg, None);
        assert_eq!(analysis.profile.weight_kg, Some(80.0));
        assert_eq!(analysis.profile.height_cm, Some(180.0));
    }
}
