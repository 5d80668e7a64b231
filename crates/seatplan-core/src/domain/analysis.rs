//! Analysis snapshot entities.
//!
//! An [`AnalysisResult`] is produced by the upstream business-matching
//! analysis and handed to this crate as an already-validated, read-only
//! snapshot.  Nothing in the domain layer ever mutates it.
//!
//! # Wire shape
//!
//! The snapshot arrives as camelCase JSON:
//!
//! ```json
//! {
//!   "overallScore": 78,
//!   "summary": "...",
//!   "participants": [{ "id": "p1", "name": "Ana", "company": "Acme", "segment": "Tech" }],
//!   "individualScores": [{ "participantId": "p1", "score": 82, "potentialConnections": 3,
//!                          "recommendedConnections": [] }],
//!   "segmentDistribution": [{ "name": "Tech", "value": 1 }],
//!   "suggestedLayout": "mesa_u",
//!   "seatingGroups": [["p1"]]
//! }
//! ```
//!
//! Numeric fields are declared as plain JSON numbers upstream, so scores may
//! arrive as `82.0`.  They are rounded and clamped to `0..=100` on the way in.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize};

use super::layout_format::LayoutFormat;

/// Stable identifier of a participant, assigned by the upstream analysis.
pub type ParticipantId = String;

/// Highest value a Business Index score can take.
pub const MAX_SCORE: u8 = 100;

/// One event participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub company: String,
    /// Free-text market segment (e.g. `"Tech"`, `"Varejo"`).
    pub segment: String,
    /// `true` for the event host(s); at most a handful per snapshot.
    #[serde(default)]
    pub is_host: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
}

/// How a recommended partner relates to the participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// The partner is a potential customer.
    Buyer,
    /// The partner is a potential supplier.
    Seller,
    /// Strategic partnership or referral.
    Partner,
}

/// A single recommended connection for a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedConnection {
    pub partner_id: ParticipantId,
    #[serde(deserialize_with = "deserialize_score")]
    pub score: u8,
    pub reason: String,
    #[serde(rename = "type")]
    pub kind: ConnectionType,
}

/// Per-participant Business Index and its recommended connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualScore {
    pub participant_id: ParticipantId,
    #[serde(deserialize_with = "deserialize_score")]
    pub score: u8,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub potential_connections: u32,
    #[serde(default)]
    pub recommended_connections: Vec<RecommendedConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_reasoning: Option<String>,
}

/// One bar of the segment distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentShare {
    pub name: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub value: u32,
}

/// A ranked pair of participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMatch {
    pub participant1_id: ParticipantId,
    pub participant2_id: ParticipantId,
    #[serde(deserialize_with = "deserialize_score")]
    pub score: u8,
    pub reasoning: String,
}

/// The complete upstream analysis snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub overall_score: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub individual_scores: Vec<IndividualScore>,
    #[serde(default)]
    pub top_matches: Vec<TopMatch>,
    #[serde(default)]
    pub segment_distribution: Vec<SegmentShare>,
    pub suggested_layout: LayoutFormat,
    /// Clusters of participant IDs that should sit together, in the order
    /// the analysis ranked them.
    #[serde(default)]
    pub seating_groups: Vec<Vec<ParticipantId>>,
}

impl AnalysisResult {
    /// Looks up a participant by ID.
    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Builds the score lookup used by the visibility filter.
    pub fn score_index(&self) -> ScoreIndex {
        ScoreIndex::build(&self.participants, &self.individual_scores)
    }

    /// Sorted, de-duplicated segment names (the segment filter options).
    pub fn segments(&self) -> Vec<String> {
        unique_segments(&self.participants)
    }
}

/// Returns every distinct segment name in lexicographic order.
pub fn unique_segments(participants: &[Participant]) -> Vec<String> {
    let mut segments: Vec<String> = participants
        .iter()
        .map(|p| p.segment.clone())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    segments.sort();
    segments
}

// ── ScoreIndex ────────────────────────────────────────────────────────────────

/// O(1) lookup from participant ID to Business Index score.
///
/// Scores that point at an unknown participant are ignored.  When the same
/// participant is scored more than once, the first entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreIndex {
    scores: HashMap<ParticipantId, u8>,
}

impl ScoreIndex {
    pub fn build(participants: &[Participant], scores: &[IndividualScore]) -> Self {
        let known: HashSet<&str> = participants.iter().map(|p| p.id.as_str()).collect();
        let mut map = HashMap::with_capacity(scores.len());
        for entry in scores {
            if !known.contains(entry.participant_id.as_str()) {
                continue;
            }
            map.entry(entry.participant_id.clone()).or_insert(entry.score);
        }
        Self { scores: map }
    }

    /// Returns the score for `id`, if one was supplied.
    pub fn get(&self, id: &str) -> Option<u8> {
        self.scores.get(id).copied()
    }

    /// Returns the score for `id`, reading a missing score as `0`.
    pub fn score_of(&self, id: &str) -> u8 {
        self.get(id).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

// ── Lenient numeric decoding ──────────────────────────────────────────────────

fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(raw.round().clamp(0.0, f64::from(MAX_SCORE)) as u8)
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(raw.round().max(0.0) as u32)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(id: &str, segment: &str) -> Participant {
        Participant {
            id: id.to_string(),
            name: format!("Name {id}"),
            company: format!("Company {id}"),
            segment: segment.to_string(),
            is_host: false,
            event_name: None,
        }
    }

    fn score(id: &str, value: u8) -> IndividualScore {
        IndividualScore {
            participant_id: id.to_string(),
            score: value,
            potential_connections: 0,
            recommended_connections: Vec::new(),
            score_reasoning: None,
        }
    }

    // ── ScoreIndex ────────────────────────────────────────────────────────────

    #[test]
    fn test_score_index_returns_score_for_known_participant() {
        let participants = vec![participant("a", "Tech")];
        let index = ScoreIndex::build(&participants, &[score("a", 70)]);
        assert_eq!(index.get("a"), Some(70));
        assert_eq!(index.score_of("a"), 70);
    }

    #[test]
    fn test_score_index_reads_missing_score_as_zero() {
        let participants = vec![participant("a", "Tech")];
        let index = ScoreIndex::build(&participants, &[]);
        assert_eq!(index.get("a"), None);
        assert_eq!(index.score_of("a"), 0);
    }

    #[test]
    fn test_score_index_ignores_scores_for_unknown_participants() {
        let participants = vec![participant("a", "Tech")];
        let index = ScoreIndex::build(&participants, &[score("ghost", 99)]);
        assert!(index.is_empty());
        assert_eq!(index.score_of("ghost"), 0);
    }

    #[test]
    fn test_score_index_keeps_first_entry_for_duplicate_participant() {
        let participants = vec![participant("a", "Tech")];
        let index = ScoreIndex::build(&participants, &[score("a", 40), score("a", 90)]);
        assert_eq!(index.score_of("a"), 40);
        assert_eq!(index.len(), 1);
    }

    // ── unique_segments ───────────────────────────────────────────────────────

    #[test]
    fn test_unique_segments_are_sorted_and_deduplicated() {
        let participants = vec![
            participant("a", "Varejo"),
            participant("b", "Tech"),
            participant("c", "Varejo"),
            participant("d", "Agro"),
        ];
        assert_eq!(unique_segments(&participants), vec!["Agro", "Tech", "Varejo"]);
    }

    #[test]
    fn test_unique_segments_of_empty_list_is_empty() {
        assert!(unique_segments(&[]).is_empty());
    }

    // ── JSON decoding ─────────────────────────────────────────────────────────

    #[test]
    fn test_analysis_result_decodes_camel_case_snapshot() {
        let json = r#"{
            "overallScore": 81.5,
            "summary": "Boa sinergia.",
            "participants": [
                {"id": "p1", "name": "Ana", "company": "Acme", "segment": "Tech", "isHost": true},
                {"id": "p2", "name": "Bruno", "company": "Loja", "segment": "Varejo", "eventName": "Meetup"}
            ],
            "individualScores": [
                {"participantId": "p1", "score": 82.0, "potentialConnections": 3,
                 "scoreReasoning": "Hub de tecnologia",
                 "recommendedConnections": [
                    {"partnerId": "p2", "score": 90, "reason": "Modernizacao do varejo", "type": "buyer"}
                 ]}
            ],
            "topMatches": [
                {"participant1Id": "p1", "participant2Id": "p2", "score": 90, "reasoning": "Cadeia de valor"}
            ],
            "segmentDistribution": [{"name": "Tech", "value": 1}, {"name": "Varejo", "value": 1}],
            "suggestedLayout": "mesa_u",
            "seatingGroups": [["p1", "p2"]]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("decode snapshot");

        assert_eq!(result.suggested_layout, LayoutFormat::UShape);
        assert_eq!(result.participants.len(), 2);
        assert!(result.participants[0].is_host);
        assert!(!result.participants[1].is_host);
        assert_eq!(result.participants[1].event_name.as_deref(), Some("Meetup"));
        assert_eq!(result.individual_scores[0].score, 82);
        assert_eq!(
            result.individual_scores[0].recommended_connections[0].kind,
            ConnectionType::Buyer
        );
        assert_eq!(result.top_matches[0].participant2_id, "p2");
        assert_eq!(result.seating_groups, vec![vec!["p1".to_string(), "p2".to_string()]]);
    }

    #[test]
    fn test_analysis_result_defaults_missing_lists_to_empty() {
        let json = r#"{"suggestedLayout": "buffet"}"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("decode minimal");
        assert!(result.participants.is_empty());
        assert!(result.seating_groups.is_empty());
        assert!(result.top_matches.is_empty());
        assert_eq!(result.suggested_layout, LayoutFormat::Banquet);
    }

    #[test]
    fn test_out_of_range_score_is_clamped_to_one_hundred() {
        let json = r#"{"participantId": "p1", "score": 140, "recommendedConnections": []}"#;
        let entry: IndividualScore = serde_json::from_str(json).expect("decode score");
        assert_eq!(entry.score, MAX_SCORE);
    }

    #[test]
    fn test_negative_score_is_clamped_to_zero() {
        let json = r#"{"participantId": "p1", "score": -3}"#;
        let entry: IndividualScore = serde_json::from_str(json).expect("decode score");
        assert_eq!(entry.score, 0);
    }

    #[test]
    fn test_unknown_suggested_layout_is_rejected() {
        let json = r#"{"suggestedLayout": "auditorio"}"#;
        let result: Result<AnalysisResult, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_participant_lookup_finds_by_id() {
        let json = r#"{"suggestedLayout": "teatro",
            "participants": [{"id": "p9", "name": "Caio", "company": "X", "segment": "Agro"}]}"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("decode");
        assert_eq!(result.participant("p9").map(|p| p.name.as_str()), Some("Caio"));
        assert!(result.participant("missing").is_none());
    }
}
