// Distance summary of a transport, as served to the UI
use super::distance::{total_distance_by_segment, DistanceBySegment, ResolvedDistance, SegmentDistance};
use super::transport::Transport;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentSummary {
    pub segment_uid: String,
    pub origin: Option<String>,
    pub destination: Option<String>,
    #[serde(flatten)]
    pub candidates: SegmentDistance,
    pub resolved: ResolvedDistance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportDistances {
    pub transport_uid: String,
    pub segments: Vec<SegmentSummary>,
    pub total_distance: Option<f64>,
    pub distances_refreshed_at: Option<DateTime<Utc>>,
}

impl TransportDistances {
    /// Build the summary in segment order. Candidates come from `distances`,
    /// falling back to the segment record when the mapping lacks its uid.
    pub fn new(transport: &Transport, distances: &DistanceBySegment) -> Self {
        let segments = transport
            .segments
            .iter()
            .map(|segment| {
                let candidates = distances
                    .get(&segment.uid)
                    .copied()
                    .unwrap_or_else(|| segment.distance());

                SegmentSummary {
                    segment_uid: segment.uid.clone(),
                    origin: segment.origin.clone(),
                    destination: segment.destination.clone(),
                    candidates,
                    resolved: candidates.resolve(),
                }
            })
            .collect();

        Self {
            transport_uid: transport.uid.clone(),
            segments,
            total_distance: total_distance_by_segment(distances),
            distances_refreshed_at: transport.distances_refreshed_at,
        }
    }

    pub fn from_transport(transport: &Transport) -> Self {
        Self::new(transport, &transport.distance_by_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::distance::DistanceSource;
    use crate::domain::transport::Segment;

    #[test]
    fn test_summary_keeps_segment_order_and_total() {
        let transport = Transport::new(
            "T-7".to_string(),
            vec![
                Segment {
                    uid: "b".to_string(),
                    origin: Some("Lyon".to_string()),
                    destination: Some("Paris".to_string()),
                    user_distance: None,
                    telematic_distance: Some(465.123),
                    estimated_distance: Some(470.0),
                },
                Segment {
                    uid: "a".to_string(),
                    origin: Some("Paris".to_string()),
                    destination: Some("Lille".to_string()),
                    user_distance: Some(0.0),
                    telematic_distance: None,
                    estimated_distance: Some(225.0),
                },
            ],
        );

        let summary = TransportDistances::from_transport(&transport);

        assert_eq!(summary.transport_uid, "T-7");
        assert_eq!(summary.segments[0].segment_uid, "b");
        assert_eq!(summary.segments[0].resolved.distance, Some(465.12));
        assert_eq!(summary.segments[0].resolved.source, DistanceSource::Telematic);
        // the zero override is skipped for display but still counts in the total
        assert_eq!(summary.segments[1].resolved.distance, Some(225.0));
        assert_eq!(summary.segments[1].resolved.source, DistanceSource::Estimated);
        assert_eq!(summary.total_distance, Some(465.123));
    }

    #[test]
    fn test_summary_serializes_flat_candidates() {
        let transport = Transport::new(
            "T-8".to_string(),
            vec![Segment {
                uid: "s1".to_string(),
                origin: None,
                destination: None,
                user_distance: None,
                telematic_distance: None,
                estimated_distance: None,
            }],
        );

        let json = serde_json::to_value(TransportDistances::from_transport(&transport)).unwrap();
        let segment = &json["segments"][0];
        assert_eq!(segment["segment_uid"], "s1");
        assert!(segment["user_distance"].is_null());
        assert!(segment["resolved"]["distance"].is_null());
        assert_eq!(segment["resolved"]["source"], "estimated");
        assert!(json["total_distance"].is_null());
    }
}
