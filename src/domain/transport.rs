// Transport domain model
use super::distance::{total_distance_by_segment, DistanceBySegment, SegmentDistance};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One directed leg of a transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub uid: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub user_distance: Option<f64>,
    #[serde(default)]
    pub telematic_distance: Option<f64>,
    #[serde(default)]
    pub estimated_distance: Option<f64>,
}

impl Segment {
    pub fn distance(&self) -> SegmentDistance {
        SegmentDistance::new(
            self.user_distance,
            self.telematic_distance,
            self.estimated_distance,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    pub uid: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub distances_refreshed_at: Option<DateTime<Utc>>,
}

impl Transport {
    pub fn distance_by_segment(&self) -> DistanceBySegment {
        self.segments
            .iter()
            .map(|segment| (segment.uid.clone(), segment.distance()))
            .collect()
    }

    pub fn has_segment(&self, segment_uid: &str) -> bool {
        self.segments.iter().any(|s| s.uid == segment_uid)
    }

    pub fn total_distance(&self) -> Option<f64> {
        total_distance_by_segment(&self.distance_by_segment())
    }
}

/// A user edit of one segment's distance. `None` clears the override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceUpdate {
    #[serde(rename = "segment_id")]
    pub segment_uid: String,
    pub user_distance: Option<f64>,
}

/// Overlay user edits on a distance mapping. Only `user_distance` changes;
/// edits for segments missing from the mapping are ignored.
pub fn apply_user_distances(distances: &mut DistanceBySegment, updates: &[DistanceUpdate]) {
    for update in updates {
        if let Some(distance) = distances.get_mut(&update.segment_uid) {
            distance.user_distance = update.user_distance;
        }
    }
}

#[cfg(test)]
impl Transport {
    pub fn new(uid: String, segments: Vec<Segment>) -> Self {
        Self {
            uid,
            segments,
            distances_refreshed_at: None,
        }
    }
}

#[cfg(test)]
impl DistanceUpdate {
    pub fn new(segment_uid: impl Into<String>, user_distance: Option<f64>) -> Self {
        Self {
            segment_uid: segment_uid.into(),
            user_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(uid: &str, user: Option<f64>, telematic: Option<f64>, estimated: Option<f64>) -> Segment {
        Segment {
            uid: uid.to_string(),
            origin: None,
            destination: None,
            user_distance: user,
            telematic_distance: telematic,
            estimated_distance: estimated,
        }
    }

    #[test]
    fn test_distance_by_segment_keys_by_uid() {
        let transport = Transport::new(
            "T-1".to_string(),
            vec![
                segment("s1", None, Some(12.0), Some(11.0)),
                segment("s2", Some(3.0), None, None),
            ],
        );

        let distances = transport.distance_by_segment();
        assert_eq!(distances.len(), 2);
        assert_eq!(distances["s1"], SegmentDistance::new(None, Some(12.0), Some(11.0)));
        assert_eq!(distances["s2"].user_distance, Some(3.0));
        assert_eq!(transport.total_distance(), Some(15.0));
    }

    #[test]
    fn test_apply_user_distances_only_touches_user_field() {
        let transport = Transport::new(
            "T-1".to_string(),
            vec![
                segment("s1", Some(4.0), Some(12.0), Some(11.0)),
                segment("s2", None, None, None),
            ],
        );
        let mut distances = transport.distance_by_segment();

        apply_user_distances(
            &mut distances,
            &[
                DistanceUpdate::new("s1", None),
                DistanceUpdate::new("s2", Some(6.5)),
                DistanceUpdate::new("ghost", Some(1.0)),
            ],
        );

        assert_eq!(distances["s1"], SegmentDistance::new(None, Some(12.0), Some(11.0)));
        assert_eq!(distances["s2"], SegmentDistance::new(Some(6.5), None, None));
        assert!(!distances.contains_key("ghost"));
        assert_eq!(total_distance_by_segment(&distances), Some(18.5));
    }

    #[test]
    fn test_total_distance_same_on_every_call() {
        let segments = [120.13, 0.1, 0.2, 0.3, 465.3, 314.07, 12.345]
            .iter()
            .enumerate()
            .map(|(i, d)| segment(&format!("s{}", i), Some(*d), None, None))
            .collect();
        let transport = Transport::new("T-9".to_string(), segments);

        let first = transport.total_distance();
        assert!(first.is_some());
        for _ in 0..200 {
            assert_eq!(transport.total_distance(), first);
        }
    }

    #[test]
    fn test_distance_update_wire_name() {
        let update: DistanceUpdate =
            serde_json::from_str(r#"{"segment_id": "s9", "user_distance": 2.5}"#).unwrap();
        assert_eq!(update, DistanceUpdate::new("s9", Some(2.5)));

        let json = serde_json::to_value(DistanceUpdate::new("s9", None)).unwrap();
        assert_eq!(json, serde_json::json!({"segment_id": "s9", "user_distance": null}));
    }
}
