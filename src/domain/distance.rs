// Distance resolution and aggregation rules for transport segments
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw distance candidates for one segment, as stored by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentDistance {
    #[serde(default)]
    pub user_distance: Option<f64>,
    #[serde(default)]
    pub telematic_distance: Option<f64>,
    #[serde(default)]
    pub estimated_distance: Option<f64>,
}

impl SegmentDistance {
    pub fn new(
        user_distance: Option<f64>,
        telematic_distance: Option<f64>,
        estimated_distance: Option<f64>,
    ) -> Self {
        Self {
            user_distance,
            telematic_distance,
            estimated_distance,
        }
    }

    pub fn resolve(&self) -> ResolvedDistance {
        resolve_distance(
            self.user_distance,
            self.telematic_distance,
            self.estimated_distance,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceSource {
    User,
    Telematic,
    Estimated,
}

/// The distance shown for a segment and where it came from.
/// `source` carries no meaning when `distance` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDistance {
    pub distance: Option<f64>,
    pub source: DistanceSource,
}

/// Segment uid -> raw distance candidates. Ordered so totals are summed in
/// the same order on every call.
pub type DistanceBySegment = BTreeMap<String, SegmentDistance>;

/// Pick the segment distance by priority user > telematic > estimated.
/// Zero and NaN count as missing here.
pub fn resolve_distance(
    user_distance: Option<f64>,
    telematic_distance: Option<f64>,
    estimated_distance: Option<f64>,
) -> ResolvedDistance {
    let candidates = [
        (user_distance, DistanceSource::User),
        (telematic_distance, DistanceSource::Telematic),
        (estimated_distance, DistanceSource::Estimated),
    ];

    candidates
        .into_iter()
        .find_map(|(value, source)| {
            value.filter(|v| is_truthy(*v)).map(|v| ResolvedDistance {
                distance: Some(round2(v)),
                source,
            })
        })
        .unwrap_or(ResolvedDistance {
            distance: None,
            source: DistanceSource::Estimated,
        })
}

/// Sum the coalesced distance of every segment.
///
/// Unlike [`resolve_distance`], a zero is a real value here. A segment with no
/// candidate at all makes the whole total unknown. The sum is not rounded.
pub fn total_distance_by_segment(distances: &DistanceBySegment) -> Option<f64> {
    distances.values().try_fold(0.0, |total, segment| {
        segment
            .user_distance
            .or(segment.telematic_distance)
            .or(segment.estimated_distance)
            .map(|distance| total + distance)
    })
}

fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

fn round2(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

// Ties go toward +inf, like Math.round
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}
