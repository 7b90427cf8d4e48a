// Application state for HTTP handlers
use crate::application::distance_service::DistanceService;

#[derive(Clone)]
pub struct AppState {
    pub distance_service: DistanceService,
}
