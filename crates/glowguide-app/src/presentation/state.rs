use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::services::{AnalysisService, ProfileService, RoutineService};
use glowguide_domain::detection::AcneDetector;
use glowguide_domain::navigation::Navigator;
use glowguide_domain::profile::PreferenceRepository;
use glowguide_infrastructure::persistence::Database;

pub struct Repositories {
    pub preferences: Arc<dyn PreferenceRepository>,
}

pub struct Gateways {
    pub detector: Arc<dyn AcneDetector>,
}

pub struct Services {
    pub analysis: Arc<AnalysisService>,
    pub profile: Arc<ProfileService>,
    pub routine: Arc<RoutineService>,
}

/// Everything the command surface needs, built once at startup. The
/// navigator is the only mutable piece; commands serialize on its lock.
pub struct AppState {
    pub db: Arc<Database>,
    pub repositories: Repositories,
    pub gateways: Gateways,
    pub services: Services,
    pub navigator: Mutex<Navigator>,
}
