use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;
use tracing::info;

use crate::application::services::{AnalysisService, ProfileService, RoutineService};
use crate::presentation::state::{AppState, Gateways, Repositories, Services};
use glowguide_domain::detection::AcneDetector;
use glowguide_domain::navigation::Navigator;
use glowguide_domain::profile::PreferenceRepository;
use glowguide_infrastructure::http::{DetectionConfig, HttpAcneDetector};
use glowguide_infrastructure::persistence::{
    repositories::SqlitePreferenceRepository, Database,
};

/// Default data directory (~/.local/share/glowguide or the platform
/// equivalent).
pub fn default_data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base = dirs::data_dir().ok_or("Failed to resolve platform data directory")?;
    Ok(base.join("glowguide"))
}

pub async fn build_app_state(
    data_dir: PathBuf,
    detection: DetectionConfig,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let startup_started_at = Instant::now();

    let started_at = Instant::now();
    std::fs::create_dir_all(&data_dir)
        .map_err(|e| format!("Failed to create app data directory: {}", e))?;
    glowguide_infrastructure::logging::init_logger(data_dir.join("logs"))?;
    info!(
        "✓ Ensured app data dir exists ({}ms)",
        started_at.elapsed().as_millis()
    );

    let db_filename = if cfg!(debug_assertions) {
        "glowguide-dev.db"
    } else {
        "glowguide.db"
    };

    let db_path = data_dir.join(db_filename);
    let db_path_str = db_path.to_str().ok_or("Invalid database path")?;

    info!("Database path: {}", db_path_str);

    let started_at = Instant::now();
    let database = Database::new(db_path_str).await?;
    database.init_schema().await?;
    info!(
        "✓ Database ready ({}ms)",
        started_at.elapsed().as_millis()
    );

    let database = Arc::new(database);
    let pool = Arc::new(database.pool().clone());

    let preferences =
        Arc::new(SqlitePreferenceRepository::new(pool)) as Arc<dyn PreferenceRepository>;
    let detector = Arc::new(HttpAcneDetector::new(detection)?) as Arc<dyn AcneDetector>;

    let services = Services {
        analysis: Arc::new(AnalysisService::new(detector.clone())),
        profile: Arc::new(ProfileService::new(preferences.clone())),
        routine: Arc::new(RoutineService::new(preferences.clone())),
    };

    // Returning users skip straight to the main app.
    let navigator = if preferences.load_onboarding_complete().await? {
        Navigator::resumed()
    } else {
        Navigator::new()
    };

    info!(
        "✓ App state built ({}ms total)",
        startup_started_at.elapsed().as_millis()
    );

    Ok(AppState {
        db: database,
        repositories: Repositories { preferences },
        gateways: Gateways { detector },
        services,
        navigator: Mutex::new(navigator),
    })
}
