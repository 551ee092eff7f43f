mod preference_repo;

pub use preference_repo::SqlitePreferenceRepository;
