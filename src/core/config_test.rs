//! Configuration persistence tests
//!
//! Covers AppConfig file round-trips, default creation and import validation.

#[cfg(test)]
mod tests {
    use super::super::config::{AppConfig, AppSection};
    use crate::core::store::StoreConfig;
    use crate::core::youtube_api::YoutubeApiConfig;
    use tempfile::tempdir;

    /// Fully populated configuration for round-trip tests
    fn create_test_config() -> AppConfig {
        AppConfig {
            app: AppSection {
                app_name: "Test Album".to_string(),
                log_level: "debug".to_string(),
            },
            youtube: YoutubeApiConfig {
                api_key: "test-api-key".to_string(),
                base_url: "http://localhost:9000/youtube/v3".to_string(),
                timeout_seconds: 15,
            },
            store: StoreConfig {
                api_key: Some("firebase-key".to_string()),
                auth_domain: Some("album.firebaseapp.com".to_string()),
                project_id: Some("album".to_string()),
                storage_bucket: Some("album.appspot.com".to_string()),
                messaging_sender_id: Some("1234567890".to_string()),
                app_id: Some("1:1234567890:web:abc".to_string()),
                measurement_id: Some("G-ABC123".to_string()),
                videos_collection: "videos".to_string(),
            },
        }
    }

    #[test]
    fn test_default_config_creation() {
        let config = AppConfig::default();

        assert_eq!(config.app.app_name, "Video Album");
        assert_eq!(config.app.log_level, "info");
        assert_eq!(config.youtube.base_url, "https://www.googleapis.com/youtube/v3");
        assert_eq!(config.youtube.timeout_seconds, 30);
        assert!(config.youtube.api_key.is_empty());
        assert_eq!(config.store.videos_collection, "videos");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = create_test_config();
        config.save_to(&path).unwrap();
        assert!(path.exists());

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_load_creates_default_when_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(!path.exists());

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_rejects_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ \"app\": ").unwrap();

        let result = AppConfig::load_from(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config file"));
    }

    #[test]
    fn test_export_import_roundtrip() {
        let config = create_test_config();

        let json = config.export().unwrap();
        assert!(json.contains("videos_collection"));
        assert!(json.contains("timeout_seconds"));

        let imported = AppConfig::import(&json).unwrap();
        assert_eq!(imported, config);
    }
}
