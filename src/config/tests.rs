#[cfg(test)]
mod tests {
    use crate::config::ConfigLoader;
    use crate::severity::Severity;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proclog.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn file_level_is_parsed() {
        let (_dir, path) = write_config("log_level = \"warning\"\n");

        let config = ConfigLoader::load_config(Some(&path)).unwrap();

        assert_eq!(config.log_level.as_deref(), Some("warning"));
        assert_eq!(config.threshold(), Some(Severity::Warning));
    }

    #[test]
    fn unrecognized_level_disables_logging() {
        let (_dir, path) = write_config("log_level = \"loud\"\n");

        let config = ConfigLoader::load_config(Some(&path)).unwrap();

        assert_eq!(config.threshold(), None);
    }

    #[test]
    fn missing_level_disables_logging() {
        let config = ConfigLoader::load_config(None).unwrap();

        assert_eq!(config.threshold(), None);
    }
}
