/// Port for reading variables of the launcher's own environment.
pub trait EnvironmentReader {
    fn var(&self, key: &str) -> Option<String>;
}
