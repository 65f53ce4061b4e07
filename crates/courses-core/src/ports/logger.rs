/// Logging port used by the pipeline stages.
///
/// Only `log`, `warn` and `error` are required; the finer levels fall back
/// to the next coarser one when an implementation does not provide them.
pub trait ActionLogger: Send + Sync {
    fn log(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);

    fn debug(&self, message: &str) {
        self.log(message);
    }

    fn verbose(&self, message: &str) {
        self.debug(message);
    }
}
