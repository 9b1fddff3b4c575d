/// Logging port used by every store.
///
/// Stores receive it as `Arc<dyn Logger>` so the binary decides where the
/// messages end up and tests can silence or assert on them.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
