//! Bridge from async ports to blocking filesystem calls.

/// Run `work` on the blocking pool.
///
/// A panicked or cancelled task is reported through `on_join_error` so each
/// port keeps its own error type.
pub(crate) async fn run_blocking<T, E, F>(
    work: F,
    on_join_error: impl FnOnce(String) -> E,
) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(result) => result,
        Err(e) => Err(on_join_error(format!("blocking task failed: {e}"))),
    }
}
