use leptos::Owner;

/// Runs `f` under `owner`, the owner captured when the component was built.
/// Async work can finish after the component is gone (the list was torn
/// down while a review was in flight); then this logs and returns None.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match owner {
        Some(owner) => leptos::try_with_owner(owner, f)
            .map_err(|err| {
                leptos::logging::log!("[OWNER] Owner disposed in {}: {:?}", log_context, err);
            })
            .ok(),
        None => {
            leptos::logging::log!("[OWNER] No Leptos owner in context: {}", log_context);
            None
        }
    }
}
