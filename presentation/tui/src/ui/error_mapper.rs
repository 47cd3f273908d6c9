use business::domain::product::errors::ProductError;

/// Text shown to the user for a failed product operation.
///
/// Transport details never reach the screen; they are logged by the use case.
pub fn user_message(error: &ProductError) -> &'static str {
    match error {
        ProductError::TitleEmpty => "Title is required",
        ProductError::LoadFailed(_) => "Failed to load products.",
    }
}
