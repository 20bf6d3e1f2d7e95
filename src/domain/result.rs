//! Result type alias for Textscrub

use super::errors::ScrubError;

/// Result type alias for Textscrub operations
///
/// # Examples
///
/// ```
/// use textscrub::domain::result::Result;
/// use textscrub::domain::errors::ScrubError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ScrubError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ScrubError>;
