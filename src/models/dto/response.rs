use serde::Serialize;

/// A submitted record paired with the plain-text status the service returned.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}
