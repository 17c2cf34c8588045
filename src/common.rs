// Default URLs
pub static DEFAULT_BASE_URL: &str = "https://api.getlago.com";
pub static API_PATH: &str = "/api/v1/";

// Statuses accepted as a successful response
pub static SUCCESS_STATUSES: [u16; 4] = [200, 201, 202, 204];

/// Returns `true` if `status` is one of the statuses treated as a success.
pub fn is_success(status: u16) -> bool {
    SUCCESS_STATUSES.contains(&status)
}
