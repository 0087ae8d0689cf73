use serde::Deserialize;

/// Query parameters of a resolution request.
#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    pub password: Option<String>,
}
