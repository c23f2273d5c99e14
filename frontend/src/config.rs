
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://127.0.0.1:5000"  // Planner service when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

pub fn generate_endpoint() -> String {
    format!("{}/api/generate", get_backend_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_endpoint_targets_api_generate() {
        let endpoint = generate_endpoint();
        assert!(endpoint.starts_with(get_backend_url()));
        assert!(endpoint.ends_with("/api/generate"));
    }
}
