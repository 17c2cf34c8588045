use lago_rust::LagoClient;

pub struct TestContext {
    pub client: LagoClient,
    pub plan_code: String,
    base_url: String,
}

impl TestContext {
    pub async fn start() -> Self {
        // Take the required configuration from the env
        let api_key = std::env::var("ACCEPTANCE_TESTS_LAGO_API_KEY").unwrap();
        let base_url = std::env::var("ACCEPTANCE_TESTS_LAGO_API_URL")
            .unwrap_or_else(|_| "https://api.getlago.com".to_string());
        let plan_code = std::env::var("ACCEPTANCE_TESTS_LAGO_PLAN_CODE").unwrap();

        // Configure a new LagoClient to point to the test organization
        let client = LagoClient::builder()
            .with_base_url(base_url.as_str())
            .with_api_key(api_key)
            .build();

        Self {
            client,
            plan_code,
            base_url,
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }
}
