use crate::common::mock_server::LagoMockServer;
use lago_rust::LagoClient;
use openssl::rsa::Rsa;
use uuid::Uuid;

static MOCK_PLAN_CODE: &str = "premium";

pub struct TestContext {
    pub client: LagoClient,
    pub plan_code: String,
    mock_server: LagoMockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        // Generate a new random API key and webhook signing key for this specific test
        let api_key = Uuid::new_v4().to_string();
        let signing_key = Rsa::generate(2048).unwrap();

        // Setup a new mock server
        let mock_server = LagoMockServer::start(
            &api_key,
            MOCK_PLAN_CODE,
            signing_key.private_key_to_pem().unwrap(),
            signing_key.public_key_to_pem().unwrap(),
        )
        .await;

        // Configure a new LagoClient to point to the mock server
        let client = LagoClient::builder()
            .with_base_url(mock_server.url().as_str())
            .with_api_key(api_key)
            .with_debug(true)
            .build();

        Self {
            client,
            plan_code: MOCK_PLAN_CODE.to_string(),
            mock_server,
        }
    }

    pub fn base_url(&self) -> String {
        self.mock_server.url().to_string()
    }

    /// Signs a webhook body with the organization's key.
    pub fn sign_webhook(&self, body: &str) -> String {
        self.mock_server.sign_webhook(body)
    }
}
