use byok_async::config::{BYOK_DEFAULT_BASE, ENV_API_KEY, ENV_BASE_URL, ENV_USER_ID};
use byok_async::test_support::EnvGuard;
use byok_async::{ByokConfig, Client};
use serial_test::serial;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[serial(env)]
async fn client_new_reads_environment() {
    let server = MockServer::start().await;
    let _clean = EnvGuard::isolate_byok();
    let _key = EnvGuard::set(ENV_API_KEY, "  byok_sk_from_env  ");
    let _base = EnvGuard::set(ENV_BASE_URL, &server.uri());
    let _user = EnvGuard::set(ENV_USER_ID, "player-env");

    Mock::given(method("GET"))
        .and(path("/api/v1/wallet"))
        .and(header("authorization", "Bearer byok_sk_from_env"))
        .and(header("x-byok-user", "player-env"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "w"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new();
    assert_eq!(client.wallet().get(None).await.unwrap().id, "w");
}

#[test]
#[serial(env)]
fn blank_env_values_are_ignored() {
    let _clean = EnvGuard::isolate_byok();
    let _base = EnvGuard::set(ENV_BASE_URL, "   ");
    let _user = EnvGuard::set(ENV_USER_ID, "");

    let cfg = ByokConfig::new();
    assert_eq!(cfg.api_base(), BYOK_DEFAULT_BASE);
    assert_eq!(
        byok_async::config::Config::default_user_id(&cfg),
        None
    );
}

#[test]
#[serial(env)]
fn debug_never_prints_env_key() {
    let _clean = EnvGuard::isolate_byok();
    let _key = EnvGuard::set(ENV_API_KEY, "byok_sk_secret_value");

    let client = Client::new();
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("byok_sk_secret_value"));
}
