use crate::{AuthApi, ServiceClient};

use sq_config::ServiceConfig;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = ServiceClient::new("https://abcd.supabase.co/", "anon");
    assert_eq!(client.base_url, "https://abcd.supabase.co");
}

#[test]
fn test_new_uses_default_table_and_rpc_names() {
    let client = ServiceClient::new("https://abcd.supabase.co", "anon");
    assert_eq!(client.profile_table, "user_profiles");
    assert_eq!(client.email_check_rpc, "check_email_availability");
}

#[test]
fn test_from_config_takes_names_from_config() {
    let config = ServiceConfig {
        url: String::from("https://abcd.supabase.co"),
        anon_key: String::from("anon"),
        profile_table: String::from("profiles_v2"),
        email_check_rpc: String::from("email_free"),
        oauth_provider: String::from("google"),
    };

    let client = ServiceClient::from_config(&config);

    assert_eq!(client.profile_table, "profiles_v2");
    assert_eq!(client.email_check_rpc, "email_free");
}

#[test]
fn test_oauth_authorize_url_carries_provider_return_target_and_prompt() {
    let client = ServiceClient::new("https://abcd.supabase.co", "anon");

    let url = client
        .oauth_authorize_url("google", "https://sciquest.example/index.html")
        .unwrap();

    assert!(url.starts_with("https://abcd.supabase.co/auth/v1/authorize?"));
    assert!(url.contains("provider=google"));
    assert!(url.contains("redirect_to=https%3A%2F%2Fsciquest.example%2Findex.html"));
    assert!(url.contains("prompt=select_account"));
}

#[test]
fn test_oauth_authorize_url_rejects_unparseable_base_url() {
    let client = ServiceClient::new("not a url", "anon");

    let result = client.oauth_authorize_url("google", "https://sciquest.example/index.html");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid URL"));
}

#[tokio::test]
async fn test_new_client_has_no_session() {
    let client = ServiceClient::new("https://abcd.supabase.co", "anon");
    assert!(client.session().await.is_none());
}
