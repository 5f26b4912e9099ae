use serde_json::json;

use crate::{
    api::AuthleteApi,
    config::AuthleteConfiguration,
    dto::{
        ApiResponse, AuthorizationAction, AuthorizationRequest, GrantType,
        ServiceConfigurationRequest, ServiceJwksGetRequest, TokenCreateAction,
        TokenCreateRequest, TokenRequest,
    },
    types::{AuthleteError, HttpMethod},
};

use super::test_http_client::{TestHttpClient, TestHttpReqRes};

fn token_request_body() -> String {
    json!({
        "parameters": "grant_type=client_credentials",
        "accessTokenDuration": 0,
        "refreshTokenDuration": 0,
        "dpopNonceRequired": false
    })
    .to_string()
}

fn v2_api() -> AuthleteApi {
    AuthleteApi::new(AuthleteConfiguration::v2(
        "https://api.authlete.com",
        "key",
        "secret",
    ))
}

#[tokio::test]
async fn posts_the_request_and_reads_the_response() {
    let http_client = TestHttpReqRes::new("https://api.authlete.com/api/auth/authorization")
        .assert_request_method(HttpMethod::POST)
        .assert_request_header("authorization", vec!["Basic a2V5OnNlY3JldA==".to_string()])
        .assert_request_header("accept", vec!["application/json".to_string()])
        .assert_request_header("content-type", vec!["application/json".to_string()])
        .assert_request_body(r#"{"parameters":"response_type=code&client_id=57297408867"}"#)
        .set_response_body(
            json!({
                "resultCode": "A004001",
                "resultMessage": "ok",
                "action": "INTERACTION",
                "ticket": "tkt"
            })
            .to_string(),
        )
        .build();

    let response = v2_api()
        .authorization_async(
            &AuthorizationRequest::new("response_type=code&client_id=57297408867"),
            &http_client,
        )
        .await
        .unwrap();

    assert_eq!(AuthorizationAction::Interaction, response.action);
    assert_eq!(Some("tkt"), response.ticket.as_deref());
    assert_eq!(Some("A004001"), response.result_code());

    http_client.assert();
}

#[tokio::test]
async fn uses_service_id_and_bearer_token_for_v3() {
    let api = AuthleteApi::new(AuthleteConfiguration::v3(
        "https://us.authlete.com",
        "715948317",
        "tok",
    ));

    let http_client =
        TestHttpReqRes::new("https://us.authlete.com/api/715948317/auth/token/create")
            .assert_request_method(HttpMethod::POST)
            .assert_request_header("authorization", vec!["Bearer tok".to_string()])
            .assert_request_header("accept", vec!["application/json".to_string()])
            .assert_request_header("content-type", vec!["application/json".to_string()])
            .assert_request_body(
                json!({
                    "grantType": "CLIENT_CREDENTIALS",
                    "clientId": 57297408867i64,
                    "accessTokenDuration": 0,
                    "refreshTokenDuration": 0,
                    "clientIdAliasUsed": false,
                    "accessTokenPersistent": false,
                    "forExternalAttachment": false,
                    "authTime": 0
                })
                .to_string(),
            )
            .set_response_body(r#"{"action":"OK","accessToken":"at"}"#)
            .build();

    let response = api
        .token_create_async(
            &TokenCreateRequest::new(GrantType::ClientCredentials, 57297408867),
            &http_client,
        )
        .await
        .unwrap();

    assert_eq!(TokenCreateAction::Ok, response.action);
    assert_eq!(Some("at"), response.access_token.as_deref());

    http_client.assert();
}

#[tokio::test]
async fn non_2xx_replies_become_api_errors() {
    let http_client = TestHttpReqRes::new("https://api.authlete.com/api/auth/token")
        .assert_request_method(HttpMethod::POST)
        .assert_request_header("authorization", vec!["Basic a2V5OnNlY3JldA==".to_string()])
        .assert_request_header("accept", vec!["application/json".to_string()])
        .assert_request_header("content-type", vec!["application/json".to_string()])
        .assert_request_body(token_request_body())
        .set_response_status_code(401)
        .set_response_body(
            json!({
                "resultCode": "A001202",
                "resultMessage": "[A001202] /auth/token, Authorization header is missing."
            })
            .to_string(),
        )
        .build();

    let err = v2_api()
        .token_async(&TokenRequest::new("grant_type=client_credentials"), &http_client)
        .await
        .unwrap_err();

    match &err {
        AuthleteError::Api {
            status_code,
            result_code,
            result_message,
            ..
        } => {
            assert_eq!(401, *status_code);
            assert_eq!(Some("A001202"), result_code.as_deref());
            assert_eq!(
                Some("[A001202] /auth/token, Authorization header is missing."),
                result_message.as_deref()
            );
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(Some("A001202"), err.result_code());

    http_client.assert();
}

#[tokio::test]
async fn non_json_error_bodies_are_kept_raw() {
    let http_client = TestHttpReqRes::new(
        "https://api.authlete.com/api/service/jwks/get?includePrivateKeys=false&pretty=false",
    )
        .assert_request_header("authorization", vec!["Basic a2V5OnNlY3JldA==".to_string()])
        .assert_request_header("accept", vec!["application/json".to_string()])
        .set_response_status_code(502)
        .set_response_body("Bad Gateway")
        .build();

    let err = v2_api()
        .service_jwks_async(&ServiceJwksGetRequest::default(), &http_client)
        .await
        .unwrap_err();

    match err {
        AuthleteError::Api {
            status_code,
            result_code,
            response,
            ..
        } => {
            assert_eq!(502, status_code);
            assert_eq!(None, result_code);
            assert_eq!(Some("Bad Gateway"), response.body.as_deref());
        }
        other => panic!("unexpected error {other:?}"),
    }

    http_client.assert();
}

#[tokio::test]
async fn transport_failures_become_http_errors() {
    let http_client = TestHttpReqRes::new("https://api.authlete.com/api/auth/authorization")
        .assert_request_method(HttpMethod::POST)
        .assert_request_header("authorization", vec!["Basic a2V5OnNlY3JldA==".to_string()])
        .assert_request_header("accept", vec!["application/json".to_string()])
        .assert_request_header("content-type", vec!["application/json".to_string()])
        .assert_request_body(r#"{"parameters":""}"#)
        .set_transport_error("connection refused")
        .build();

    let err = v2_api()
        .authorization_async(&AuthorizationRequest::new(""), &http_client)
        .await
        .unwrap_err();

    assert!(matches!(err, AuthleteError::Http(ref m) if m == "connection refused"));

    http_client.assert();
}

#[tokio::test]
async fn missing_credentials_fail_before_sending() {
    let api = AuthleteApi::new(AuthleteConfiguration::default());
    let http_client = TestHttpClient::new();

    let err = api
        .authorization_async(&AuthorizationRequest::new("response_type=code"), &http_client)
        .await
        .unwrap_err();

    assert!(matches!(err, AuthleteError::Configuration(_)));

    http_client.assert();
}

#[tokio::test]
async fn service_configuration_passes_query_and_returns_the_document() {
    let http_client = TestHttpReqRes::new(
        "https://api.authlete.com/api/service/configuration?pretty=true",
    )
    .assert_request_method(HttpMethod::GET)
    .assert_request_header("authorization", vec!["Basic a2V5OnNlY3JldA==".to_string()])
    .assert_request_header("accept", vec!["application/json".to_string()])
    .set_response_body(
        json!({
            "issuer": "https://as.example.com",
            "grant_types_supported": ["authorization_code"]
        })
        .to_string(),
    )
    .build();

    let document = v2_api()
        .service_configuration_async(
            &ServiceConfigurationRequest {
                pretty: true,
                patch: None,
            },
            &http_client,
        )
        .await
        .unwrap();

    assert_eq!(
        json!({
            "issuer": "https://as.example.com",
            "grant_types_supported": ["authorization_code"]
        }),
        document
    );

    http_client.assert();
}

#[tokio::test]
async fn empty_success_bodies_are_http_errors() {
    let http_client = TestHttpReqRes::new("https://api.authlete.com/api/auth/token")
        .assert_request_method(HttpMethod::POST)
        .assert_request_header("authorization", vec!["Basic a2V5OnNlY3JldA==".to_string()])
        .assert_request_header("accept", vec!["application/json".to_string()])
        .assert_request_header("content-type", vec!["application/json".to_string()])
        .assert_request_body(token_request_body())
        .build()
        .add(
            TestHttpReqRes::new("https://api.authlete.com/api/service/configuration?pretty=false")
                .assert_request_header("authorization", vec!["Basic a2V5OnNlY3JldA==".to_string()])
                .assert_request_header("accept", vec!["application/json".to_string()]),
        );

    let api = v2_api();

    let err = api
        .token_async(&TokenRequest::new("grant_type=client_credentials"), &http_client)
        .await
        .unwrap_err();

    assert!(matches!(err, AuthleteError::Http(ref m) if m == "empty response body (status 200)"));

    let err = api
        .service_configuration_async(&ServiceConfigurationRequest::default(), &http_client)
        .await
        .unwrap_err();

    assert!(matches!(err, AuthleteError::Http(_)));

    http_client.assert();
}
