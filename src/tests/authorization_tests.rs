use serde_json::json;

use crate::dto::{
    ApiResponse, AuthorizationAction, AuthorizationFailAction, AuthorizationFailReason,
    AuthorizationFailRequest, AuthorizationFailResponse, AuthorizationIssueAction,
    AuthorizationIssueRequest, AuthorizationIssueResponse, AuthorizationRequest,
    AuthorizationResponse, ClientType, Display, Prompt, Property,
};

use super::helpers::{assert_round_trip, assert_serde_json};

#[test]
fn authorization_request_omits_absent_context() {
    let request = AuthorizationRequest::new("response_type=code&client_id=5899463614448063");

    assert_serde_json(
        &request,
        json!({"parameters": "response_type=code&client_id=5899463614448063"}),
    );
}

#[test]
fn authorization_request_keeps_context() {
    let request = AuthorizationRequest {
        context: Some("session-1".to_string()),
        ..AuthorizationRequest::new("response_type=code")
    };

    assert_serde_json(
        &request,
        json!({"parameters": "response_type=code", "context": "session-1"}),
    );
}

#[test]
fn reads_an_interaction_response() {
    let response: AuthorizationResponse = serde_json::from_value(json!({
        "resultCode": "A004001",
        "resultMessage": "[A004001] Authlete has successfully issued a ticket to the service.",
        "action": "INTERACTION",
        "client": {
            "clientId": 5899463614448063i64,
            "clientIdAlias": "my-client",
            "clientIdAliasEnabled": true,
            "clientName": "My Client",
            "clientType": "CONFIDENTIAL",
            "number": 1140,
            "extension": {"requestableScopesEnabled": false}
        },
        "display": "PAGE",
        "maxAge": 3600,
        "scopes": [
            {"name": "openid", "defaultEntry": false, "description": "OpenID Connect"},
            {"name": "profile", "defaultEntry": false}
        ],
        "claims": ["name", "email"],
        "acrEssential": true,
        "prompts": ["LOGIN", "CONSENT"],
        "lowestPrompt": "LOGIN",
        "ticket": "bi2Kxe2WW5mK_GZ_fDFOpK1bi0Vd8rVjkPrQYlsXwOQ",
        "requestedVerifiedClaimsForTx": [["nationalities"], []]
    }))
    .unwrap();

    assert_eq!(AuthorizationAction::Interaction, response.action);
    assert_eq!(Some("A004001"), response.result_code());
    assert_eq!(Some(Display::Page), response.display);
    assert_eq!(3600, response.max_age);
    assert!(response.acr_essential);
    assert_eq!(
        Some(vec![Prompt::Login, Prompt::Consent]),
        response.prompts
    );
    assert_eq!(Some(Prompt::Login), response.lowest_prompt);
    assert_eq!(
        Some("bi2Kxe2WW5mK_GZ_fDFOpK1bi0Vd8rVjkPrQYlsXwOQ"),
        response.ticket.as_deref()
    );
    assert_eq!(
        Some(vec![vec!["nationalities".to_string()], vec![]]),
        response.requested_verified_claims_for_tx
    );

    let scopes = response.scopes.unwrap();
    assert_eq!(2, scopes.len());
    assert_eq!(Some("openid"), scopes[0].name.as_deref());
    assert_eq!(None, scopes[1].description);

    let client = response.client.unwrap();
    assert_eq!(5899463614448063, client.client_id);
    assert_eq!(Some("my-client"), client.client_id_alias.as_deref());
    assert!(client.client_id_alias_enabled);
    assert_eq!(Some(ClientType::Confidential), client.client_type);
    assert_eq!(1140, client.number);
    assert_eq!(
        Some(&json!({"requestableScopesEnabled": false})),
        client.get_key("extension")
    );
}

#[test]
fn client_keeps_unknown_members_on_the_way_back_out() {
    let client_json = json!({
        "number": 0,
        "serviceNumber": 0,
        "clientId": 42,
        "clientIdAliasEnabled": false,
        "tlsClientCertificateBoundAccessTokens": false,
        "dynamicallyRegistered": false,
        "createdAt": 0,
        "modifiedAt": 0,
        "bcUserCodeRequired": true
    });

    let response: AuthorizationResponse =
        serde_json::from_value(json!({"action": "FORM", "client": client_json.clone()})).unwrap();

    assert_eq!(
        client_json,
        serde_json::to_value(response.client.unwrap()).unwrap()
    );
}

#[test]
fn missing_members_fall_back_to_defaults() {
    let response: AuthorizationResponse = serde_json::from_value(json!({
        "resultMessage": null,
        "subject": null
    }))
    .unwrap();

    assert_eq!(AuthorizationAction::InternalServerError, response.action);
    assert_eq!(0, response.max_age);
    assert!(!response.client_id_alias_used);
    assert_eq!(None, response.result_message());
    assert_eq!(None, response.subject);
    assert_eq!(None, response.client);
}

#[test]
fn issue_request_writes_primitives_and_skips_absent_members() {
    let request = AuthorizationIssueRequest::new("ticket-1", "john")
        .set_auth_time(1700000000)
        .set_acr("urn:mace:incommon:iap:silver")
        .set_claims(&json!({"name": "John Doe"}))
        .add_property(Property::hidden("internal", "x"));

    assert_serde_json(
        &request,
        json!({
            "ticket": "ticket-1",
            "subject": "john",
            "authTime": 1700000000,
            "acr": "urn:mace:incommon:iap:silver",
            "claims": "{\"name\":\"John Doe\"}",
            "properties": [{"key": "internal", "value": "x", "hidden": true}],
            "accessTokenDuration": 0
        }),
    );
}

#[test]
fn issue_response_with_location() {
    let response: AuthorizationIssueResponse = serde_json::from_value(json!({
        "action": "LOCATION",
        "responseContent": "https://client.example.org/cb?code=abc&state=xyz",
        "authorizationCode": "abc",
        "accessTokenExpiresAt": 0
    }))
    .unwrap();

    assert_eq!(AuthorizationIssueAction::Location, response.action);
    assert_eq!(Some("abc"), response.authorization_code.as_deref());
    assert_eq!(None, response.access_token);
}

#[test]
fn fail_request_carries_reason_token() {
    let request = AuthorizationFailRequest::new("ticket-1", AuthorizationFailReason::NotLoggedIn);

    assert_serde_json(
        &request,
        json!({"ticket": "ticket-1", "reason": "NOT_LOGGED_IN"}),
    );

    let request = request.set_description("Login required");

    assert_serde_json(
        &request,
        json!({"ticket": "ticket-1", "reason": "NOT_LOGGED_IN", "description": "Login required"}),
    );
}

#[test]
fn fail_response_round_trip() {
    let response = AuthorizationFailResponse {
        result_code: Some("A004201".to_string()),
        result_message: Some("[A004201] The authorization request failed.".to_string()),
        action: AuthorizationFailAction::Location,
        response_content: Some("https://client.example.org/cb?error=login_required".to_string()),
    };

    assert_serde_json(
        &response,
        json!({
            "resultCode": "A004201",
            "resultMessage": "[A004201] The authorization request failed.",
            "action": "LOCATION",
            "responseContent": "https://client.example.org/cb?error=login_required"
        }),
    );
}

#[test]
fn authorization_request_round_trips_every_member() {
    assert_round_trip::<AuthorizationRequest>(
        r#"{
            "parameters": "response_type=code&client_id=5899463614448063&scope=openid",
            "context": "session-1"
        }"#,
    );
}

#[test]
fn authorization_response_round_trips_every_member() {
    assert_round_trip::<AuthorizationResponse>(
        r#"{
            "resultCode": "A004001",
            "resultMessage": "[A004001] Succeeded.",
            "action": "BAD_REQUEST",
            "client": {
                "number": 1140,
                "serviceNumber": 1001,
                "clientId": 5899463614448063,
                "clientIdAlias": "my-client",
                "clientIdAliasEnabled": true,
                "clientSecret": "secret",
                "clientType": "PUBLIC",
                "developer": "authlete_1001",
                "clientName": "My Client",
                "clientNames": [{"tag": "ja", "value": "クライアント"}],
                "description": "OpenID Connect",
                "descriptions": [{"tag": "ja", "value": "クライアント"}],
                "applicationType": "WEB",
                "logoUri": "https://client.example.org/logo.png",
                "clientUri": "https://client.example.org",
                "policyUri": "https://client.example.org/policy",
                "tosUri": "https://client.example.org/tos",
                "contacts": ["admin@client.example.org"],
                "redirectUris": ["https://client.example.org/cb"],
                "grantTypes": ["AUTHORIZATION_CODE", "IMPLICIT"],
                "responseTypes": ["code"],
                "jwksUri": "https://client.example.org/jwks",
                "subjectType": "PUBLIC",
                "tokenAuthMethod": "NONE",
                "tlsClientCertificateBoundAccessTokens": true,
                "dynamicallyRegistered": true,
                "attributes": [{"key": "region", "value": "eu-west"}],
                "entityId": "https://client.example.org",
                "createdAt": 1700000000000,
                "modifiedAt": 1700000100000,
                "bcUserCodeRequired": true
            },
            "display": "PAGE",
            "maxAge": 3600,
            "scopes": [
                {
                    "name": "openid",
                    "defaultEntry": true,
                    "description": "OpenID Connect",
                    "descriptions": [{"tag": "ja", "value": "クライアント"}],
                    "attributes": [{"key": "region", "value": "eu-west"}]
                }
            ],
            "dynamicScopes": [{"name": "transaction", "value": "transaction:123"}],
            "uiLocales": ["ja", "en"],
            "claimsLocales": ["ja"],
            "claims": ["given_name", "email"],
            "claimsAtUserInfo": ["email"],
            "acrEssential": true,
            "clientIdAliasUsed": true,
            "clientEntityIdUsed": true,
            "acrs": ["urn:mace:incommon:iap:silver"],
            "subject": "john",
            "loginHint": "john@example.com",
            "prompts": ["NONE", "LOGIN"],
            "lowestPrompt": "NONE",
            "requestObjectPayload": "{\"iss\":\"5899463614448063\"}",
            "idTokenClaims": "{\"nonce\":\"n-0S6_WzA2Mj\"}",
            "userInfoClaims": "{\"email\":null}",
            "resources": ["https://rs.example.com"],
            "authorizationDetails": {
                "elements": [
                    {
                        "type": "payment_initiation",
                        "locations": ["https://rs.example.com/payments"],
                        "actions": ["initiate"],
                        "dataTypes": ["accounts"],
                        "identifier": "account-123",
                        "privileges": ["admin"],
                        "otherFields": "{\"instructedAmount\":{\"currency\":\"EUR\"}}"
                    }
                ]
            },
            "purpose": "Account opening",
            "responseContent": "{\"error\":\"invalid_request\"}",
            "ticket": "bi2Kxe2WW5mK_GZ_fDFOpK1bi0Vd8rVjkPrQYlsXwOQ",
            "gmAction": "REVOKE",
            "grantId": "ed5e5d2f-64c4-4de2-9f23-4a63c1a4e6c5",
            "grant": {
                "scopes": [
                    {
                        "scope": "openid profile",
                        "resource": ["https://rs.example.com"]
                    }
                ],
                "claims": ["given_name", "email"],
                "authorizationDetails": {
                    "elements": [
                        {
                            "type": "payment_initiation",
                            "locations": ["https://rs.example.com/payments"],
                            "actions": ["initiate"],
                            "dataTypes": ["accounts"],
                            "identifier": "account-123",
                            "privileges": ["admin"],
                            "otherFields": "{\"instructedAmount\":{\"currency\":\"EUR\"}}"
                        }
                    ]
                }
            },
            "grantSubject": "john",
            "requestedClaimsForTx": ["nationalities"],
            "requestedVerifiedClaimsForTx": [["nationalities"], ["birthdate"]],
            "transformedClaims": "{\"::22nd_birthday\":{\"type\":\"2\"}}"
        }"#,
    );
}

#[test]
fn authorization_issue_request_round_trips_every_member() {
    assert_round_trip::<AuthorizationIssueRequest>(
        r#"{
            "ticket": "bi2Kxe2WW5mK_GZ_fDFOpK1bi0Vd8rVjkPrQYlsXwOQ",
            "subject": "john",
            "sub": "john",
            "authTime": 1700000000,
            "acr": "urn:mace:incommon:iap:silver",
            "claims": "{\"given_name\":\"John\"}",
            "properties": [{"key": "tenant", "value": "t1", "hidden": true}],
            "scopes": ["openid", "profile"],
            "idtHeaderParams": "{\"kid\":\"k1\"}",
            "consentedClaims": ["given_name"],
            "claimsForTx": "{\"verified_claims\":{}}",
            "verifiedClaimsForTx": ["{\"birthdate\":\"1970-01-01\"}"],
            "jwtAtClaims": "{\"tenant\":\"t1\"}",
            "accessToken": "Z5a40U6dWvw2gMoCOAFbZcM85q4HC0Z--0YKD9-Nf6Q",
            "idTokenAudType": "array",
            "accessTokenDuration": 3600,
            "authorizationDetails": {
                "elements": [
                    {
                        "type": "payment_initiation",
                        "locations": ["https://rs.example.com/payments"],
                        "actions": ["initiate"],
                        "dataTypes": ["accounts"],
                        "identifier": "account-123",
                        "privileges": ["admin"],
                        "otherFields": "{\"instructedAmount\":{\"currency\":\"EUR\"}}"
                    }
                ]
            }
        }"#,
    );
}

#[test]
fn authorization_issue_response_round_trips_every_member() {
    assert_round_trip::<AuthorizationIssueResponse>(
        r#"{
            "resultCode": "A004001",
            "resultMessage": "[A004001] Succeeded.",
            "action": "BAD_REQUEST",
            "responseContent": "{\"error\":\"invalid_request\"}",
            "accessToken": "Z5a40U6dWvw2gMoCOAFbZcM85q4HC0Z--0YKD9-Nf6Q",
            "accessTokenExpiresAt": 1700003600000,
            "accessTokenDuration": 3600,
            "idToken": "eyJhbGciOiJSUzI1NiJ9.e30.sig",
            "authorizationCode": "Xv_su944auuBgc5mfUnxXayiiQU9Z4-T_Yae_UfExmo",
            "jwtAccessToken": "eyJhbGciOiJFUzI1NiJ9.e30.sig"
        }"#,
    );
}

#[test]
fn authorization_fail_request_round_trips_every_member() {
    assert_round_trip::<AuthorizationFailRequest>(
        r#"{
            "ticket": "bi2Kxe2WW5mK_GZ_fDFOpK1bi0Vd8rVjkPrQYlsXwOQ",
            "reason": "NOT_LOGGED_IN",
            "description": "OpenID Connect"
        }"#,
    );
}
