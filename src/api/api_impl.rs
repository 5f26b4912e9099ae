//! # Endpoint methods of [AuthleteApi]
//!
//! One method per Authlete API endpoint. Each takes the request type of the
//! endpoint and the [AuthleteHttpClient] to send it with.

use serde_json::Value;

use crate::{
    dto::{
        AuthorizationFailRequest, AuthorizationFailResponse, AuthorizationIssueRequest,
        AuthorizationIssueResponse, AuthorizationRequest, AuthorizationResponse,
        BackchannelAuthenticationCompleteRequest, BackchannelAuthenticationCompleteResponse,
        BackchannelAuthenticationFailRequest, BackchannelAuthenticationFailResponse,
        BackchannelAuthenticationIssueRequest, BackchannelAuthenticationIssueResponse,
        BackchannelAuthenticationRequest, BackchannelAuthenticationResponse,
        DeviceAuthorizationRequest, DeviceAuthorizationResponse, DeviceCompleteRequest,
        DeviceCompleteResponse, DeviceVerificationRequest, DeviceVerificationResponse, GmRequest,
        GmResponse, IntrospectionRequest, IntrospectionResponse, PushedAuthReqRequest,
        PushedAuthReqResponse, RevocationRequest, RevocationResponse, ServiceConfigurationRequest,
        ServiceJwksGetRequest, StandardIntrospectionRequest, StandardIntrospectionResponse,
        TokenCreateRequest, TokenCreateResponse, TokenFailRequest, TokenFailResponse,
        TokenIssueRequest, TokenIssueResponse, TokenRequest, TokenResponse, TokenUpdateRequest,
        TokenUpdateResponse, UserInfoIssueRequest, UserInfoIssueResponse, UserInfoRequest,
        UserInfoResponse,
    },
    types::{AuthleteError, AuthleteHttpClient},
};

use super::AuthleteApi;

/// Return type of the [AuthleteApi] methods
pub type AuthleteReturnType<T> = Result<T, AuthleteError>;

impl AuthleteApi {
    /// # `POST /auth/authorization`
    /// Parses an authorization request received by the authorization endpoint.
    pub async fn authorization_async<T>(
        &self,
        request: &AuthorizationRequest,
        http_client: &T,
    ) -> AuthleteReturnType<AuthorizationResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/auth/authorization", request, http_client).await
    }

    /// # `POST /auth/authorization/issue`
    /// Issues the authorization code / tokens after the user authorized the request.
    pub async fn authorization_issue_async<T>(
        &self,
        request: &AuthorizationIssueRequest,
        http_client: &T,
    ) -> AuthleteReturnType<AuthorizationIssueResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/auth/authorization/issue", request, http_client).await
    }

    /// # `POST /auth/authorization/fail`
    /// Builds the error response of an authorization request that cannot be granted.
    pub async fn authorization_fail_async<T>(
        &self,
        request: &AuthorizationFailRequest,
        http_client: &T,
    ) -> AuthleteReturnType<AuthorizationFailResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/auth/authorization/fail", request, http_client).await
    }

    /// # `POST /auth/token`
    /// Processes a token request received by the token endpoint.
    pub async fn token_async<T>(
        &self,
        request: &TokenRequest,
        http_client: &T,
    ) -> AuthleteReturnType<TokenResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/auth/token", request, http_client).await
    }

    /// # `POST /auth/token/issue`
    /// Issues tokens for a resource owner password grant whose credentials were verified.
    pub async fn token_issue_async<T>(
        &self,
        request: &TokenIssueRequest,
        http_client: &T,
    ) -> AuthleteReturnType<TokenIssueResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/auth/token/issue", request, http_client).await
    }

    /// # `POST /auth/token/fail`
    /// Builds the error response of a resource owner password grant.
    pub async fn token_fail_async<T>(
        &self,
        request: &TokenFailRequest,
        http_client: &T,
    ) -> AuthleteReturnType<TokenFailResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/auth/token/fail", request, http_client).await
    }

    /// # `POST /auth/token/create`
    /// Creates an access token outside of any flow.
    pub async fn token_create_async<T>(
        &self,
        request: &TokenCreateRequest,
        http_client: &T,
    ) -> AuthleteReturnType<TokenCreateResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/auth/token/create", request, http_client).await
    }

    /// # `POST /auth/token/update`
    /// Updates an existing access token.
    pub async fn token_update_async<T>(
        &self,
        request: &TokenUpdateRequest,
        http_client: &T,
    ) -> AuthleteReturnType<TokenUpdateResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/auth/token/update", request, http_client).await
    }

    /// # `POST /auth/introspection`
    /// Validates an access token presented to a resource server.
    pub async fn introspection_async<T>(
        &self,
        request: &IntrospectionRequest,
        http_client: &T,
    ) -> AuthleteReturnType<IntrospectionResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/auth/introspection", request, http_client).await
    }

    /// # `POST /auth/introspection/standard`
    /// Processes a request received by an RFC 7662 introspection endpoint.
    pub async fn standard_introspection_async<T>(
        &self,
        request: &StandardIntrospectionRequest,
        http_client: &T,
    ) -> AuthleteReturnType<StandardIntrospectionResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/auth/introspection/standard", request, http_client).await
    }

    /// # `POST /auth/revocation`
    /// Processes a request received by the revocation endpoint.
    pub async fn revocation_async<T>(
        &self,
        request: &RevocationRequest,
        http_client: &T,
    ) -> AuthleteReturnType<RevocationResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/auth/revocation", request, http_client).await
    }

    /// # `POST /auth/userinfo`
    /// Validates the access token presented to the userinfo endpoint.
    pub async fn userinfo_async<T>(
        &self,
        request: &UserInfoRequest,
        http_client: &T,
    ) -> AuthleteReturnType<UserInfoResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/auth/userinfo", request, http_client).await
    }

    /// # `POST /auth/userinfo/issue`
    /// Builds the userinfo response from the user's claims.
    pub async fn userinfo_issue_async<T>(
        &self,
        request: &UserInfoIssueRequest,
        http_client: &T,
    ) -> AuthleteReturnType<UserInfoIssueResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/auth/userinfo/issue", request, http_client).await
    }

    /// # `POST /backchannel/authentication`
    /// Parses a request received by the backchannel authentication endpoint.
    pub async fn backchannel_authentication_async<T>(
        &self,
        request: &BackchannelAuthenticationRequest,
        http_client: &T,
    ) -> AuthleteReturnType<BackchannelAuthenticationResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/backchannel/authentication", request, http_client).await
    }

    /// # `POST /backchannel/authentication/issue`
    /// Issues the `auth_req_id` of a backchannel authentication request.
    pub async fn backchannel_authentication_issue_async<T>(
        &self,
        request: &BackchannelAuthenticationIssueRequest,
        http_client: &T,
    ) -> AuthleteReturnType<BackchannelAuthenticationIssueResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/backchannel/authentication/issue", request, http_client).await
    }

    /// # `POST /backchannel/authentication/fail`
    /// Builds the error response of a backchannel authentication request.
    pub async fn backchannel_authentication_fail_async<T>(
        &self,
        request: &BackchannelAuthenticationFailRequest,
        http_client: &T,
    ) -> AuthleteReturnType<BackchannelAuthenticationFailResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/backchannel/authentication/fail", request, http_client).await
    }

    /// # `POST /backchannel/authentication/complete`
    /// Reports the outcome of authenticating the user on the authentication device.
    pub async fn backchannel_authentication_complete_async<T>(
        &self,
        request: &BackchannelAuthenticationCompleteRequest,
        http_client: &T,
    ) -> AuthleteReturnType<BackchannelAuthenticationCompleteResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/backchannel/authentication/complete", request, http_client).await
    }

    /// # `POST /device/authorization`
    /// Processes a request received by the device authorization endpoint.
    pub async fn device_authorization_async<T>(
        &self,
        request: &DeviceAuthorizationRequest,
        http_client: &T,
    ) -> AuthleteReturnType<DeviceAuthorizationResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/device/authorization", request, http_client).await
    }

    /// # `POST /device/verification`
    /// Looks up the user code the user typed in on the verification page.
    pub async fn device_verification_async<T>(
        &self,
        request: &DeviceVerificationRequest,
        http_client: &T,
    ) -> AuthleteReturnType<DeviceVerificationResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/device/verification", request, http_client).await
    }

    /// # `POST /device/complete`
    /// Reports whether the user authorized the device.
    pub async fn device_complete_async<T>(
        &self,
        request: &DeviceCompleteRequest,
        http_client: &T,
    ) -> AuthleteReturnType<DeviceCompleteResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/device/complete", request, http_client).await
    }

    /// # `POST /pushed_auth_req`
    /// Processes a request received by the pushed authorization request endpoint.
    pub async fn pushed_authorization_request_async<T>(
        &self,
        request: &PushedAuthReqRequest,
        http_client: &T,
    ) -> AuthleteReturnType<PushedAuthReqResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/pushed_auth_req", request, http_client).await
    }

    /// # `POST /gm`
    /// Processes a request received by the grant management endpoint.
    pub async fn grant_management_async<T>(
        &self,
        request: &GmRequest,
        http_client: &T,
    ) -> AuthleteReturnType<GmResponse>
    where
        T: AuthleteHttpClient,
    {
        self.call_post_api("/gm", request, http_client).await
    }

    /// # `GET /service/configuration`
    /// Returns the discovery document of the service, to be served at
    /// `/.well-known/openid-configuration` as is.
    pub async fn service_configuration_async<T>(
        &self,
        request: &ServiceConfigurationRequest,
        http_client: &T,
    ) -> AuthleteReturnType<Value>
    where
        T: AuthleteHttpClient,
    {
        self.call_get_api("/service/configuration", request.query_pairs(), http_client)
            .await
    }

    /// # `GET /service/jwks/get`
    /// Returns the JWK Set of the service, to be served at the `jwks_uri`.
    pub async fn service_jwks_async<T>(
        &self,
        request: &ServiceJwksGetRequest,
        http_client: &T,
    ) -> AuthleteReturnType<Value>
    where
        T: AuthleteHttpClient,
    {
        self.call_get_api("/service/jwks/get", request.query_pairs(), http_client)
            .await
    }
}
