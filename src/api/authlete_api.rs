use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::AuthleteConfiguration,
    types::{AuthleteError, AuthleteHttpClient, HttpMethod, HttpRequest, HttpResponse},
};

/// # AuthleteApi
/// Entry point for calling the Authlete API.
///
/// Holds the [AuthleteConfiguration]; every call takes the [AuthleteHttpClient]
/// to send the request with.
#[derive(Debug, Clone)]
pub struct AuthleteApi {
    pub(crate) config: AuthleteConfiguration,
}

impl AuthleteApi {
    /// Creates a new instance from the configuration
    pub fn new(config: AuthleteConfiguration) -> Self {
        Self { config }
    }

    /// Creates a new instance configured from the environment.
    /// See [AuthleteConfiguration::from_env].
    pub fn from_env() -> Result<Self, AuthleteError> {
        Ok(Self::new(AuthleteConfiguration::from_env()?))
    }

    /// The configuration in use
    pub fn get_configuration(&self) -> &AuthleteConfiguration {
        &self.config
    }

    pub(crate) async fn call_post_api<Req, Res, T>(
        &self,
        path: &str,
        request: &Req,
        http_client: &T,
    ) -> Result<Res, AuthleteError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
        T: AuthleteHttpClient,
    {
        let url = self.config.endpoint(path)?;
        let body = serde_json::to_string(request)?;

        let req = HttpRequest::new(url).method(HttpMethod::POST).json(body);

        let res = self.send_async(req, http_client).await?;

        Ok(serde_json::from_str(Self::response_body(&res)?)?)
    }

    pub(crate) async fn call_get_api<T>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
        http_client: &T,
    ) -> Result<Value, AuthleteError>
    where
        T: AuthleteHttpClient,
    {
        let mut url = self.config.endpoint(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let res = self
            .send_async(HttpRequest::new(url).method(HttpMethod::GET), http_client)
            .await?;

        Ok(serde_json::from_str(Self::response_body(&res)?)?)
    }

    fn response_body(res: &HttpResponse) -> Result<&str, AuthleteError> {
        res.body.as_deref().ok_or_else(|| {
            AuthleteError::Http(format!("empty response body (status {})", res.status_code))
        })
    }

    async fn send_async<T>(
        &self,
        req: HttpRequest,
        http_client: &T,
    ) -> Result<HttpResponse, AuthleteError>
    where
        T: AuthleteHttpClient,
    {
        let req = req
            .header("authorization", self.config.authorization_header()?)
            .header("accept", "application/json");

        let method = req.method;
        let path = req.url.path().to_string();

        debug!(?method, %path, "calling Authlete API");

        let res = http_client
            .request(req)
            .await
            .map_err(AuthleteError::Http)?;

        debug!(?method, %path, status = res.status_code, "Authlete API replied");

        if !res.is_success() {
            let err = AuthleteError::from_response(res);
            warn!(
                ?method,
                %path,
                result_code = err.result_code().unwrap_or("-"),
                "Authlete API call failed"
            );
            return Err(err);
        }

        Ok(res)
    }
}
