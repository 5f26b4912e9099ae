//! Default Http Client

use std::time::Duration;

use reqwest::{
    header::{CONTENT_TYPE, USER_AGENT},
    ClientBuilder, Method, Response,
};

use crate::types::{AuthleteHttpClient, HttpMethod, HttpRequest, HttpResponse};

const AUTHLETE_USER_AGENT: &str = concat!("authlete-rust/", env!("CARGO_PKG_VERSION"));

/// The default HttpClient, backed by reqwest
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHttpClient;

impl DefaultHttpClient {
    async fn to_response(response: Response) -> Result<HttpResponse, String> {
        let status_code = response.status().as_u16();

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(|ct| ct.to_string());

        let body = response
            .text()
            .await
            .map_err(|e| format!("failed to read the response body: {e}"))?;

        Ok(HttpResponse {
            status_code,
            content_type,
            body: Some(body).filter(|b| !b.is_empty()),
        })
    }
}

impl AuthleteHttpClient for DefaultHttpClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, String> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| format!("{e}"))?;

        let method = match req.method {
            HttpMethod::GET => Method::GET,
            HttpMethod::POST => Method::POST,
        };

        let mut req_builder = client.request(method, req.url);

        if let Some(body) = req.body {
            req_builder = req_builder.body(body);
        }

        for (name, values) in req.headers {
            for value in values {
                req_builder = req_builder.header(name.clone(), value);
            }
        }

        req_builder = req_builder.header(USER_AGENT, AUTHLETE_USER_AGENT);

        match req_builder.send().await {
            Ok(res) => Self::to_response(res).await,
            Err(e) => Err(format!("{e}")),
        }
    }
}
