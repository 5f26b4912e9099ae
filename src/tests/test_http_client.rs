use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use serde_json::Value;
use url::Url;

use crate::types::{AuthleteHttpClient, HttpMethod, HttpRequest, HttpResponse};

pub struct TestHttpReqRes {
    pub url: Url,
    pub method: HttpMethod,
    pub headers: HashMap<String, Vec<String>>,
    pub body: Option<String>,

    pub response_body: Option<String>,
    pub response_status_code: u16,
    pub transport_error: Option<String>,
}

impl TestHttpReqRes {
    pub fn new(url: impl Into<String>) -> Self {
        TestHttpReqRes {
            url: Url::parse(&url.into()).unwrap(),
            method: HttpMethod::GET,
            headers: HashMap::new(),
            body: None,
            response_body: None,
            response_status_code: 200,
            transport_error: None,
        }
    }

    pub fn assert_request_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn assert_request_header(mut self, key: impl Into<String>, value: Vec<String>) -> Self {
        self.headers.insert(key.into(), value);
        self
    }

    pub fn assert_request_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn set_response_body(mut self, response_body: impl Into<String>) -> Self {
        self.response_body = Some(response_body.into());
        self
    }

    pub fn set_response_status_code(mut self, response_status_code: u16) -> Self {
        self.response_status_code = response_status_code;
        self
    }

    pub fn set_transport_error(mut self, error: impl Into<String>) -> Self {
        self.transport_error = Some(error.into());
        self
    }

    pub fn build(self) -> TestHttpClient {
        TestHttpClient::new().add(self)
    }
}

pub struct TestHttpClient {
    req_res: Mutex<VecDeque<TestHttpReqRes>>,
}

impl TestHttpClient {
    pub fn new() -> Self {
        Self {
            req_res: Mutex::new(VecDeque::with_capacity(5)),
        }
    }

    pub fn add(self, req_res: TestHttpReqRes) -> Self {
        self.req_res.lock().unwrap().push_back(req_res);
        self
    }

    pub fn assert(&self) {
        assert!(
            self.req_res.lock().unwrap().is_empty(),
            "All requests not fullfilled"
        );
    }
}

impl AuthleteHttpClient for TestHttpClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, String> {
        let req_res = self
            .req_res
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected request");

        assert_eq!(req.url, req_res.url);
        assert_eq!(req.method, req_res.method);
        assert_eq!(req.headers, req_res.headers);

        if req_res
            .headers
            .get("content-type")
            .is_some_and(|ct| ct.contains(&"application/json".to_string()))
        {
            assert_eq!(
                req.body.map(|b| serde_json::from_str::<Value>(&b).unwrap()),
                req_res
                    .body
                    .map(|b| serde_json::from_str::<Value>(&b).unwrap()),
            )
        } else {
            assert_eq!(req.body, req_res.body);
        }

        if let Some(error) = req_res.transport_error {
            return Err(error);
        }

        Ok(HttpResponse {
            status_code: req_res.response_status_code,
            content_type: Some("application/json".to_string()),
            body: req_res.response_body,
        })
    }
}
