mod helpers;
mod test_http_client;

mod api_tests;
mod authorization_tests;
