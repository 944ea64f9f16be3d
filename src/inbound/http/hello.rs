//! Connectivity check endpoint.

use actix_web::{HttpResponse, get};

use super::envelope;

/// Answer a fixed greeting so deployments can be smoke-tested.
#[get("/hello")]
pub async fn hello() -> HttpResponse {
    envelope::message("Hello, World!")
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};

    use super::*;
    use crate::inbound::http::envelope::MessageBody;

    #[actix_web::test]
    async fn hello_answers_the_fixed_greeting() {
        let app = test::init_service(App::new().service(hello)).await;
        let req = test::TestRequest::get().uri("/hello").to_request();
        let body: MessageBody = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.message, "Hello, World!");
    }
}
