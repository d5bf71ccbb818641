use crate::WebResponse;
use crate::encoding::{Encode, Json};
use serde::Serialize;

macro_rules! content_type {
    ($content_type:expr) => {
        vec![("content-type".to_string(), $content_type.to_string())]
    };
}

/// Values returned by a function handler must implement this trait.
pub trait IntoWebResponse {
    /// Convert the value into the response the host sends back to the caller.
    fn response(self) -> WebResponse;
}

impl IntoWebResponse for Vec<u8> {
    fn response(self) -> WebResponse {
        WebResponse::from_parts(200, content_type!("application/octet-stream"), self)
    }
}

impl IntoWebResponse for String {
    fn response(self) -> WebResponse {
        WebResponse::from_parts(
            200,
            content_type!("text/plain; charset=utf-8"),
            self.into_bytes(),
        )
    }
}

impl IntoWebResponse for &str {
    fn response(self) -> WebResponse {
        self.to_string().response()
    }
}

impl IntoWebResponse for () {
    fn response(self) -> WebResponse {
        WebResponse::from_parts(204, vec![], vec![])
    }
}

impl<T: Serialize> IntoWebResponse for Json<T> {
    fn response(self) -> WebResponse {
        match self.try_serialize() {
            Ok(body) => {
                WebResponse::from_parts(200, content_type!("application/json; charset=utf-8"), body)
            }
            Err(e) => WebResponse::from_parts(
                500,
                content_type!("text/plain; charset=utf-8"),
                format!("Failed to encode response: {e}").into_bytes(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_become_plain_text_200s() {
        let response = "pong".response();
        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), b"pong");
        assert_eq!(
            response.headers(),
            &[(
                "content-type".to_string(),
                "text/plain; charset=utf-8".to_string()
            )]
        );
    }

    #[test]
    fn unit_becomes_an_empty_204() {
        let response = ().response();
        assert_eq!(response.status(), 204);
        assert!(response.body().is_empty());
    }

    #[test]
    fn json_becomes_an_application_json_200() {
        #[derive(Serialize)]
        struct Message {
            message: &'static str,
        }

        let response = Json(Message { message: "pong" }).response();
        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), br#"{"message":"pong"}"#);
        assert_eq!(
            response.headers(),
            &[(
                "content-type".to_string(),
                "application/json; charset=utf-8".to_string()
            )]
        );
    }
}
