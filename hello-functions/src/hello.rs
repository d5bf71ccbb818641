use hello_functions_host::encoding::{Extract, Json};
use hello_functions_host::logging::Logger;
use hello_functions_host::{IntoWebResponse, WebRequest, WebResponse};

#[derive(serde::Deserialize)]
struct GreetBody {
    name: Option<String>,
}

/// Greets the caller by name.
///
/// The name is taken from the `name` query parameter when present and
/// non-empty; the query wins over the body even when both disagree.
/// Otherwise the request body is read as a JSON object with an optional
/// string `name` field. A name that cannot be resolved by either path is
/// not an error: the response asks the caller to supply one instead. The
/// response status is 200 in every case.
pub fn hello(request: WebRequest, logger: &dyn Logger) -> WebResponse {
    logger.log(
        log::Level::Info,
        "HTTP trigger function processed a request.",
    );

    let name = query_name(&request).or_else(|| body_name(&request));

    let message = match name {
        Some(name) => {
            format!("Hello, {name}. This HTTP triggered function executed successfully.")
        }
        None => "This HTTP triggered function executed successfully. \
                 Pass a name in the query string or in the request body for a personalized response."
            .to_string(),
    };
    message.response()
}

fn query_name(request: &WebRequest) -> Option<String> {
    request
        .query_parameter("name")
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

// A body that is absent, empty, malformed, or missing the field resolves to
// no name rather than an error.
fn body_name(request: &WebRequest) -> Option<String> {
    let body = request.body()?;
    let Json(GreetBody { name }) = Json::extract(body).ok()?;
    name.filter(|name| !name.is_empty())
}
