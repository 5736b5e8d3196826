//! HelloWorld function
//!
//! Answers every request with a fixed greeting and logs the URL it was
//! invoked for.

use hello_function_sdk::prelude::*;

pub const NAME: &str = "HelloWorld";

const GREETING: &str = "Hello, World!";

pub async fn handle(ctx: &Context, req: Request) -> Response {
    ctx.log(format!("Http function processed request for url \"{}\"", req.url));
    Response::text(200, GREETING)
}
