/*!
# Slimmer: Response Filter.

Hooks for slimming HTML responses on their way out the door. These work with
any response type that implements [`HtmlResponse`].
*/

use crate::slim_html;



/// # Slimmable Content Type Prefix.
const CONTENT_TYPE: &str = "text/html;";



/// # HTML Response.
///
/// The bare minimum needed to inspect and replace a response body.
pub trait HtmlResponse {
	/// # Content Type.
	///
	/// The declared content type, if any.
	fn content_type(&self) -> Option<&str>;

	/// # Body.
	fn body(&self) -> &[u8];

	/// # Set Body.
	fn set_body(&mut self, body: Vec<u8>);
}



/// # Compress Response.
///
/// Slim the response body if and only if its declared content type
/// begins with `text/html;` and the body is valid UTF-8. All other responses
/// are left exactly as they were.
///
/// Returns `true` if the body was replaced.
pub fn compress_response<R: HtmlResponse>(res: &mut R) -> bool {
	if ! res.content_type().is_some_and(|t| t.starts_with(CONTENT_TYPE)) {
		return false;
	}

	let Ok(body) = std::str::from_utf8(res.body()) else { return false; };
	let new = slim_html(body);
	if new.as_bytes() == res.body() { return false; }

	res.set_body(new.into_bytes());
	true
}

/// # Compress View.
///
/// Wrap a request handler so that every response it returns is passed
/// through [`compress_response`].
pub fn compress_view<Req, R, F>(view: F) -> impl Fn(Req) -> R
where
	R: HtmlResponse,
	F: Fn(Req) -> R,
{
	move |req| {
		let mut res = view(req);
		compress_response(&mut res);
		res
	}
}
