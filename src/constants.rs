/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Domain of the v1 API
pub const DEFAULT_DOMAIN: &str = "api.voat.co";
/// Domain of the legacy API
pub const DEFAULT_LEGACY_DOMAIN: &str = "voat.co";
/// Domain of the public preview site, useful to try the v1 API
pub const PREVIEW_DOMAIN: &str = "preview-api.voat.co";
/// Scheme used to build every URL
pub const DEFAULT_SCHEME: &str = "https";
/// Path prefix of the legacy API
pub const LEGACY_API_PATH: &str = "api/";
/// Path prefix of the v1 API
pub const V1_API_PATH: &str = "api/v1/";
/// Path of the OAuth2 token endpoint, relative to the domain root
pub const OAUTH_TOKEN_PATH: &str = "oauth/token";
/// Path of the OAuth2 authorize endpoint, relative to the domain root
pub const OAUTH_AUTHORIZE_PATH: &str = "oauth/authorize";
/// User agent sent with every request
pub const USER_AGENT: &str = "Mozilla/5.0";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Fraction of the token lifetime after which the background task refreshes it
pub const DEFAULT_REFRESH_RATIO: f64 = 0.9;
/// Maximum number of records a search may request
pub const MAX_SEARCH_COUNT: u32 = 50;
/// Longest title, in characters, the service accepts
pub const MAX_TITLE_LENGTH: usize = 200;
/// Characters kept when a title is truncated
pub const TITLE_TRUNCATE_AT: usize = 194;
/// Marker appended to a truncated title
pub const TITLE_ELLIPSIS: &str = " [...]";
/// Marker the sign-in form carries in the authorization-code flow
pub const SIGN_IN_MARKER: &str = "submit.Signin";
/// Marker the grant form carries in the authorization-code flow
pub const GRANT_MARKER: &str = "submit.Grant";
/// Content type used by the form-encoded token requests
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
/// Content type used by the HTML authorization-code requests
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=UTF-8";
/// Content type used by JSON API calls
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";
