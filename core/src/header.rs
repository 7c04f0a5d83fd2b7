//! HTTP header name string constants.
//!
//! Re-exported verbatim for caller convenience; the literal values are part
//! of the public contract. Grouped by where the header usually appears.

// Request headers (some also appear on responses).
pub const ACCEPT: &str = "Accept";
pub const ACCEPT_CHARSET: &str = "Accept-Charset";
pub const ACCEPT_ENCODING: &str = "Accept-Encoding";
pub const ACCEPT_LANGUAGE: &str = "Accept-Language";
pub const AUTHORIZATION: &str = "Authorization";
pub const CACHE_CONTROL: &str = "Cache-Control";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const IF_MATCH: &str = "If-Match";
pub const IF_MODIFIED_SINCE: &str = "If-Modified-Since";
pub const IF_NONE_MATCH: &str = "If-None-Match";
pub const IF_RANGE: &str = "If-Range";
pub const IF_UNMODIFIED_SINCE: &str = "If-Unmodified-Since";
pub const MAX_FORWARDS: &str = "Max-Forwards";
pub const PROXY_AUTHORIZATION: &str = "Proxy-Authorization";
pub const PRAGMA: &str = "Pragma";
pub const RANGE: &str = "Range";
pub const REFERER: &str = "Referer";
pub const USER_AGENT: &str = "User-Agent";
pub const TE: &str = "TE";
pub const VIA: &str = "Via";
pub const WARNING: &str = "Warning";
pub const COOKIE: &str = "Cookie";
pub const ORIGIN: &str = "Origin";
pub const ACCEPT_DATETIME: &str = "Accept-Datetime";
pub const X_REQUESTED_WITH: &str = "X-Requested-With";
pub const X_REQUEST_ID: &str = "X-Request-ID";

// Response headers.
pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
pub const ACCEPT_PATCH: &str = "Accept-Patch";
pub const ACCEPT_RANGES: &str = "Accept-Ranges";
pub const ALLOW: &str = "Allow";
pub const CONTENT_ENCODING: &str = "Content-Encoding";
pub const CONTENT_LANGUAGE: &str = "Content-Language";
pub const CONTENT_LOCATION: &str = "Content-Location";
pub const CONTENT_DISPOSITION: &str = "Content-Disposition";
pub const CONTENT_RANGE: &str = "Content-Range";
pub const ETAG: &str = "ETag";
pub const EXPIRES: &str = "Expires";
pub const LAST_MODIFIED: &str = "Last-Modified";
pub const LINK: &str = "Link";
pub const LOCATION: &str = "Location";
pub const P3P: &str = "P3P";
pub const PROXY_AUTHENTICATE: &str = "Proxy-Authenticate";
pub const REFRESH: &str = "Refresh";
pub const RETRY_AFTER: &str = "Retry-After";
pub const SERVER: &str = "Server";
pub const SET_COOKIE: &str = "Set-Cookie";
pub const STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";
pub const UPGRADE: &str = "Upgrade";
pub const VARY: &str = "Vary";
pub const WWW_AUTHENTICATE: &str = "WWW-Authenticate";
pub const PUBLIC_KEY_PINS: &str = "Public-Key-Pins";
pub const PUBLIC_KEY_PINS_REPORT_ONLY: &str = "Public-Key-Pins-Report-Only";
pub const REFERRER_POLICY: &str = "Referrer-Policy";

// Common non-standard headers.
pub const X_FRAME_OPTIONS: &str = "X-Frame-Options";
pub const X_XSS_PROTECTION: &str = "X-XSS-Protection";
pub const CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
pub const CONTENT_SECURITY_POLICY_REPORT_ONLY: &str = "Content-Security-Policy-Report-Only";
pub const X_CONTENT_SECURITY_POLICY: &str = "X-Content-Security-Policy";
pub const X_WEBKIT_CSP: &str = "X-WebKit-CSP";
pub const X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
pub const X_POWERED_BY: &str = "X-Powered-By";
pub const X_UA_COMPATIBLE: &str = "X-UA-Compatible";
pub const X_FORWARDED_PROTO: &str = "X-Forwarded-Proto";
pub const X_HTTP_METHOD_OVERRIDE: &str = "X-HTTP-Method-Override";
pub const X_FORWARDED_FOR: &str = "X-Forwarded-For";
pub const X_REAL_IP: &str = "X-Real-IP";
pub const X_CSRF_TOKEN: &str = "X-CSRF-Token";
pub const X_DNS_PREFETCH_CONTROL: &str = "X-DNS-Prefetch-Control";
pub const X_DOWNLOAD_OPTIONS: &str = "X-Download-Options";
