//! MIME type string constants.
//!
//! Callers match on and send these exact strings; the literal values are
//! part of the public contract and must not drift.

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_JSON_CHARSET_UTF8: &str = "application/json; charset=utf-8";
pub const APPLICATION_JAVASCRIPT: &str = "application/javascript";
pub const APPLICATION_JAVASCRIPT_CHARSET_UTF8: &str = "application/javascript; charset=utf-8";
pub const APPLICATION_XML: &str = "application/xml";
pub const APPLICATION_XML_CHARSET_UTF8: &str = "application/xml; charset=utf-8";
pub const APPLICATION_FORM: &str = "application/x-www-form-urlencoded";
pub const APPLICATION_PROTOBUF: &str = "application/protobuf";
pub const APPLICATION_MSGPACK: &str = "application/msgpack";
pub const TEXT_HTML: &str = "text/html";
pub const TEXT_HTML_CHARSET_UTF8: &str = "text/html; charset=utf-8";
pub const TEXT_PLAIN: &str = "text/plain";
pub const TEXT_PLAIN_CHARSET_UTF8: &str = "text/plain; charset=utf-8";
pub const MULTIPART_FORM: &str = "multipart/form-data";
pub const OCTET_STREAM: &str = "application/octet-stream";
