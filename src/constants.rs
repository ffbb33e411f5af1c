pub mod header {
    pub const NEXT_ACTION: &str = "next-action";
    pub const RSC_ACTION_ID: &str = "rsc-action-id";
    pub const ORIGIN: &str = "origin";
    pub const REFERER: &str = "referer";
    pub const HOST: &str = "host";
    pub const CONTENT_TYPE: &str = "content-type";
}

pub mod method {
    pub const GET: &str = "GET";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Names used in rejection evidence for values that are not a single header.
pub mod field {
    pub const ACTION_ID: &str = "action-id";
    pub const METHOD: &str = "method";
}

pub mod content_type {
    pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
    pub const TEXT_PLAIN: &str = "text/plain";
    pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
}

pub mod env {
    pub const APP_URL: &str = "NEXT_PUBLIC_APP_URL";
    pub const SITE_URL: &str = "NEXT_PUBLIC_SITE_URL";
    pub const GOOGLE_SITE_VERIFICATION: &str = "GOOGLE_SITE_VERIFICATION";
    pub const ADMIN_PASSWORD: &str = "ADMIN_PASSWORD";
}

pub mod rule {
    pub const PROVENANCE: &str = "provenance";
    pub const ACTION_ID_LENGTH: &str = "action_id_length";
    pub const ACTION_ID_CHARSET: &str = "action_id_charset";
    pub const CONTENT_TYPE: &str = "content_type";
    pub const METHOD: &str = "method";
}

pub const DEV_ORIGIN: &str = "http://localhost:3000";
pub const MIN_ACTION_ID_LENGTH: usize = 15;
pub const FORBIDDEN_ACTION_ID_PATTERN: &str = r"[$(){};`]";
