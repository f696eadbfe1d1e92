#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub content_type: &'static str,
    pub body: &'static str,
}

const INDEX: Asset = Asset {
    content_type: "text/html; charset=utf-8",
    body: include_str!("../assets/index.html"),
};

const APP_JS: Asset = Asset {
    content_type: "application/javascript; charset=utf-8",
    body: include_str!("../assets/app.js"),
};

const STYLES: Asset = Asset {
    content_type: "text/css; charset=utf-8",
    body: include_str!("../assets/styles.css"),
};

/// The client shell for a non-API path. Unknown paths get `index.html`.
pub fn resolve(path: &str) -> Asset {
    match path {
        "/app.js" => APP_JS,
        "/styles.css" => STYLES,
        _ => INDEX,
    }
}
