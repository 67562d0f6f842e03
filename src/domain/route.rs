// Where the route label goes in an error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorLayout {
    // `{ errors: [{ route, msg, error }] }`
    Nested,
    // `{ route, errors: [{ msg, error }] }`
    TopLevel,
}

// Static identity of one echo endpoint, fixed at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoRoute {
    pub path: &'static str,
    pub label: &'static str,
    pub error_layout: ErrorLayout,
}

impl EchoRoute {
    pub const fn decision() -> Self {
        Self {
            path: "/decision",
            label: "decision",
            error_layout: ErrorLayout::Nested,
        }
    }

    pub const fn export() -> Self {
        Self {
            path: "/export",
            label: "GET /export",
            error_layout: ErrorLayout::TopLevel,
        }
    }

    pub const fn stats() -> Self {
        Self {
            path: "/stats",
            label: "GET /stats",
            error_layout: ErrorLayout::TopLevel,
        }
    }

    // Every echo endpoint the service registers.
    pub const fn all() -> [Self; 3] {
        [Self::decision(), Self::export(), Self::stats()]
    }
}
