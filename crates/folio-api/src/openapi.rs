use utoipa::OpenApi;

use folio_types::{ContactMessage, Experience, Testimonial};

use crate::routes::{
    contact::{self, ContactResponse},
    diagnostics::{
        self, BackendState, ConnectionStatus, DatabaseState, DatabaseStatus, DiagnosticsResponse,
        SettingState,
    },
    portfolio,
    root::{self, RootResponse},
    schema,
};

/// OpenAPI documentation for the portfolio API
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        diagnostics::diagnostics,
        schema::schema,
        contact::submit_contact,
        portfolio::testimonials,
        portfolio::experience,
    ),
    components(schemas(
        ContactMessage,
        ContactResponse,
        Testimonial,
        Experience,
        RootResponse,
        DiagnosticsResponse,
        DatabaseStatus,
        DatabaseState,
        BackendState,
        SettingState,
        ConnectionStatus,
    )),
    tags(
        (name = "contact", description = "Contact form submissions"),
        (name = "portfolio", description = "Read-only portfolio content"),
        (name = "meta", description = "Liveness, diagnostics and schema")
    )
)]
pub struct ApiDoc;
