use axum::Json;

use folio_types::{Experience, Testimonial};

use crate::content;

/// Testimonials shown on the portfolio
#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses(
        (status = 200, description = "Fixed list of testimonials", body = [Testimonial])
    ),
    tag = "portfolio"
)]
pub async fn testimonials() -> Json<Vec<Testimonial>> {
    Json(content::testimonials())
}

/// Work history shown on the portfolio
#[utoipa::path(
    get,
    path = "/api/experience",
    responses(
        (status = 200, description = "Fixed list of positions", body = [Experience])
    ),
    tag = "portfolio"
)]
pub async fn experience() -> Json<Vec<Experience>> {
    Json(content::experience())
}
