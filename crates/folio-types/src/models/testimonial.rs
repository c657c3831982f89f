use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Testimonial {
    pub fn new(name: impl Into<String>, role: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            quote: quote.into(),
            avatar_url: None,
        }
    }

    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

impl Record for Testimonial {
    const COLLECTION: &'static str = "testimonial";
}
