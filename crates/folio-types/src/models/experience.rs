use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::record::Record;

/// One position in the work history
///
/// `start` and `end` are free-form display strings ("2019", "Present").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub company: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl Experience {
    pub fn new(
        company: impl Into<String>,
        title: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            title: title.into(),
            start: start.into(),
            end: end.into(),
            highlights: Vec::new(),
            logo_url: None,
        }
    }

    pub fn with_highlights<I, S>(mut self, highlights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlights = highlights.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_logo_url(mut self, url: impl Into<String>) -> Self {
        self.logo_url = Some(url.into());
        self
    }
}

impl Record for Experience {
    const COLLECTION: &'static str = "experience";
}
