pub mod contact;
pub mod diagnostics;
pub mod portfolio;
pub mod root;
pub mod schema;
