use serde::{Deserialize, Serialize};

/// A stored recipe. `slug` is the external identifier and carries a
/// unique index; `image` is the filename of the uploaded photo under
/// the uploads directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: String,
    pub slug: String,
}
