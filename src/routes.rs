use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::{StatusCode, header::LOCATION},
    response::{Html, IntoResponse},
};
use serde_json::json;

use crate::{
    error::AppError, models::Recipe, slug::slugify, state::AppState, upload::store_image,
};

pub async fn list_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let recipes = state.store.find_all().await?;

    // Featured recipe is sampled independently of the listing fetch.
    let featured = if recipes.is_empty() {
        None
    } else {
        state.store.find_random_one().await?
    };

    let body = state.templates.render(
        "main",
        &json!({ "recipes": recipes, "featured": featured }),
    )?;

    Ok(Html(body))
}

pub async fn detail_handler(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let recipe = state
        .store
        .find_by_slug(&slug)
        .await?
        .ok_or(AppError::NotFound)?;

    let body = state.templates.render("recipe", &json!({ "recipe": recipe }))?;

    Ok(Html(body))
}

pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut form = RecipeForm::default();

    while let Some(field) = multipart.next_field().await? {
        // text()/bytes() consume the field, so copy the part name out first.
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "title" => form.title = Some(field.text().await?),
            "description" => form.description = Some(field.text().await?),
            "ingredients" => form.ingredients = Some(field.text().await?),
            "instructions" => form.instructions = Some(field.text().await?),
            "image" => {
                let original = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                form.image = Some(store_image(&original, &bytes).await?);
            }
            _ => {}
        }
    }

    state.store.create(&form.into_recipe()?).await?;

    Ok((StatusCode::FOUND, [(LOCATION, "/")]))
}

#[derive(Default)]
struct RecipeForm {
    title: Option<String>,
    description: Option<String>,
    ingredients: Option<String>,
    instructions: Option<String>,
    image: Option<String>,
}

impl RecipeForm {
    fn into_recipe(self) -> Result<Recipe, AppError> {
        let title = self.title.ok_or(AppError::MalformedForm("title"))?;
        let description = self.description.ok_or(AppError::MalformedForm("description"))?;
        let ingredients = self.ingredients.ok_or(AppError::MalformedForm("ingredients"))?;
        let instructions = self.instructions.ok_or(AppError::MalformedForm("instructions"))?;
        let image = self.image.ok_or(AppError::MissingUpload)?;

        Ok(Recipe {
            slug: slugify(&title),
            ingredients: split_ingredients(&ingredients),
            title,
            description,
            instructions,
            image,
        })
    }
}

/// The form sends ingredients as one comma-separated field. Entries keep
/// their spacing and order; display order matters and nothing dedups.
fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RecipeForm {
        RecipeForm {
            title: Some("Mom's Pie!!".to_string()),
            description: Some("x".to_string()),
            ingredients: Some("flour,sugar,butter".to_string()),
            instructions: Some("bake".to_string()),
            image: Some("1700000000000-pie.png".to_string()),
        }
    }

    #[test]
    fn form_assembles_a_recipe() {
        let recipe = filled_form().into_recipe().unwrap();

        assert_eq!(recipe.slug, "moms-pie");
        assert_eq!(recipe.ingredients, ["flour", "sugar", "butter"]);
        assert_eq!(recipe.title, "Mom's Pie!!");
        assert_eq!(recipe.image, "1700000000000-pie.png");
    }

    #[test]
    fn missing_text_field_is_malformed() {
        let mut form = filled_form();
        form.title = None;

        assert!(matches!(
            form.into_recipe(),
            Err(AppError::MalformedForm("title"))
        ));
    }

    #[test]
    fn missing_image_is_an_upload_error() {
        let mut form = filled_form();
        form.image = None;

        assert!(matches!(form.into_recipe(), Err(AppError::MissingUpload)));
    }

    #[test]
    fn ingredients_split_verbatim() {
        assert_eq!(split_ingredients("a, b ,c"), ["a", " b ", "c"]);
        assert_eq!(split_ingredients("solo"), ["solo"]);
    }
}
