//! # MongoDB
//!
//! Document store for recipes.
//!
//! ## Schema
//!
//! - One `recipes` collection, documents as in [`Recipe`]
//! - Unique index on `slug`, created at startup
//! - Slug races between concurrent submissions resolve at the index: the
//!   second insert fails with a duplicate-key write error
//!
//! ## Connection
//!
//! - Single client shared by every request handler, concurrency is the
//!   driver's problem
//! - Bounded server selection timeout, then a `ping` at startup so an
//!   unreachable deployment kills the process instead of the first request

use std::time::Duration;

use futures::TryStreamExt;
use mongodb::{
    Client, Collection, IndexModel,
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::{ClientOptions, IndexOptions},
};

use crate::{error::AppError, models::Recipe};

pub const RECIPES_COLLECTION: &str = "recipes";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const DUPLICATE_KEY: i32 = 11000;

pub async fn init_mongo(uri: &str, db_name: &str) -> Result<RecipeStore, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.server_selection_timeout = Some(CONNECT_TIMEOUT);

    let client = Client::with_options(options)?;
    let database = client.database(db_name);

    database.run_command(doc! { "ping": 1 }).await?;

    let collection = database.collection::<Recipe>(RECIPES_COLLECTION);
    collection
        .create_index(
            IndexModel::builder()
                .keys(doc! { "slug": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await?;

    Ok(RecipeStore { client, collection })
}

pub struct RecipeStore {
    client: Client,
    collection: Collection<Recipe>,
}

impl RecipeStore {
    pub async fn create(&self, recipe: &Recipe) -> Result<(), AppError> {
        self.collection.insert_one(recipe).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::DuplicateSlug
            } else {
                AppError::Storage(e)
            }
        })?;

        Ok(())
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Recipe>, AppError> {
        Ok(self.collection.find_one(doc! { "slug": slug }).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Recipe>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// One uniformly sampled recipe, `None` on an empty collection.
    pub async fn find_random_one(&self) -> Result<Option<Recipe>, AppError> {
        let mut cursor = self
            .collection
            .aggregate([doc! { "$sample": { "size": 1 } }])
            .with_type::<Recipe>()
            .await?;

        Ok(cursor.try_next().await?)
    }

    pub async fn close(&self) {
        self.client.clone().shutdown().await;
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match *err.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write)) => write.code == DUPLICATE_KEY,
        _ => false,
    }
}
