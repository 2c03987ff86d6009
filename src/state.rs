use std::sync::Arc;

use handlebars::Handlebars;

use super::{
    config::Config,
    database::{RecipeStore, init_mongo},
    views::init_templates,
};

pub struct AppState {
    pub config: Config,
    pub store: RecipeStore,
    pub templates: Handlebars<'static>,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let store = init_mongo(&config.mongo_uri, &config.mongo_db)
            .await
            .expect("Failed to connect to MongoDB!");

        let templates = init_templates();

        Arc::new(Self {
            config,
            store,
            templates,
        })
    }

    pub async fn close(&self) {
        self.store.close().await;
    }
}
