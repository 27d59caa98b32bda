use clap::Parser;
use mealswipe_core::infrastructure::recipe::mealdb_client::DEFAULT_MEALDB_BASE_URL;

#[derive(Debug, Clone, Parser)]
#[command(name = "mealswipe-api", about = "Mealswipe HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub recipe: RecipeArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    /// Address the HTTP server binds to.
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StoreArgs {
    /// DynamoDB table holding like records.
    #[arg(long, env = "TABLE_NAME")]
    pub table_name: String,

    /// Endpoint override for local DynamoDB.
    #[arg(long, env = "DYNAMODB_ENDPOINT")]
    pub dynamodb_endpoint: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RecipeArgs {
    /// Base URL of the recipe source API.
    #[arg(long, env = "MEALDB_BASE_URL", default_value = DEFAULT_MEALDB_BASE_URL)]
    pub mealdb_base_url: String,
}
