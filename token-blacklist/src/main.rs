use std::sync::Arc;
use color_eyre::eyre::{eyre, Result};
use token_blacklist::{
    Application,
    app_state::AppState,
    services::data_stores::HashmapBlacklistStore,
    utils::{constants::prod, tracing::init_tracing},
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let blacklist_store = Arc::new(HashmapBlacklistStore::new());
    let app_state = AppState::new(blacklist_store);

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .map_err(|e| eyre!("Failed to build app: {}", e))?;

    app.run().await?;
    Ok(())
}
