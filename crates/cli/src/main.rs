use anyhow::Context;
use shelfpick_browser::{BrowserConfig, FileBrowserClient, visible_tabs};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "shelf.toml".to_string());
    info!(config = %config_path, "loading browser config");
    let config =
        BrowserConfig::from_file(&config_path).context("failed to load browser config")?;

    let tabs = visible_tabs(&config.picker);
    info!(count = tabs.len(), tabs = ?tabs, "picker tabs enabled");

    let client = FileBrowserClient::new(&config.web_url)
        .context("failed to initialize file browser client")?;
    info!(
        web_url = %config.web_url,
        library = %config.library,
        folder_path = ?config.folder_path,
        accepts = ?config.accepts,
        "listing site library"
    );

    match client
        .list_files(
            &config.library,
            config.folder_path.as_deref(),
            config.accepts.as_deref(),
        )
        .await
    {
        Some(items) if items.is_empty() => {
            info!(library = %config.library, "library has no matching items");
        }
        Some(items) => {
            info!(library = %config.library, count = items.len(), "listing complete");
            for item in &items {
                info!(
                    name = %item.name,
                    kind = if item.is_folder { "folder" } else { "file" },
                    modified = %item.modified,
                    modified_by = %item.modified_by,
                    size = %item.size,
                    path = %item.path,
                    "item"
                );
            }
        }
        None => warn!(library = %config.library, "listing failed, see error log above"),
    }

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
