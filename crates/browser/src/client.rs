//! HTTP client for the remote container-listing endpoint.

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use shelfpick_api_types::FileItem;

use crate::error::{BrowserError, Result};
use crate::query::ListingQuery;
use crate::row::ListRow;
use crate::source::FileSource;

/// ContextInfo (1), ListData (2), ListSchema (4), ViewMetadata (1024),
/// EnableMediaTAUrls (4096), ParentInfo (8192).
const RENDER_OPTIONS: u32 = 1 | 2 | 4 | 1024 | 4096 | 8192;

/// Request body of the listing endpoint.
#[derive(Debug, Serialize)]
struct RenderListDataBody {
    parameters: RenderParameters,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RenderParameters {
    allow_multiple_value_filter_for_taxonomy_fields: bool,
    render_options: u32,
    view_xml: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    folder_server_relative_url: Option<String>,
}

/// Response envelope of the listing endpoint.
#[derive(Debug, Deserialize)]
struct RenderListDataResponse {
    #[serde(rename = "ListData")]
    list_data: Option<ListData>,
}

#[derive(Debug, Deserialize)]
struct ListData {
    #[serde(rename = "Row")]
    row: Option<Vec<ListRow>>,
}

/// Client for the site-library listing endpoint.
///
/// Each call is one network round trip with no retry, cache, or
/// cancellation; concurrent calls are independent. Timeouts are
/// whatever the underlying transport defaults to.
#[derive(Debug)]
pub struct FileBrowserClient {
    client: Client,
    web_url: String,
    site_origin: String,
}

impl FileBrowserClient {
    /// Creates a client for the site at `web_url`.
    ///
    /// The URL must be absolute; its origin becomes the container root
    /// prepended to server-relative paths when normalizing rows.
    pub fn new(web_url: &str) -> Result<Self> {
        let parsed = Url::parse(web_url)
            .map_err(|err| BrowserError::Config(format!("invalid web URL '{web_url}': {err}")))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| BrowserError::Config(format!("web URL '{web_url}' has no host")))?;

        let mut site_origin = format!("{}://{host}", parsed.scheme());
        if let Some(port) = parsed.port() {
            site_origin.push_str(&format!(":{port}"));
        }

        Ok(Self {
            client: Client::new(),
            web_url: web_url.trim_end_matches('/').to_string(),
            site_origin,
        })
    }

    /// Origin of the site URL, the root locator of absolute paths.
    pub fn site_origin(&self) -> &str {
        &self.site_origin
    }

    /// Lists the files and folders of a library.
    ///
    /// Any failure (transport, non-success status, missing envelope) is
    /// logged once at error level and collapses to `None`; `Some(vec![])`
    /// means the library genuinely has no matching items.
    #[tracing::instrument(skip(self))]
    pub async fn list_files(
        &self,
        library: &str,
        folder_path: Option<&str>,
        accepts: Option<&str>,
    ) -> Option<Vec<FileItem>> {
        match self.fetch_list_items(library, folder_path, accepts).await {
            Ok(items) => {
                info!(library, count = items.len(), "listing completed");
                Some(items)
            }
            Err(err) => {
                error!(library, error = %err, "listing request failed");
                None
            }
        }
    }

    async fn fetch_list_items(
        &self,
        library: &str,
        folder_path: Option<&str>,
        accepts: Option<&str>,
    ) -> Result<Vec<FileItem>> {
        if library.is_empty() {
            return Err(BrowserError::Config(
                "library name must not be empty".to_string(),
            ));
        }

        let query = ListingQuery::new(accepts);
        let endpoint = format!(
            "{}/_api/web/lists/GetByTitle('{library}')/RenderListDataAsStream",
            self.web_url
        );
        let body = RenderListDataBody {
            parameters: RenderParameters {
                allow_multiple_value_filter_for_taxonomy_fields: true,
                render_options: RENDER_OPTIONS,
                view_xml: query.view_xml(),
                folder_server_relative_url: folder_path.map(str::to_string),
            },
        };

        let response = self
            .client
            .post(&endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let envelope: RenderListDataResponse = response.json().await?;
        let rows = envelope
            .list_data
            .and_then(|data| data.row)
            .ok_or_else(|| {
                BrowserError::MalformedResponse(
                    "response has no ListData.Row collection".to_string(),
                )
            })?;

        // Source row order is preserved.
        Ok(rows
            .iter()
            .map(|row| row.normalize(&self.site_origin))
            .collect())
    }
}

#[async_trait::async_trait]
impl FileSource for FileBrowserClient {
    fn name(&self) -> &str {
        "site"
    }

    async fn list_files(
        &self,
        library: &str,
        folder_path: Option<&str>,
        accepts: Option<&str>,
    ) -> Option<Vec<FileItem>> {
        FileBrowserClient::list_files(self, library, folder_path, accepts).await
    }
}
