use std::future::Future;

use reqwest::{
    Client,
    Response,
};
use tracing::debug;

use crate::core::{
    models::{
        Collection,
        SectionPayload,
    },
    settings::AppSettings,
    HadithError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edition {
    /// The translation, whose order and metadata drive the merge.
    Primary,
    Secondary,
}

/// Where section payloads come from. The HTTP implementation is the only one
/// outside of tests.
pub trait SectionSource {
    fn fetch_edition(
        &self,
        edition: Edition,
        collection: Collection,
        section: u32,
    ) -> impl Future<Output = Result<SectionPayload, HadithError>> + Send;
}

pub fn http_client(settings: &AppSettings) -> Result<Client, HadithError> {
    let mut builder = Client::builder().user_agent(settings.user_agent.as_str());
    if let Some(timeout) = settings.request_timeout() {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

#[derive(Clone)]
pub struct HttpSectionSource {
    client: Client,
    api_base: String,
    primary_edition: String,
    secondary_edition: String,
}

impl HttpSectionSource {
    pub fn new(settings: &AppSettings) -> Result<Self, HadithError> {
        let api_base = settings.api_base.trim().trim_end_matches('/');
        if api_base.is_empty() {
            return Err(HadithError::Custom("api_base is empty".to_string()));
        }

        Ok(Self {
            client: http_client(settings)?,
            api_base: api_base.to_string(),
            primary_edition: settings.primary_edition.clone(),
            secondary_edition: settings.secondary_edition.clone(),
        })
    }

    pub fn section_url(&self, edition: Edition, collection: Collection, section: u32) -> String {
        let prefix = match edition {
            Edition::Primary => &self.primary_edition,
            Edition::Secondary => &self.secondary_edition,
        };

        format!(
            "{}/editions/{}-{}/sections/{}.json",
            self.api_base,
            prefix,
            collection.slug(),
            section
        )
    }
}

impl SectionSource for HttpSectionSource {
    fn fetch_edition(
        &self,
        edition: Edition,
        collection: Collection,
        section: u32,
    ) -> impl Future<Output = Result<SectionPayload, HadithError>> + Send {
        let client = self.client.clone();
        let url = self.section_url(edition, collection, section);

        async move {
            debug!("GET {}", url);

            let resp = client
                .get(&url)
                .send()
                .await
                .map_err(|e| HadithError::Fetch { url: url.clone(), reason: e.to_string() })?;

            ensure_success(&resp)?;

            resp.json::<SectionPayload>()
                .await
                .map_err(|e| HadithError::Fetch { url, reason: format!("invalid body: {e}") })
        }
    }
}

fn ensure_success(resp: &Response) -> Result<(), HadithError> {
    if !resp.status().is_success() {
        return Err(HadithError::Fetch {
            url: resp.url().to_string(),
            reason: format!("HTTP error {}", resp.status()),
        });
    }
    Ok(())
}
