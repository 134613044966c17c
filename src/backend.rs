use crate::errors::ClientError;
use async_trait::async_trait;
use reqwest::{Client, Url};

#[async_trait]
pub trait Backend: Send + Sync {
    /// GET `endpoint` and return the response body. Non-2xx is an error.
    async fn get_body(&self, endpoint: &str) -> Result<String, ClientError>;

    /// POST `fields` as an url-encoded form to `endpoint`. Non-2xx is an error.
    async fn post_form(&self, endpoint: &str, fields: FormFields<'_>) -> Result<(), ClientError>;
}

pub type FormFields<'a> = &'a [(&'a str, String)];

#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), endpoint)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn get_body(&self, endpoint: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|err| ClientError::http(endpoint, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(endpoint, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|err| ClientError::http(endpoint, err))
    }

    async fn post_form(&self, endpoint: &str, fields: FormFields<'_>) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url(endpoint))
            .form(fields)
            .send()
            .await
            .map_err(|err| ClientError::http(endpoint, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(endpoint, status.as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let backend = HttpBackend::new(Url::parse("http://localhost:8000/").unwrap());
        assert_eq!(
            backend.url("/api/time_of_year_style"),
            "http://localhost:8000/api/time_of_year_style"
        );
    }
}
