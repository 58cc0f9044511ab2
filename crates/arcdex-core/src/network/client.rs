use std::time::Duration;

use tracing::debug;
use ureq::Agent;

use super::PageSource;
use crate::config::ScrapeConfig;
use crate::error::{Error, Result};
use crate::retry::{ExponentialBackoff, RetryStrategy, log_retry};

/// Fetches pages from a Fandom wiki over HTTPS.
pub struct HttpPageSource {
    agent: Agent,
    wiki: String,
    base_url: String,
    retry: ExponentialBackoff,
    request_delay: Duration,
}

impl HttpPageSource {
    pub fn new(config: &ScrapeConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .user_agent(config.user_agent.as_str())
            .build()
            .into();

        Self {
            agent,
            wiki: config.wiki.clone(),
            base_url: config.base_url.clone(),
            retry: ExponentialBackoff::new(config.attempts),
            request_delay: config.request_delay(),
        }
    }

    /// URL of a page title on this wiki
    pub fn page_url(&self, page: &str) -> String {
        page_url(&self.base_url, &self.wiki, page)
    }

    fn get(&self, url: &str) -> Result<String> {
        let mut response = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::StatusCode(status) => Error::HttpStatus {
                url: url.to_string(),
                status,
            },
            other => Error::Http(format!("{}: {}", url, Error::from(other))),
        })?;

        response
            .body_mut()
            .read_to_string()
            .map_err(|e| Error::Http(format!("{}: {}", url, Error::from(e))))
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, page: &str) -> Result<String> {
        if !self.request_delay.is_zero() {
            std::thread::sleep(self.request_delay);
        }

        let url = self.page_url(page);
        debug!("GET {}", url);

        self.retry.execute_when(
            |attempt| {
                self.get(&url).inspect_err(|e| {
                    if e.is_transient() && attempt + 1 < self.retry.max_attempts() {
                        log_retry(&url, attempt, e);
                    }
                })
            },
            Error::is_transient,
        )
    }
}

/// Build a page URL from a `{wiki}`/`{page}` template.
///
/// Spaces become underscores like wiki links do; everything outside the
/// path-safe ASCII set is percent-encoded.
pub fn page_url(template: &str, wiki: &str, page: &str) -> String {
    template
        .replace("{wiki}", wiki)
        .replace("{page}", &encode_page_title(page))
}

fn encode_page_title(page: &str) -> String {
    const SAFE: &str = "-._~!$&'()*+,;=:@/";

    let mut out = String::with_capacity(page.len());
    for c in page.chars() {
        if c == ' ' {
            out.push('_');
        } else if c.is_ascii_alphanumeric() || SAFE.contains(c) {
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::wiki::BASE_URL;

    #[test]
    fn test_page_url_spaces_and_question_mark() {
        assert_eq!(
            page_url(BASE_URL, "arcaea", "Songs by Date"),
            "https://arcaea.fandom.com/wiki/Songs_by_Date"
        );
        assert_eq!(
            page_url(BASE_URL, "arcaea", "Why do I?"),
            "https://arcaea.fandom.com/wiki/Why_do_I%3F"
        );
    }

    #[test]
    fn test_page_url_encodes_non_ascii() {
        assert_eq!(
            page_url(BASE_URL, "arcaea", "Ävril"),
            "https://arcaea.fandom.com/wiki/%C3%84vril"
        );
        assert_eq!(
            page_url(BASE_URL, "arcaea", "#1f1e33"),
            "https://arcaea.fandom.com/wiki/%231f1e33"
        );
    }

    #[test]
    fn test_page_url_keeps_safe_punctuation() {
        assert_eq!(
            page_url(BASE_URL, "arcaea", "Memory Archive: Ether Strike"),
            "https://arcaea.fandom.com/wiki/Memory_Archive:_Ether_Strike"
        );
    }

    #[test]
    fn test_http_source_uses_config() {
        let config = ScrapeConfig {
            wiki: "example".to_string(),
            ..ScrapeConfig::default()
        };
        let source = HttpPageSource::new(&config);
        assert_eq!(
            source.page_url("Main Page"),
            "https://example.fandom.com/wiki/Main_Page"
        );
    }
}
