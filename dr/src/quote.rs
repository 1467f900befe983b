//! Ayah of the day
//!
//! Fetched from a remote schedule endpoint once per run. Any network or HTTP
//! failure aborts the run; there is no retry.

use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::QuoteConfig;
use crate::error::{DailyReadError, Result};

/// Payload of the schedule endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AyahOfTheDay {
    pub surah_name_en: String,
    pub surah_name_en_trans: String,
    pub surah: u32,
    pub ayah: u32,
    pub arabic_text: String,
    pub english_translation: String,
    pub hijri_date: String,
}

impl AyahOfTheDay {
    /// Markdown for the AYAHADAY block
    pub fn to_markdown(&self) -> String {
        format!(
            "<sub>_{}_</sub><br>\n**Surah {}** ({}: {})\n\n{}\n\n> {}\n\n— {}H",
            self.surah_name_en_trans,
            self.surah_name_en,
            self.surah,
            self.ayah,
            self.arabic_text,
            self.english_translation,
            self.hijri_date
        )
    }
}

/// Where the ayah of the day comes from
pub trait QuoteSource {
    fn fetch(&self) -> Result<AyahOfTheDay>;
}

/// Blocking client for the Tarteel schedule endpoint
pub struct TarteelClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl TarteelClient {
    pub fn from_config(config: &QuoteConfig) -> Result<Self> {
        debug!("TarteelClient::from_config: url={} timeout={}s", config.url, config.timeout_secs);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

impl QuoteSource for TarteelClient {
    fn fetch(&self) -> Result<AyahOfTheDay> {
        debug!("TarteelClient::fetch: GET {}", self.url);
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            debug!("TarteelClient::fetch: HTTP error status {}", status);
            return Err(DailyReadError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let ayah: AyahOfTheDay = response.json()?;
        debug!("TarteelClient::fetch: got {}:{}", ayah.surah, ayah.ayah);
        Ok(ayah)
    }
}
