//! Vipps recurring API configuration
//!
//! Resolves the active credential set and base URL from raw settings and
//! builds every endpoint URL of the recurring v3 API. No requests are made
//! here; an HTTP client consumes the URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use secrecy::{ExposeSecret, SecretString};

use super::error::{ConfigError, ValidationError};
use super::raw::RawSettings;

const LIVE_BASE_URL: &str = "https://api.vipps.no";
const TEST_BASE_URL: &str = "https://apitest.vipps.no";

const ACCESS_TOKEN_PATH: &str = "/accesstoken/get";
const AGREEMENTS_PATH: &str = "/recurring/v3/agreements";

/// Everything except RFC 3986 unreserved characters is encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Raw setting keys for one credential set.
struct CredentialKeys {
    msn: &'static str,
    subscription_key: &'static str,
    client_id: &'static str,
    client_secret: &'static str,
}

const LIVE_KEYS: CredentialKeys = CredentialKeys {
    msn: "msn",
    subscription_key: "subscription_key",
    client_id: "client_id",
    client_secret: "client_secret",
};

const TEST_KEYS: CredentialKeys = CredentialKeys {
    msn: "test_msn",
    subscription_key: "test_subscription_key",
    client_id: "test_client_id",
    client_secret: "test_client_secret",
};

const MERCHANT_AGREEMENT_URL_KEY: &str = "MerchantAgreementUrl";
const TEST_MODE_KEY: &str = "test_mode";

/// Vipps recurring API configuration.
///
/// Exactly one credential set is loaded: test-prefixed keys in test mode,
/// unprefixed keys otherwise. Immutable once built; rebuild on settings
/// changes.
#[derive(Debug)]
pub struct VippsApiConfig {
    msn: Option<String>,
    subscription_key: Option<String>,
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    test_mode: bool,
    merchant_agreement_url: Option<String>,
}

impl VippsApiConfig {
    /// Builds the configuration for an explicit mode.
    ///
    /// Keys of the inactive credential set are never read, so a test-mode
    /// config does not fall back to live credentials.
    pub fn build(raw: &RawSettings, is_test_mode: bool) -> Self {
        let keys = if is_test_mode { &TEST_KEYS } else { &LIVE_KEYS };

        let config = Self {
            msn: raw.get_str(keys.msn),
            subscription_key: raw.get_str(keys.subscription_key),
            client_id: raw.get_str(keys.client_id),
            client_secret: raw.get_str(keys.client_secret).map(SecretString::new),
            test_mode: is_test_mode,
            merchant_agreement_url: raw.get_str(MERCHANT_AGREEMENT_URL_KEY),
        };

        tracing::debug!(
            test_mode = is_test_mode,
            has_msn = config.msn.is_some(),
            has_subscription_key = config.subscription_key.is_some(),
            has_client_id = config.client_id.is_some(),
            has_client_secret = config.client_secret.is_some(),
            "Built Vipps API configuration"
        );

        config
    }

    /// Builds the configuration, taking the mode from the `test_mode` setting.
    ///
    /// A missing `test_mode` means live mode.
    pub fn from_raw(raw: &RawSettings) -> Result<Self, ConfigError> {
        let test_mode = raw.get_bool(TEST_MODE_KEY)?.unwrap_or(false);
        Ok(Self::build(raw, test_mode))
    }

    /// Loads settings from the environment and builds the configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_raw(&RawSettings::from_env()?)
    }

    fn keys(&self) -> &'static CredentialKeys {
        if self.test_mode {
            &TEST_KEYS
        } else {
            &LIVE_KEYS
        }
    }

    /// Merchant serial number.
    pub fn msn(&self) -> Result<&str, ConfigError> {
        required(self.msn.as_deref(), self.keys().msn)
    }

    /// `Ocp-Apim-Subscription-Key` value.
    pub fn subscription_key(&self) -> Result<&str, ConfigError> {
        required(self.subscription_key.as_deref(), self.keys().subscription_key)
    }

    pub fn client_id(&self) -> Result<&str, ConfigError> {
        required(self.client_id.as_deref(), self.keys().client_id)
    }

    pub fn client_secret(&self) -> Result<&str, ConfigError> {
        required(
            self.client_secret.as_ref().map(|s| s.expose_secret().as_str()),
            self.keys().client_secret,
        )
    }

    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }

    /// Merchant agreement URL, passed through unchanged.
    pub fn merchant_agreement_url(&self) -> Option<&str> {
        self.merchant_agreement_url.as_deref()
    }

    pub fn base_url(&self) -> &'static str {
        if self.test_mode {
            TEST_BASE_URL
        } else {
            LIVE_BASE_URL
        }
    }

    pub fn access_token_request_url(&self) -> String {
        self.url(ACCESS_TOKEN_PATH)
    }

    pub fn draft_agreement_request_url(&self) -> String {
        self.url(AGREEMENTS_PATH)
    }

    pub fn retrieve_agreement_url(&self, agreement_id: &str) -> Result<String, ConfigError> {
        self.agreement_url(agreement_id, "")
    }

    pub fn update_agreement_url(&self, agreement_id: &str) -> Result<String, ConfigError> {
        self.agreement_url(agreement_id, "")
    }

    pub fn retrieve_charges_url(&self, agreement_id: &str) -> Result<String, ConfigError> {
        self.agreement_url(agreement_id, "/charges")
    }

    pub fn create_charge_url(&self, agreement_id: &str) -> Result<String, ConfigError> {
        self.agreement_url(agreement_id, "/charges")
    }

    pub fn charge_url(&self, agreement_id: &str, charge_id: &str) -> Result<String, ConfigError> {
        self.charge_action_url(agreement_id, charge_id, "")
    }

    pub fn refund_url(&self, agreement_id: &str, charge_id: &str) -> Result<String, ConfigError> {
        self.charge_action_url(agreement_id, charge_id, "/refund")
    }

    pub fn capture_url(&self, agreement_id: &str, charge_id: &str) -> Result<String, ConfigError> {
        self.charge_action_url(agreement_id, charge_id, "/capture")
    }

    /// Checks that the active credential set is complete.
    ///
    /// Intended for startup; URL builders work without credentials.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let keys = self.keys();
        let credentials = [
            (self.msn.as_deref(), keys.msn),
            (self.subscription_key.as_deref(), keys.subscription_key),
            (self.client_id.as_deref(), keys.client_id),
            (
                self.client_secret.as_ref().map(|s| s.expose_secret().as_str()),
                keys.client_secret,
            ),
        ];

        for (value, key) in credentials {
            if value.map_or(true, |v| v.trim().is_empty()) {
                return Err(ValidationError::MissingRequired(key));
            }
        }

        if let Some(url) = self.merchant_agreement_url.as_deref() {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ValidationError::InvalidMerchantAgreementUrl);
            }
        }

        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn agreement_url(&self, agreement_id: &str, suffix: &str) -> Result<String, ConfigError> {
        let agreement = encode_segment(agreement_id, "agreement_id")?;
        Ok(self.url(&format!("{}/{}{}", AGREEMENTS_PATH, agreement, suffix)))
    }

    fn charge_action_url(
        &self,
        agreement_id: &str,
        charge_id: &str,
        suffix: &str,
    ) -> Result<String, ConfigError> {
        let charge = encode_segment(charge_id, "charge_id")?;
        self.agreement_url(agreement_id, &format!("/charges/{}{}", charge, suffix))
    }
}

fn required<'a>(value: Option<&'a str>, key: &'static str) -> Result<&'a str, ConfigError> {
    value.ok_or(ConfigError::MissingConfiguration(key))
}

fn encode_segment(id: &str, field: &'static str) -> Result<String, ConfigError> {
    if id.is_empty() {
        return Err(ConfigError::InvalidIdentifier(field));
    }
    Ok(utf8_percent_encode(id, PATH_SEGMENT).to_string())
}
