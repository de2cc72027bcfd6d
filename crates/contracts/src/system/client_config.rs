use serde::{Deserialize, Serialize};

/// Subset of the server's client config map used by the admin console.
///
/// The server sends every value as a string (`"true"` / `"false"` for flags);
/// keys not listed here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(rename = "Version", default)]
    pub version: String,
    #[serde(rename = "BuildNumber", default)]
    pub build_number: String,
    #[serde(rename = "SiteName", default)]
    pub site_name: String,
    #[serde(rename = "BuildEnterpriseReady", default, with = "string_flag")]
    pub build_enterprise_ready: bool,
}

/// Client-visible license map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseInfo {
    #[serde(rename = "IsLicensed", default, with = "string_flag")]
    pub is_licensed: bool,
}

/// Optional sidebar entries, resolved once from config and license.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureGates {
    pub build_enterprise_ready: bool,
    pub is_licensed: bool,
}

impl FeatureGates {
    pub fn new(config: &ClientConfig, license: &LicenseInfo) -> Self {
        Self {
            build_enterprise_ready: config.build_enterprise_ready,
            is_licensed: license.is_licensed,
        }
    }

    /// LDAP settings need an enterprise build and a valid license.
    pub fn show_ldap(&self) -> bool {
        self.build_enterprise_ready && self.is_licensed
    }

    pub fn show_license(&self) -> bool {
        self.build_enterprise_ready
    }
}

/// `"true"` (or a JSON `true`) is set, anything else is unset.
mod string_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
        Other(serde_json::Value),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Flag::deserialize(deserializer)? {
            Flag::Bool(value) => value,
            Flag::Text(text) => text == "true",
            Flag::Other(_) => false,
        })
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_flags() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"Version":"2.1.0","BuildEnterpriseReady":"true","EnableLdap":"false",
                "OAuthProviderDisplayNames":["GitLab"],"ProfileHeight":"128"}"#,
        )
        .unwrap();
        assert_eq!(config.version, "2.1.0");
        assert!(config.build_enterprise_ready);
    }

    #[test]
    fn test_missing_and_odd_flags_are_unset() {
        let license: LicenseInfo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(!license.is_licensed);

        let license: LicenseInfo = serde_json::from_str(r#"{"IsLicensed":"yes"}"#).unwrap();
        assert!(!license.is_licensed);

        let license: LicenseInfo = serde_json::from_str(r#"{"IsLicensed":1}"#).unwrap();
        assert!(!license.is_licensed);
    }

    #[test]
    fn test_flag_serializes_as_string() {
        let license = LicenseInfo { is_licensed: true };
        let json = serde_json::to_value(&license).unwrap();
        assert_eq!(json["IsLicensed"], "true");
    }

    #[test]
    fn test_feature_gates() {
        let gates = |build, licensed| FeatureGates {
            build_enterprise_ready: build,
            is_licensed: licensed,
        };

        assert!(!gates(false, false).show_ldap());
        assert!(!gates(false, false).show_license());
        assert!(!gates(false, true).show_ldap());
        assert!(!gates(false, true).show_license());
        assert!(!gates(true, false).show_ldap());
        assert!(gates(true, false).show_license());
        assert!(gates(true, true).show_ldap());
        assert!(gates(true, true).show_license());
    }
}
