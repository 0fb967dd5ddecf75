//! Recommended-settings baseline definitions

use ftpaudit_core::{Error, Result, Severity};
use serde::{Deserialize, Serialize};

/// One recommended configuration setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedSetting {
    /// Configuration key, as it appears in vsftpd.conf
    pub key: String,

    /// Recommended value, compared case-sensitively
    pub expected: String,

    /// Severity of a deviation
    #[serde(default = "default_severity")]
    pub severity: Severity,

    /// Why this value is recommended
    #[serde(default)]
    pub rationale: String,
}

fn default_severity() -> Severity {
    Severity::Medium
}

impl RecommendedSetting {
    pub fn new(
        key: impl Into<String>,
        expected: impl Into<String>,
        severity: Severity,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            expected: expected.into(),
            severity,
            rationale: rationale.into(),
        }
    }
}

/// An ordered set of recommended settings.
///
/// Order determines report order for missing keys. Key lookup is
/// case-insensitive; keys are unique within a baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baseline {
    settings: Vec<RecommendedSetting>,
}

impl Baseline {
    /// Build a baseline from a list of settings, rejecting duplicate keys
    pub fn new(settings: Vec<RecommendedSetting>) -> Result<Self> {
        for (i, setting) in settings.iter().enumerate() {
            if setting.key.trim().is_empty() {
                return Err(Error::InvalidBaseline {
                    message: format!("setting {} has an empty key", i + 1),
                });
            }
            if settings[..i]
                .iter()
                .any(|s| s.key.eq_ignore_ascii_case(&setting.key))
            {
                return Err(Error::InvalidBaseline {
                    message: format!("duplicate key: {}", setting.key),
                });
            }
        }
        Ok(Self { settings })
    }

    /// Look up a setting by key, case-insensitively
    pub fn get(&self, key: &str) -> Option<&RecommendedSetting> {
        self.settings
            .iter()
            .find(|s| s.key.eq_ignore_ascii_case(key))
    }

    /// Iterate settings in table order
    pub fn iter(&self) -> impl Iterator<Item = &RecommendedSetting> {
        self.settings.iter()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// The built-in baseline of recommended vsftpd security settings
    pub fn vsftpd() -> Self {
        use Severity::{High, Info, Low, Medium};

        let settings = vec![
            RecommendedSetting::new(
                "anonymous_enable",
                "NO",
                High,
                "Anonymous FTP access should be disabled on a hardened server.",
            ),
            RecommendedSetting::new(
                "local_enable",
                "YES",
                Low,
                "Local system users should be able to log in.",
            ),
            RecommendedSetting::new(
                "write_enable",
                "YES",
                Low,
                "Authenticated users need write access for uploads and modifications.",
            ),
            RecommendedSetting::new(
                "dirmessage_enable",
                "YES",
                Info,
                "Directory messages are shown when users enter directories.",
            ),
            RecommendedSetting::new(
                "use_localtime",
                "YES",
                Info,
                "Log entries should use local time.",
            ),
            RecommendedSetting::new(
                "xferlog_enable",
                "YES",
                Medium,
                "File transfers should be logged for audit trails.",
            ),
            RecommendedSetting::new(
                "connect_from_port_20",
                "YES",
                Low,
                "Active-mode data connections should originate from port 20.",
            ),
            RecommendedSetting::new(
                "chown_uploads",
                "NO",
                Medium,
                "Uploaded files should keep their ownership.",
            ),
            RecommendedSetting::new(
                "xferlog_std_format",
                "YES",
                Low,
                "The standard xferlog format keeps transfer logs parseable.",
            ),
            RecommendedSetting::new(
                "async_abor_enable",
                "YES",
                Info,
                "Asynchronous ABOR requests keep older clients working.",
            ),
            RecommendedSetting::new(
                "pasv_enable",
                "YES",
                Low,
                "Passive mode improves compatibility with client-side firewalls.",
            ),
            RecommendedSetting::new(
                "port_enable",
                "YES",
                Low,
                "Active mode should remain available for clients that need it.",
            ),
            RecommendedSetting::new(
                "pam_service_name",
                "vsftpd",
                Medium,
                "User authentication should go through the vsftpd PAM service.",
            ),
            RecommendedSetting::new(
                "userlist_enable",
                "YES",
                Medium,
                "The user list restricts which accounts may log in.",
            ),
            RecommendedSetting::new(
                "tcp_wrappers",
                "YES",
                Medium,
                "TCP Wrappers allow access control by source address.",
            ),
            RecommendedSetting::new(
                "ascii_upload_enable",
                "NO",
                Medium,
                "ASCII-mode uploads can be abused for denial of service.",
            ),
            RecommendedSetting::new(
                "ascii_download_enable",
                "NO",
                Medium,
                "ASCII-mode downloads can be abused for denial of service.",
            ),
            RecommendedSetting::new(
                "chroot_local_user",
                "YES",
                High,
                "Local users should be confined to their home directories.",
            ),
            RecommendedSetting::new(
                "allow_anon_ssl",
                "NO",
                High,
                "SSL sessions should not be offered to anonymous users.",
            ),
            RecommendedSetting::new(
                "anon_mkdir_write_enable",
                "NO",
                High,
                "Anonymous users must not be able to create directories.",
            ),
            RecommendedSetting::new(
                "anon_other_write_enable",
                "NO",
                High,
                "Anonymous users must not be able to modify or delete files.",
            ),
            RecommendedSetting::new(
                "anon_upload_enable",
                "NO",
                High,
                "Anonymous users must not be able to upload files.",
            ),
            RecommendedSetting::new(
                "anon_world_readable_only",
                "YES",
                Medium,
                "Anonymous users should only see world-readable files.",
            ),
            RecommendedSetting::new(
                "chmod_enable",
                "YES",
                Low,
                "Users may adjust permissions on files they own.",
            ),
            RecommendedSetting::new(
                "download_enable",
                "YES",
                Info,
                "Downloads should remain available to users.",
            ),
            RecommendedSetting::new(
                "no_anon_password",
                "YES",
                Low,
                "Anonymous logins should not prompt for a password.",
            ),
            RecommendedSetting::new(
                "passwd_chroot_enable",
                "YES",
                Medium,
                "Chroot locations may be taken from /etc/passwd.",
            ),
        ];

        // Built-in table has no duplicates
        Self { settings }
    }
}
