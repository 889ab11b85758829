use std::ffi::OsString;

use clap::Parser;

use crate::{
    consts::{HOCKEYAPP_API_HOST, HOCKEYAPP_API_HOST_ENV},
    errors::DeployError,
    util::logs,
};

/// Upload an app binary (and optional mapping file) to HockeyApp
///
/// Every input can be given as a flag or through the environment variable of
/// the same name, which is how the pipeline passes step inputs.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the app binary to upload
    #[arg(long, env = "apk_path", default_value = "")]
    pub apk_path: String,

    /// Path to the symbol mapping file (optional)
    #[arg(long, env = "mapping_path", default_value = "")]
    pub mapping_path: String,

    /// HockeyApp API token
    #[arg(long, env = "api_token", default_value = "", hide_env_values = true)]
    pub api_token: String,

    /// App identifier; uploads a new version of this app when set
    #[arg(long, env = "app_id", default_value = "")]
    pub app_id: String,

    #[arg(long, env = "notes", default_value = "")]
    pub notes: String,

    /// 0 for textile, 1 for markdown
    #[arg(long, env = "notes_type", default_value = "")]
    pub notes_type: String,

    #[arg(long, env = "notify", default_value = "")]
    pub notify: String,

    #[arg(long, env = "status", default_value = "")]
    pub status: String,

    /// "1" or "true" marks the version as mandatory
    #[arg(long, env = "mandatory", default_value = "")]
    pub mandatory: String,

    #[arg(long, env = "tags", default_value = "")]
    pub tags: String,

    #[arg(long, env = "commit_sha", default_value = "")]
    pub commit_sha: String,

    #[arg(long, env = "build_server_url", default_value = "")]
    pub build_server_url: String,

    #[arg(long, env = "repository_url", default_value = "")]
    pub repository_url: String,

    #[arg(long, env = HOCKEYAPP_API_HOST_ENV, default_value = HOCKEYAPP_API_HOST, hide = true)]
    pub api_host: String,
}

/// Scalar form fields sent with every upload. Empty values are still sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFields {
    pub notes: String,
    pub notes_type: String,
    pub notify: String,
    pub status: String,
    pub mandatory: String,
    pub tags: String,
    pub commit_sha: String,
    pub build_server_url: String,
    pub repository_url: String,
}

impl UploadFields {
    pub fn pairs(&self) -> [(&'static str, &str); 9] {
        [
            ("notes", &self.notes),
            ("notes_type", &self.notes_type),
            ("notify", &self.notify),
            ("status", &self.status),
            ("mandatory", &self.mandatory),
            ("tags", &self.tags),
            ("commit_sha", &self.commit_sha),
            ("build_server_url", &self.build_server_url),
            ("repository_url", &self.repository_url),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub apk_path: String,
    pub mapping_path: String,
    pub api_token: String,
    pub app_id: String,
    pub api_host: String,
    pub fields: UploadFields,
}

impl From<Args> for DeployConfig {
    fn from(args: Args) -> Self {
        Self {
            apk_path: args.apk_path,
            mapping_path: args.mapping_path,
            api_token: args.api_token,
            app_id: args.app_id,
            api_host: args.api_host,
            fields: UploadFields {
                notes: args.notes,
                notes_type: args.notes_type,
                notify: args.notify,
                status: args.status,
                mandatory: normalize_mandatory(&args.mandatory).to_string(),
                tags: args.tags,
                commit_sha: args.commit_sha,
                build_server_url: args.build_server_url,
                repository_url: args.repository_url,
            },
        }
    }
}

impl DeployConfig {
    pub fn print(&self) {
        logs::info("Configs:");
        logs::details(format!("apk_path: {}", self.apk_path));
        logs::details(format!("mapping_path: {}", self.mapping_path));
        logs::details("api_token: ***");
        logs::details(format!("app_id: {}", self.app_id));
        for (name, value) in self.fields.pairs() {
            logs::details(format!("{name}: {value}"));
        }
    }
}

/// Reads flags and step inputs. `--help` and `--version` also come back as
/// `DeployError::Arguments`; their clap error reports `use_stderr() == false`.
pub fn load<I, T>(args: I) -> Result<DeployConfig, DeployError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Args::try_parse_from(args)?.into())
}

/// Older pipelines pass "true", newer ones "1"; anything else is not mandatory.
pub fn normalize_mandatory(value: &str) -> &'static str {
    match value {
        "1" | "true" => "1",
        _ => "0",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mandatory() {
        assert_eq!(normalize_mandatory("1"), "1");
        assert_eq!(normalize_mandatory("true"), "1");
        assert_eq!(normalize_mandatory("0"), "0");
        assert_eq!(normalize_mandatory("false"), "0");
        assert_eq!(normalize_mandatory("TRUE"), "0");
        assert_eq!(normalize_mandatory(""), "0");
    }

    #[test]
    fn test_args_into_config() {
        let args = Args::parse_from([
            "hockeyapp-deploy",
            "--apk-path",
            "app.apk",
            "--api-token",
            "secret",
            "--app-id",
            "abc123",
            "--mandatory",
            "true",
            "--notes",
            "First build",
        ]);
        let config = DeployConfig::from(args);

        assert_eq!(config.apk_path, "app.apk");
        assert_eq!(config.api_token, "secret");
        assert_eq!(config.app_id, "abc123");
        assert_eq!(config.fields.mandatory, "1");
        assert_eq!(config.fields.notes, "First build");
    }

    #[test]
    fn test_load_rejects_unknown_flag() {
        let err = load(["hockeyapp-deploy", "--no-such-input", "x"]).unwrap_err();
        match err {
            DeployError::Arguments(e) => assert!(e.use_stderr()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_load_rejects_non_utf8_input() {
        use std::os::unix::ffi::OsStringExt;

        let apk_path = OsString::from_vec(vec![b'a', b'p', 0x80, b'k']);
        let err = load([
            OsString::from("hockeyapp-deploy"),
            OsString::from("--apk-path"),
            apk_path,
        ])
        .unwrap_err();
        assert!(matches!(err, DeployError::Arguments(_)));
    }

    #[test]
    fn test_load_help_is_not_a_failure() {
        let err = load(["hockeyapp-deploy", "--help"]).unwrap_err();
        match err {
            DeployError::Arguments(e) => assert!(!e.use_stderr()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_field_order_is_stable() {
        let fields = UploadFields::default();
        let names: Vec<_> = fields.pairs().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "notes",
                "notes_type",
                "notify",
                "status",
                "mandatory",
                "tags",
                "commit_sha",
                "build_server_url",
                "repository_url",
            ]
        );
    }
}
