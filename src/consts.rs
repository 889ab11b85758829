pub const fn get_user_agent() -> &'static str {
    concat!("hockeyapp-deploy ", env!("CARGO_PKG_VERSION"))
}

pub const TICK_STRING: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";

pub const HOCKEYAPP_API_HOST: &str = "https://rink.hockeyapp.net";
pub const HOCKEYAPP_API_HOST_ENV: &str = "HOCKEYAPP_API_HOST";
pub const HOCKEYAPP_TOKEN_HEADER: &str = "X-HockeyAppToken";

pub const DEPLOY_STATUS_KEY: &str = "HOCKEYAPP_DEPLOY_STATUS";
pub const DEPLOY_PUBLIC_URL_KEY: &str = "HOCKEYAPP_DEPLOY_PUBLIC_URL";
pub const DEPLOY_BUILD_URL_KEY: &str = "HOCKEYAPP_DEPLOY_BUILD_URL";
pub const DEPLOY_CONFIG_URL_KEY: &str = "HOCKEYAPP_DEPLOY_CONFIG_URL";

pub const DEPLOY_STATUS_SUCCESS: &str = "success";
pub const DEPLOY_STATUS_FAILED: &str = "failed";

pub const BINARY_FIELD: &str = "ipa";
pub const MAPPING_FIELD: &str = "dsym";
