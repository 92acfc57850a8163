use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    pub admin_password: String,
    pub linkedin_profile_url: Option<String>,
    //backing store
    pub sheet_api_base: String,
    pub sheet_api_token: String,
    pub sheet_id: String,
    pub sheet_tab: String,
    pub sheet_gid: i64,
    //object store
    pub s3_endpoint: String,
    pub s3_region: String,
    pub s3_bucket: String,
    pub s3_public_url: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "hr-intake")?
            .set_default("listen_port", "8000")?
            .set_default("sheet_api_base", "https://sheets.googleapis.com")?
            .set_default("sheet_tab", "Candidates")?
            .set_default("s3_region", "us-east-1")?
            .add_source(Environment::default())
            .build()?;
        let s: Settings = conf.try_deserialize()?;
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
