pub mod env {
    pub const ENV_PREFIX: &str = "APP";
    pub const ENV_SEPARATOR: &str = "__";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "ALLOWED_ORIGINS";
}

pub const SETTINGS_FILE: &str = "config/settings";

pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 3000;
    pub const MAX_DB_CONNECTIONS: u32 = 5;
    pub const JWT_TIME_TO_LIVE_SECONDS: i64 = 3600;
    pub const JWT_ISSUER: &str = "expense-tracker";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
