pub const SESSION_COOKIE_NAME: &str = "session_token";

pub mod env {
    pub const ENV_PREFIX: &str = "WARDEN";
    pub const ENV_SEPARATOR: &str = "__";
}

pub mod files {
    /// Base name of the optional settings file; the extension picks the format.
    pub const SETTINGS_FILE: &str = "config/warden";
}

pub mod prod {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 3000;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
