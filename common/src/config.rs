use once_cell::sync::OnceCell;
use std::env;

/// Runtime configuration loaded once from environment variables.
///
/// The admin bootstrap pair (`ADMIN_EMAIL`, `ADMIN_BOOTSTRAP_SECRET`) is
/// deliberately configuration rather than a constant: it gates both
/// admin registration and the lazy admin login bootstrap, and must never
/// be embedded in handler logic.
#[derive(Debug)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    /// Required suffix for all non-bootstrap registration emails.
    pub email_domain: String,
    /// The single privileged account address.
    pub admin_email: String,
    /// Literal secret that triggers the admin bootstrap login branch.
    pub admin_bootstrap_secret: String,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(|| {
            let project_name =
                env::var("PROJECT_NAME").unwrap_or_else(|_| "fixtrack-api".into());
            let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into());
            let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into());
            let log_to_stdout =
                env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true";
            let database_path = env::var("DATABASE_PATH").expect("DATABASE_PATH must be set");
            let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
            let port = env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000);
            let email_domain =
                env::var("EMAIL_DOMAIN").unwrap_or_else(|_| "@cmrcet.ac.in".into());
            let admin_email = env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");
            let admin_bootstrap_secret =
                env::var("ADMIN_BOOTSTRAP_SECRET").expect("ADMIN_BOOTSTRAP_SECRET must be set");

            Config {
                project_name,
                log_level,
                log_file,
                log_to_stdout,
                database_path,
                host,
                port,
                email_domain,
                admin_email,
                admin_bootstrap_secret,
            }
        })
    }

    pub fn get() -> &'static Self {
        CONFIG.get().expect("Config not initialized")
    }
}
