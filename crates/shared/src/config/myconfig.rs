use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct PaystackConfig {
    pub secret_key: String,
    pub base_url: String,
}

/// Tax and shipping policy shared by the cart preview and order creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    pub tax_rate_bps: i64,
    pub shipping_fee: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate_bps: 500,
            shipping_fee: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub frontend_url: String,
    pub admin_url: String,
    pub paystack: PaystackConfig,
    pub firebase_project_id: Option<String>,
    pub upload_dir: String,
    pub pricing: PricingConfig,
    pub allow_admin_registration: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = parse_bool("RUN_MIGRATIONS", &run_migrations_str)?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let frontend_url =
            std::env::var("FRONTEND_URL").context("Missing environment variable: FRONTEND_URL")?;
        let admin_url =
            std::env::var("ADMIN_URL").context("Missing environment variable: ADMIN_URL")?;

        let paystack = PaystackConfig {
            secret_key: std::env::var("PAYSTACK_SECRET_KEY")
                .context("Missing environment variable: PAYSTACK_SECRET_KEY")?,
            base_url: std::env::var("PAYSTACK_BASE_URL")
                .unwrap_or_else(|_| "https://api.paystack.co".to_string()),
        };

        let firebase_project_id = std::env::var("FIREBASE_PROJECT_ID")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());

        let defaults = PricingConfig::default();

        let tax_rate_bps = match std::env::var("TAX_RATE_BPS") {
            Ok(v) => v
                .parse::<i64>()
                .context("TAX_RATE_BPS must be a valid integer")?,
            Err(_) => defaults.tax_rate_bps,
        };

        let shipping_fee = match std::env::var("SHIPPING_FEE") {
            Ok(v) => v
                .parse::<i64>()
                .context("SHIPPING_FEE must be a valid integer")?,
            Err(_) => defaults.shipping_fee,
        };

        if !(0..=10_000).contains(&tax_rate_bps) {
            return Err(anyhow!(
                "TAX_RATE_BPS must be between 0 and 10000, got {}",
                tax_rate_bps
            ));
        }

        if shipping_fee < 0 {
            return Err(anyhow!("SHIPPING_FEE cannot be negative"));
        }

        let allow_admin_registration = match std::env::var("ALLOW_ADMIN_REGISTRATION") {
            Ok(v) => parse_bool("ALLOW_ADMIN_REGISTRATION", &v)?,
            Err(_) => false,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            run_migrations,
            port,
            frontend_url: frontend_url.trim_end_matches('/').to_string(),
            admin_url: admin_url.trim_end_matches('/').to_string(),
            paystack,
            firebase_project_id,
            upload_dir,
            pricing: PricingConfig {
                tax_rate_bps,
                shipping_fee,
            },
            allow_admin_registration,
        })
    }

    pub fn payment_callback_url(&self) -> String {
        format!("{}/orders/verify", self.frontend_url)
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!(
            "{} must be 'true' or 'false', got '{}'",
            name,
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_boolean_flags() {
        assert!(parse_bool("RUN_MIGRATIONS", "true").unwrap());
        assert!(!parse_bool("RUN_MIGRATIONS", "false").unwrap());
        assert!(parse_bool("RUN_MIGRATIONS", "yes").is_err());
    }
}
