use crate::contact::{ContactRelay, EMAILJS_ENDPOINT};
use crate::github::{API_BASE_URL, MAX_PAGE_SIZE};
use crate::server::FeedSettings;
use clap::Parser;
use std::ops::RangeInclusive;

/// Page sizes the upstream listing accepts; anything else fails at startup.
const PAGE_SIZE_RANGE: RangeInclusive<u64> = 1..=MAX_PAGE_SIZE as u64;

#[derive(Parser, Debug, Clone)]
#[command(name = "portfolio-server")]
#[command(about = "Portfolio Server - Project catalog, live GitHub feed and contact relay")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "PORTFOLIO_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORTFOLIO_PORT", default_value_t = 8080)]
    pub port: u16,

    /// GitHub account whose repositories are listed
    #[arg(long, env = "GITHUB_ACCOUNT", default_value = "uranbileguka")]
    pub github_account: String,

    /// GitHub REST API root
    #[arg(long, env = "GITHUB_API_URL", default_value = API_BASE_URL)]
    pub github_api_url: String,

    /// Repositories requested for the home page (1-100)
    #[arg(
        long,
        env = "HOME_PAGE_SIZE",
        default_value_t = 100,
        value_parser = clap::value_parser!(u64).range(PAGE_SIZE_RANGE)
    )]
    pub home_page_size: u64,

    /// Repositories requested for the current projects page (1-100)
    #[arg(
        long,
        env = "CURRENT_PAGE_SIZE",
        default_value_t = 6,
        value_parser = clap::value_parser!(u64).range(PAGE_SIZE_RANGE)
    )]
    pub current_page_size: u64,

    /// EmailJS service id
    #[arg(long, env = "EMAILJS_SERVICE_ID")]
    pub emailjs_service_id: Option<String>,

    /// EmailJS template id
    #[arg(long, env = "EMAILJS_TEMPLATE_ID")]
    pub emailjs_template_id: Option<String>,

    /// EmailJS public key
    #[arg(long, env = "EMAILJS_PUBLIC_KEY")]
    pub emailjs_public_key: Option<String>,

    /// EmailJS send endpoint
    #[arg(long, env = "EMAILJS_ENDPOINT", default_value = EMAILJS_ENDPOINT)]
    pub emailjs_endpoint: String,
}

impl Cli {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn feed_settings(&self) -> FeedSettings {
        FeedSettings {
            account: self.github_account.clone(),
            home_page_size: self.home_page_size as usize,
            current_page_size: self.current_page_size as usize,
        }
    }

    pub fn contact_relay(&self) -> ContactRelay {
        ContactRelay::from_config(
            &self.emailjs_endpoint,
            self.emailjs_service_id.as_deref(),
            self.emailjs_template_id.as_deref(),
            self.emailjs_public_key.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["portfolio-server"]).unwrap();
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.home_page_size, 100);
        assert_eq!(cli.current_page_size, 6);
        assert_eq!(cli.github_api_url, API_BASE_URL);
    }

    #[test]
    fn test_emailjs_flags_enable_relay() {
        let cli = Cli::try_parse_from([
            "portfolio-server",
            "--emailjs-service-id",
            "svc",
            "--emailjs-template-id",
            "tpl",
            "--emailjs-public-key",
            "key",
        ])
        .unwrap();
        assert!(cli.contact_relay().is_enabled());
    }

    #[test]
    fn test_page_size_out_of_range_is_rejected() {
        for args in [
            ["portfolio-server", "--home-page-size", "0"],
            ["portfolio-server", "--current-page-size", "500"],
            ["portfolio-server", "--home-page-size", "101"],
        ] {
            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn test_page_size_bounds_accepted() {
        let cli = Cli::try_parse_from([
            "portfolio-server",
            "--home-page-size",
            "1",
            "--current-page-size",
            "100",
        ])
        .unwrap();
        let feeds = cli.feed_settings();
        assert_eq!(feeds.home_page_size, 1);
        assert_eq!(feeds.current_page_size, 100);
    }
}
