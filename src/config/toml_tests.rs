//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [webhook]
            url = "https://jsonplaceholder.typicode.com/posts"
            method = "POST"
            content_type = "application/json"
            body = '{"rundeck": "success"}'

            [notification]
            trigger = "start"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let webhook = &config.webhook;

        assert_eq!(
            webhook.url.as_deref(),
            Some("https://jsonplaceholder.typicode.com/posts")
        );
        assert_eq!(webhook.method.as_deref(), Some("POST"));
        assert_eq!(webhook.content_type.as_deref(), Some("application/json"));
        assert_eq!(webhook.body.as_deref(), Some(r#"{"rundeck": "success"}"#));
        assert!(webhook.body_file.is_none());
        assert_eq!(config.notification.trigger.as_deref(), Some("start"));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.webhook.url.is_none());
        assert!(config.notification.trigger.is_none());
    }

    #[test]
    fn parse_body_file() {
        let config = TomlConfig::parse(
            r#"
            [webhook]
            body_file = "payload.json"
        "#,
        )
        .unwrap();

        assert_eq!(
            config.webhook.body_file.as_deref(),
            Some(std::path::Path::new("payload.json"))
        );
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = TomlConfig::parse(
            r#"
            [webhook]
            retries = 3
        "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(TomlConfig::parse("[retry]\nmax_attempts = 3\n").is_err());
    }

    #[test]
    fn invalid_syntax_is_rejected() {
        assert!(TomlConfig::parse("[webhook\nurl = ").is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        // Everything is commented out in the template
        assert!(config.webhook.url.is_none());
        assert!(config.webhook.method.is_none());
    }

    #[test]
    fn default_template_mentions_every_field() {
        let template = default_config_template();

        for key in ["url", "method", "content_type", "body", "body_file", "trigger"] {
            assert!(template.contains(key), "template missing {key}");
        }
    }
}

mod loading {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[webhook]\nurl = \"https://example.com\"").unwrap();

        let config = TomlConfig::load(file.path()).unwrap();

        assert_eq!(config.webhook.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn load_missing_file_returns_file_read_error() {
        let result = TomlConfig::load(std::path::Path::new("/nonexistent/notify.toml"));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }
}
