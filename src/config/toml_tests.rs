//! Tests for TOML options file parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.server.host_address.is_none());
        assert!(config.server.port_number.is_none());
        assert!(!config.server.is_cmd_fail_fast);
        assert!(config.helo.blacklisted_domains.is_none());
        assert!(config.message.size_limit.is_none());
    }

    #[test]
    fn parse_server_section() {
        let toml = r#"
            [server]
            host_address = "127.0.0.1"
            port_number = 2525
            log_to_stdout = true
            is_cmd_fail_fast = true
            session_timeout = 60
            msg_greeting = "220 mock"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let server = &config.server;

        assert_eq!(server.host_address.as_deref(), Some("127.0.0.1"));
        assert_eq!(server.port_number, Some(2525));
        assert!(server.log_to_stdout);
        assert!(!server.log_server_activity);
        assert!(server.is_cmd_fail_fast);
        assert_eq!(server.session_timeout, Some(60));
        assert_eq!(server.msg_greeting.as_deref(), Some("220 mock"));
        assert!(server.msg_quit_cmd.is_none());
    }

    #[test]
    fn parse_phase_sections() {
        let toml = r#"
            [helo]
            msg_received = "250 hello"
            blacklisted_domains = ["spam.test", "evil.test"]

            [mailfrom]
            blacklisted_emails = ["bad@spam.test"]

            [rcptto]
            msg_not_registered_email = "550 no such user"
            not_registered_emails = ["ghost@example.test"]

            [data]
            msg_received = "354 send it"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.helo.msg_received.as_deref(), Some("250 hello"));
        assert_eq!(
            config.helo.blacklisted_domains,
            Some(vec!["spam.test".to_string(), "evil.test".to_string()])
        );
        assert_eq!(
            config.mailfrom.blacklisted_emails,
            Some(vec!["bad@spam.test".to_string()])
        );
        assert_eq!(
            config.rcptto.msg_not_registered_email.as_deref(),
            Some("550 no such user")
        );
        assert_eq!(
            config.rcptto.not_registered_emails,
            Some(vec!["ghost@example.test".to_string()])
        );
        assert!(config.rcptto.blacklisted_emails.is_none());
        assert_eq!(config.data.msg_received.as_deref(), Some("354 send it"));
    }

    #[test]
    fn parse_message_section() {
        let toml = r#"
            [message]
            size_limit = 1024
            msg_size_is_too_big = "552 too large"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.message.size_limit, Some(1024));
        assert_eq!(
            config.message.msg_size_is_too_big.as_deref(),
            Some("552 too large")
        );
    }

    #[test]
    fn size_limit_accepts_legacy_alias() {
        let toml = r"
            [message]
            msq_size_limit = 2048
        ";

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.message.size_limit, Some(2048));
    }

    #[test]
    fn negative_size_limit_is_accepted() {
        let config = TomlConfig::parse("[message]\nsize_limit = -1").unwrap();

        assert_eq!(config.message.size_limit, Some(-1));
    }
}

mod errors {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
            [server]
            hostname = "localhost"
        "#;

        let result = TomlConfig::parse(toml);

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[auth]\nuser = \"x\"");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = TomlConfig::parse("[server]\nport_number = \"twenty\"");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let result = TomlConfig::parse("[server]\nport_number = 70000");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert!(config.server.host_address.is_none());
        assert!(config.message.size_limit.is_none());
    }

    #[test]
    fn template_mentions_every_section() {
        let template = default_config_template();

        for section in [
            "[server]",
            "[helo]",
            "[mailfrom]",
            "[rcptto]",
            "[data]",
            "[message]",
        ] {
            assert!(template.contains(section), "missing {section}");
        }
    }

    #[test]
    fn uncommented_template_parses() {
        let uncommented = default_config_template()
            .lines()
            .map(|line| match line.strip_prefix("# ") {
                Some(setting) if setting.contains(" = ") => setting,
                _ => line,
            })
            .collect::<Vec<_>>()
            .join("\n");

        let config = TomlConfig::parse(&uncommented).unwrap();

        assert_eq!(config.server.port_number, Some(2525));
        assert_eq!(config.message.size_limit, Some(10_485_760));
        assert_eq!(
            config.helo.blacklisted_domains,
            Some(vec!["spam.test".to_string()])
        );
    }
}
