use super::*;

/// Options with every field set to a non-default value.
fn explicit_options() -> Options {
    Options {
        host_address: "127.0.0.1".to_string(),
        port_number: 2525,
        log_to_stdout: true,
        log_server_activity: true,
        is_cmd_fail_fast: true,
        session_timeout: 120,
        msg_greeting: "220 hi".to_string(),
        msg_invalid_cmd: "500 what".to_string(),
        msg_quit_cmd: "221 bye".to_string(),
        msg_invalid_cmd_helo_sequence: "503 helo seq".to_string(),
        msg_invalid_cmd_helo_arg: "501 helo arg".to_string(),
        msg_helo_blacklisted_domain: "550 helo blocked".to_string(),
        msg_helo_received: "250 helo ok".to_string(),
        msg_invalid_cmd_mailfrom_sequence: "503 from seq".to_string(),
        msg_invalid_cmd_mailfrom_arg: "501 from arg".to_string(),
        msg_mailfrom_blacklisted_email: "550 from blocked".to_string(),
        msg_mailfrom_received: "250 from ok".to_string(),
        msg_invalid_cmd_rcptto_sequence: "503 rcpt seq".to_string(),
        msg_invalid_cmd_rcptto_arg: "501 rcpt arg".to_string(),
        msg_rcptto_not_registered_email: "550 rcpt unknown".to_string(),
        msg_rcptto_blacklisted_email: "550 rcpt blocked".to_string(),
        msg_rcptto_received: "250 rcpt ok".to_string(),
        msg_invalid_cmd_data_sequence: "503 data seq".to_string(),
        msg_data_received: "354 go".to_string(),
        msg_size_limit: 512,
        msg_msg_size_is_too_big: "552 too big".to_string(),
        msg_msg_received: "250 msg ok".to_string(),
        blacklisted_helo_domains: vec!["spam.test".to_string()],
        blacklisted_mailfrom_emails: vec!["a@spam.test".to_string()],
        blacklisted_rcptto_emails: vec!["b@spam.test".to_string()],
        not_registered_emails: vec!["c@example.test".to_string()],
    }
}

mod server_phase {
    use super::*;

    #[test]
    fn fills_unset_fields() {
        let mut options = Options::default();

        let applied = fill_server_defaults(&mut options);

        assert_eq!(applied, 5);
        assert_eq!(options.host_address, defaults::HOST_ADDRESS);
        assert_eq!(options.msg_greeting, defaults::GREETING_MSG);
        assert_eq!(options.msg_invalid_cmd, defaults::INVALID_CMD_MSG);
        assert_eq!(options.msg_quit_cmd, defaults::QUIT_MSG);
        assert_eq!(options.session_timeout, defaults::SESSION_TIMEOUT_SECS);
    }

    #[test]
    fn leaves_port_and_flags_alone() {
        let mut options = Options::default();

        fill_server_defaults(&mut options);

        assert_eq!(options.port_number, 0);
        assert!(!options.log_to_stdout);
        assert!(!options.log_server_activity);
        assert!(!options.is_cmd_fail_fast);
    }

    #[test]
    fn does_not_touch_other_phases() {
        let mut options = Options::default();

        fill_server_defaults(&mut options);

        assert!(options.msg_helo_received.is_empty());
        assert!(options.msg_msg_size_is_too_big.is_empty());
        assert_eq!(options.msg_size_limit, 0);
    }
}

mod helo_phase {
    use super::*;

    #[test]
    fn fills_unset_fields() {
        let mut options = Options::default();

        let applied = fill_helo_defaults(&mut options);

        assert_eq!(applied, 4);
        assert_eq!(
            options.msg_invalid_cmd_helo_sequence,
            defaults::INVALID_CMD_HELO_SEQUENCE_MSG
        );
        assert_eq!(options.msg_invalid_cmd_helo_arg, defaults::INVALID_CMD_HELO_ARG_MSG);
        assert_eq!(options.msg_helo_blacklisted_domain, defaults::QUIT_MSG);
        assert_eq!(options.msg_helo_received, defaults::RECEIVED_MSG);
    }

    #[test]
    fn only_touches_helo_fields() {
        let mut options = Options::default();

        fill_helo_defaults(&mut options);

        let mut expected = Options::default();
        expected
            .msg_invalid_cmd_helo_sequence
            .clone_from(&options.msg_invalid_cmd_helo_sequence);
        expected
            .msg_invalid_cmd_helo_arg
            .clone_from(&options.msg_invalid_cmd_helo_arg);
        expected
            .msg_helo_blacklisted_domain
            .clone_from(&options.msg_helo_blacklisted_domain);
        expected.msg_helo_received.clone_from(&options.msg_helo_received);
        assert_eq!(options, expected);
    }
}

mod mailfrom_phase {
    use super::*;

    #[test]
    fn fills_unset_fields() {
        let mut options = Options::default();

        let applied = fill_mailfrom_defaults(&mut options);

        assert_eq!(applied, 4);
        assert_eq!(
            options.msg_invalid_cmd_mailfrom_sequence,
            defaults::INVALID_CMD_MAILFROM_SEQUENCE_MSG
        );
        assert_eq!(
            options.msg_invalid_cmd_mailfrom_arg,
            defaults::INVALID_CMD_MAILFROM_ARG_MSG
        );
        assert_eq!(options.msg_mailfrom_blacklisted_email, defaults::QUIT_MSG);
        assert_eq!(options.msg_mailfrom_received, defaults::RECEIVED_MSG);
    }
}

mod rcptto_phase {
    use super::*;

    #[test]
    fn fills_unset_fields() {
        let mut options = Options::default();

        let applied = fill_rcptto_defaults(&mut options);

        assert_eq!(applied, 5);
        assert_eq!(
            options.msg_invalid_cmd_rcptto_sequence,
            defaults::INVALID_CMD_RCPTTO_SEQUENCE_MSG
        );
        assert_eq!(
            options.msg_invalid_cmd_rcptto_arg,
            defaults::INVALID_CMD_RCPTTO_ARG_MSG
        );
        assert_eq!(options.msg_rcptto_blacklisted_email, defaults::QUIT_MSG);
        assert_eq!(
            options.msg_rcptto_not_registered_email,
            defaults::NOT_REGISTERED_RCPTTO_EMAIL_MSG
        );
        assert_eq!(options.msg_rcptto_received, defaults::RECEIVED_MSG);
    }

    #[test]
    fn lists_stay_empty() {
        let mut options = Options::default();

        fill_rcptto_defaults(&mut options);

        assert!(options.blacklisted_rcptto_emails.is_empty());
        assert!(options.not_registered_emails.is_empty());
    }
}

mod data_phase {
    use super::*;

    #[test]
    fn fills_unset_fields() {
        let mut options = Options::default();

        let applied = fill_data_defaults(&mut options);

        assert_eq!(applied, 2);
        assert_eq!(
            options.msg_invalid_cmd_data_sequence,
            defaults::INVALID_CMD_DATA_SEQUENCE_MSG
        );
        assert_eq!(options.msg_data_received, defaults::READY_FOR_RECEIVE_MSG);
    }
}

mod message_phase {
    use super::*;

    #[test]
    fn too_big_text_embeds_default_limit() {
        let mut options = Options::default();

        let applied = fill_message_defaults(&mut options);

        assert_eq!(applied, 3);
        assert_eq!(options.msg_size_limit, defaults::MESSAGE_SIZE_LIMIT);
        assert_eq!(
            options.msg_msg_size_is_too_big,
            "552 Message exceeded max size of 10485760 bytes"
        );
        assert_eq!(options.msg_msg_received, defaults::RECEIVED_MSG);
    }

    #[test]
    fn too_big_text_embeds_explicit_limit() {
        let mut options = Options {
            msg_size_limit: 2048,
            ..Options::default()
        };

        let applied = fill_message_defaults(&mut options);

        assert_eq!(applied, 2);
        assert_eq!(options.msg_size_limit, 2048);
        assert_eq!(
            options.msg_msg_size_is_too_big,
            "552 Message exceeded max size of 2048 bytes"
        );
    }

    #[test]
    fn negative_limit_passes_through() {
        let mut options = Options {
            msg_size_limit: -1,
            ..Options::default()
        };

        fill_message_defaults(&mut options);

        assert_eq!(options.msg_size_limit, -1);
        assert_eq!(
            options.msg_msg_size_is_too_big,
            "552 Message exceeded max size of -1 bytes"
        );
    }

    #[test]
    fn explicit_too_big_text_is_kept() {
        let mut options = Options {
            msg_msg_size_is_too_big: "552 nope".to_string(),
            ..Options::default()
        };

        fill_message_defaults(&mut options);

        assert_eq!(options.msg_msg_size_is_too_big, "552 nope");
        assert_eq!(options.msg_size_limit, defaults::MESSAGE_SIZE_LIMIT);
    }
}

mod full_resolution {
    use super::*;

    #[test]
    fn explicit_values_are_untouched() {
        let options = explicit_options();

        assert_eq!(resolve(options.clone()), options);
    }

    #[test]
    fn is_idempotent() {
        let once = resolve(Options::default());
        let twice = resolve(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn is_idempotent_with_partial_input() {
        let partial = Options {
            msg_size_limit: 100,
            msg_helo_received: "250 hey".to_string(),
            blacklisted_helo_domains: vec!["evil.test".to_string()],
            ..Options::default()
        };

        let once = resolve(partial);
        let twice = resolve(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn no_text_left_empty() {
        let options = resolve(Options::default());

        let texts = [
            &options.host_address,
            &options.msg_greeting,
            &options.msg_invalid_cmd,
            &options.msg_quit_cmd,
            &options.msg_invalid_cmd_helo_sequence,
            &options.msg_invalid_cmd_helo_arg,
            &options.msg_helo_blacklisted_domain,
            &options.msg_helo_received,
            &options.msg_invalid_cmd_mailfrom_sequence,
            &options.msg_invalid_cmd_mailfrom_arg,
            &options.msg_mailfrom_blacklisted_email,
            &options.msg_mailfrom_received,
            &options.msg_invalid_cmd_rcptto_sequence,
            &options.msg_invalid_cmd_rcptto_arg,
            &options.msg_rcptto_not_registered_email,
            &options.msg_rcptto_blacklisted_email,
            &options.msg_rcptto_received,
            &options.msg_invalid_cmd_data_sequence,
            &options.msg_data_received,
            &options.msg_msg_size_is_too_big,
            &options.msg_msg_received,
        ];

        assert!(texts.iter().all(|text| !text.is_empty()));
    }

    #[test]
    fn phase_order_does_not_matter() {
        let fillers: [fn(&mut Options) -> usize; 6] = [
            fill_server_defaults,
            fill_helo_defaults,
            fill_mailfrom_defaults,
            fill_rcptto_defaults,
            fill_data_defaults,
            fill_message_defaults,
        ];

        let mut reversed = Options::default();
        for fill in fillers.iter().rev() {
            fill(&mut reversed);
        }

        assert_eq!(reversed, resolve(Options::default()));
    }
}

mod fill_helpers {
    use super::*;

    #[test]
    fn fill_text_only_replaces_empty() {
        let mut empty = String::new();
        let mut set = "x".to_string();

        assert!(fill_text(&mut empty, "d"));
        assert!(!fill_text(&mut set, "d"));
        assert_eq!(empty, "d");
        assert_eq!(set, "x");
    }

    #[test]
    fn fill_number_only_replaces_zero() {
        let mut zero = 0;
        let mut negative = -5;

        assert!(fill_number(&mut zero, 7));
        assert!(!fill_number(&mut negative, 7));
        assert_eq!(zero, 7);
        assert_eq!(negative, -5);
    }
}
