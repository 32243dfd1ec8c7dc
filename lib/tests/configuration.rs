#[cfg(test)]
mod test {
    use batch_mailer::dispatcher_resources::DispatcherResources;
    use batch_mailer::mailer_config::{MailerConfig, DEFAULT_MAIL_API_URL};
    use serial_test::serial;
    use std::env;
    use std::time::Duration;

    const VARIABLES: [&str; 6] = [
        "MAIL_API_URL",
        "MAIL_API_KEY",
        "MAIL_FROM",
        "DISPATCH_WINDOW_SIZE",
        "DISPATCH_PAUSE_IN_MILLIS",
        "HTTP_TIMEOUT_IN_MILLIS",
    ];

    fn clear() {
        for variable in VARIABLES {
            env::remove_var(variable);
        }
    }

    #[test]
    #[serial]
    fn should_load_mailer_config_with_default_url() {
        clear();
        env::set_var("MAIL_API_KEY", "re_secret");
        env::set_var("MAIL_FROM", " reports@example.com ");

        let config = MailerConfig::from_env().unwrap();

        assert_eq!(DEFAULT_MAIL_API_URL, config.api_url);
        assert_eq!("re_secret", config.api_key);
        assert_eq!("reports@example.com", config.from.as_str());
        assert!(!format!("{config:?}").contains("re_secret"));
    }

    #[test]
    #[serial]
    fn should_strip_trailing_slash_from_api_url() {
        clear();
        env::set_var("MAIL_API_URL", "http://localhost:8025/");
        env::set_var("MAIL_API_KEY", "key");
        env::set_var("MAIL_FROM", "reports@example.com");

        let config = MailerConfig::from_env().unwrap();

        assert_eq!("http://localhost:8025", config.api_url);
    }

    #[test]
    #[serial]
    fn should_fail_without_api_key() {
        clear();
        env::set_var("MAIL_FROM", "reports@example.com");

        let error = MailerConfig::from_env().unwrap_err();

        assert!(error.is_fatal());
        assert!(error.cause.contains("MAIL_API_KEY"));
    }

    #[test]
    #[serial]
    fn should_fail_with_malformed_sender() {
        clear();
        env::set_var("MAIL_API_KEY", "key");
        env::set_var("MAIL_FROM", "reports at example.com");

        let error = MailerConfig::from_env().unwrap_err();

        assert!(error.is_fatal());
    }

    #[test]
    #[serial]
    fn should_load_dispatcher_defaults() {
        clear();

        let resources = DispatcherResources::from_env().unwrap();

        assert_eq!(50, resources.window_size());
        assert_eq!(Duration::from_millis(1000), resources.pause());
        assert_eq!(3000, resources.http_timeout_in_millis());
    }

    #[test]
    #[serial]
    fn should_load_dispatcher_overrides() {
        clear();
        env::set_var("DISPATCH_WINDOW_SIZE", "10");
        env::set_var("DISPATCH_PAUSE_IN_MILLIS", "250");
        env::set_var("HTTP_TIMEOUT_IN_MILLIS", "500");

        let resources = DispatcherResources::from_env().unwrap();

        assert_eq!(10, resources.window_size());
        assert_eq!(Duration::from_millis(250), resources.pause());
        assert_eq!(500, resources.http_timeout_in_millis());
    }

    #[test]
    #[serial]
    fn should_reject_unparseable_window_size() {
        clear();
        env::set_var("DISPATCH_WINDOW_SIZE", "fifty");

        let error = DispatcherResources::from_env().unwrap_err();

        assert!(error.is_fatal());
        assert!(error.cause.contains("DISPATCH_WINDOW_SIZE"));
    }

    #[test]
    #[serial]
    fn should_fail_with_malformed_api_url() {
        for api_url in ["not a url", "", "ftp://mail.example.com", "mailto:reports@example.com"] {
            clear();
            env::set_var("MAIL_API_URL", api_url);
            env::set_var("MAIL_API_KEY", "key");
            env::set_var("MAIL_FROM", "reports@example.com");

            let error = MailerConfig::from_env().unwrap_err();

            assert!(error.is_fatal(), "{api_url:?} should be rejected");
            assert_eq!(Some("Failed to load configuration, MAIL_API_URL is malformed".to_string()), error.message);
        }
    }

    #[test]
    #[serial]
    fn should_reject_zero_http_timeout() {
        clear();
        env::set_var("HTTP_TIMEOUT_IN_MILLIS", "0");

        let error = DispatcherResources::from_env().unwrap_err();

        assert!(error.is_fatal());
        assert!(error.cause.contains("HTTP_TIMEOUT_IN_MILLIS"));
    }

    #[test]
    #[serial]
    fn should_not_read_env_for_values_already_set() {
        clear();
        env::set_var("DISPATCH_WINDOW_SIZE", "fifty");
        env::set_var("DISPATCH_PAUSE_IN_MILLIS", "250");

        let resources = DispatcherResources::new().with_window_size(5).fill_from_env().unwrap();

        assert_eq!(5, resources.window_size());
        assert_eq!(Duration::from_millis(250), resources.pause());
        assert_eq!(3000, resources.http_timeout_in_millis());
    }
}
