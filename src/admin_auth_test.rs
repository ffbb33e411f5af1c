use super::*;

fn auth() -> AdminAuth {
    AdminAuth::new("correct horse battery staple").expect("password configured")
}

mod new {
    use super::*;

    #[test]
    fn when_password_empty_should_return_error() {
        // Arrange & Act
        let result = AdminAuth::new("");

        // Assert
        assert_eq!(result.err(), Some(AdminAuthError::MissingPassword));
    }

    #[test]
    fn when_debug_formatted_should_hide_password() {
        // Arrange & Act
        let rendered = format!("{:?}", auth());

        // Assert
        assert!(!rendered.contains("horse"));
    }
}

mod authenticate {
    use super::*;

    #[test]
    fn when_password_matches_should_grant() {
        // Arrange
        let body = br#"{"password":"correct horse battery staple"}"#;

        // Act
        let outcome = auth().authenticate(body);

        // Assert
        assert_eq!(outcome, AuthOutcome::Granted);
        assert_eq!(outcome.status(), 200);
        assert_eq!(
            serde_json::to_string(&outcome.body()).expect("serializable"),
            r#"{"success":true}"#
        );
    }

    #[test]
    fn when_password_differs_should_deny() {
        // Arrange
        let body = br#"{"password":"tr0ub4dor&3"}"#;

        // Act
        let outcome = auth().authenticate(body);

        // Assert
        assert_eq!(outcome, AuthOutcome::Denied);
        assert_eq!(outcome.status(), 401);
        assert_eq!(
            serde_json::to_string(&outcome.body()).expect("serializable"),
            r#"{"error":"Invalid password"}"#
        );
    }

    #[test]
    fn when_password_prefix_only_should_deny() {
        // Arrange
        let body = br#"{"password":"correct horse"}"#;

        // Act & Assert
        assert_eq!(auth().authenticate(body), AuthOutcome::Denied);
    }

    #[test]
    fn when_password_missing_should_deny() {
        // Arrange & Act
        let outcome = auth().authenticate(br#"{"user":"admin"}"#);

        // Assert
        assert_eq!(outcome, AuthOutcome::Denied);
    }

    #[test]
    fn when_password_not_a_string_should_deny() {
        // Arrange & Act
        let outcome = auth().authenticate(br#"{"password":12345}"#);

        // Assert
        assert_eq!(outcome, AuthOutcome::Denied);
    }

    #[test]
    fn when_body_not_json_should_fail() {
        // Arrange & Act
        let outcome = auth().authenticate(b"password=hunter2");

        // Assert
        assert_eq!(outcome, AuthOutcome::Failed);
        assert_eq!(outcome.status(), 500);
        assert_eq!(
            serde_json::to_string(&outcome.body()).expect("serializable"),
            r#"{"error":"Authentication failed"}"#
        );
    }

    #[test]
    fn when_body_null_should_fail() {
        // Arrange & Act
        let outcome = auth().authenticate(b"null");

        // Assert
        assert_eq!(outcome, AuthOutcome::Failed);
    }

    #[test]
    fn when_body_empty_should_fail() {
        // Arrange & Act
        let outcome = auth().authenticate(b"");

        // Assert
        assert_eq!(outcome, AuthOutcome::Failed);
    }
}
