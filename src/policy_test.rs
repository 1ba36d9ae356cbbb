use super::*;
use crate::constants::method;

mod builder {
    use super::*;

    #[test]
    fn when_constructed_should_allow_nothing_by_default() {
        // Arrange & Act
        let policy = ResourcePolicy::builder().build();

        // Assert
        assert_eq!(policy.origins, AllowedOrigins::default());
        assert!(policy.methods.is_empty());
        assert!(policy.headers.is_empty());
        assert!(!policy.credentials);
    }

    #[test]
    fn when_fields_set_should_carry_every_value() {
        // Arrange & Act
        let policy = ResourcePolicy::builder()
            .origins(["http://a.com"])
            .methods([method::GET])
            .headers(["X-Test"])
            .credentials(true)
            .build();

        // Assert
        assert_eq!(policy.origins.values(), &["http://a.com".to_string()]);
        assert!(policy.methods.allows_method(method::GET));
        assert!(policy.headers.allows_header("x-test"));
        assert!(policy.credentials);
    }

    #[test]
    fn when_any_origin_requested_should_store_wildcard() {
        // Arrange & Act
        let policy = ResourcePolicy::builder().any_origin().build();

        // Assert
        assert!(policy.origins.is_any());
    }
}

mod validate {
    use super::*;

    #[test]
    fn when_fields_well_formed_should_pass() {
        // Arrange
        let policy = ResourcePolicy::builder()
            .origins(["http://a.com"])
            .methods([method::GET, method::POST])
            .headers(["x-test", "content-type"])
            .build();

        // Act
        let result = policy.validate("/resource");

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn when_origin_blank_should_return_empty_origin() {
        // Arrange
        let policy = ResourcePolicy::builder().origins(["  "]).build();

        // Act
        let result = policy.validate("/resource");

        // Assert
        assert_eq!(
            result,
            Err(ValidationError::EmptyOrigin {
                path: "/resource".into()
            })
        );
    }

    #[test]
    fn when_method_not_token_should_return_invalid_method() {
        // Arrange
        let policy = ResourcePolicy::builder()
            .origins(["http://a.com"])
            .methods(["GET POST"])
            .build();

        // Act
        let result = policy.validate("/resource");

        // Assert
        assert_eq!(
            result,
            Err(ValidationError::InvalidMethod {
                path: "/resource".into(),
                method: "GET POST".into(),
            })
        );
    }

    #[test]
    fn when_header_not_token_should_return_invalid_header_name() {
        // Arrange
        let policy = ResourcePolicy::builder()
            .origins(["http://a.com"])
            .headers(["x-test:"])
            .build();

        // Act
        let result = policy.validate("/resource");

        // Assert
        assert_eq!(
            result,
            Err(ValidationError::InvalidHeaderName {
                path: "/resource".into(),
                header: "x-test:".into(),
            })
        );
    }

    #[test]
    fn when_wildcard_with_credentials_should_leave_conflict_to_table() {
        // Arrange
        let policy = ResourcePolicy::builder()
            .any_origin()
            .credentials(true)
            .build();

        // Act
        let result = policy.validate("/resource");

        // Assert
        assert!(result.is_ok());
    }
}
