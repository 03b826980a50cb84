use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;
use uuid::Uuid;

#[test]
#[serial]
fn given_default_config_when_reading_default_user_then_demo_uuid() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.auth.default_user_uuid().unwrap(),
        eq(Uuid::from_u128(1))
    );
}

#[test]
#[serial]
fn given_invalid_default_user_id_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _user = EnvGuard::set("MP_AUTH_DEFAULT_USER_ID", "sarah");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("default_user_id"));
}

#[test]
#[serial]
fn given_require_session_env_when_load_then_enabled() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _require = EnvGuard::set("MP_AUTH_REQUIRE_SESSION", "true");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.require_session, eq(true));
    assert_that!(config.validate(), ok(anything()));
}
