use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.auth.require_session, eq(false));
    assert_that!(config.store.seed_demo_data, eq(true));
    assert_that!(config.validation.max_upload_bytes, eq(10 * 1024 * 1024));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("config");
    let _guard = EnvGuard::set("MP_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.exists());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000

            [store]
            seed_demo_data = false

            [ai]
            chat_model = "gpt-4o-mini"
        "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.store.seed_demo_data, eq(false));
    assert_that!(config.ai.chat_model, eq("gpt-4o-mini"));
    assert_that!(config.ai.vision_model, eq("gpt-5"));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000
        "#,
    )
    .unwrap();
    let _port = EnvGuard::set("MP_SERVER_PORT", "9100");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9100));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_cors_origins_env_when_load_then_split_on_commas() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _origins = EnvGuard::set(
        "MP_SERVER_CORS_ALLOWED_ORIGINS",
        "http://localhost:5173, https://meals.example.com,",
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(
        config.server.cors_allowed_origins,
        vec!["http://localhost:5173", "https://meals.example.com"]
    );
}

#[test]
#[serial]
fn given_store_seed_env_when_load_then_overridden() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _seed = EnvGuard::set("MP_STORE_SEED_DEMO_DATA", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.store.seed_demo_data, eq(false));
}
