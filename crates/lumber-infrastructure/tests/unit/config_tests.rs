//! Configuration loading tests
//!
//! Environment and working directory changes go through `figment::Jail`,
//! which serializes jailed tests and restores both afterwards.

use figment::Jail;
use lumber_domain::value_objects::{ComponentDeclaration, Level};
use lumber_infrastructure::config::{ConfigBuilder, ConfigLoader, LoggingConfig, LumberConfig};

fn load(loader: &ConfigLoader) -> figment::error::Result<LumberConfig> {
    loader.load().map_err(|e| e.to_string().into())
}

#[test]
fn test_defaults_without_file_or_environment() {
    Jail::expect_with(|jail| {
        let config = load(&ConfigLoader::new().with_config_path(jail.directory().join("absent.toml")))?;
        assert_eq!(config.manager.logger_context_factory, None);
        assert!(config.manager.scan_linked);
        assert!(config.manager.provider_search_path.is_empty());
        assert_eq!(config.manager.fallback_level, Level::Error);
        assert_eq!(config.logging.level, "warn");
        assert!(config.components.is_empty());
        Ok(())
    });
}

#[test]
fn test_file_in_working_directory_is_found() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "lumber.toml",
            r#"
            [manager]
            logger_context_factory = "lumber.providers.StandardContextFactory"
            provider_search_path = ["plugins"]
            fallback_level = "warn"

            [logging]
            level = "debug"
            "#,
        )?;

        let config = load(&ConfigLoader::new())?;
        assert_eq!(
            config.manager.logger_context_factory.as_deref(),
            Some("lumber.providers.StandardContextFactory")
        );
        assert_eq!(config.manager.provider_search_path.len(), 1);
        assert_eq!(config.manager.fallback_level, Level::Warn);
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
            [manager]
            logger_context_factory = "from.File"
            "#,
        )?;
        jail.set_env("LUMBER_MANAGER__LOGGER_CONTEXT_FACTORY", "from.Environment");
        jail.set_env("LUMBER_LOGGING__JSON_FORMAT", "true");

        let config = load(&ConfigLoader::new().with_config_path("custom.toml"))?;
        assert_eq!(
            config.manager.logger_context_factory.as_deref(),
            Some("from.Environment")
        );
        assert!(config.logging.json_format);
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("APP_MANAGER__SCAN_LINKED", "false");
        jail.set_env("LUMBER_MANAGER__SCAN_LINKED", "true");

        let loader = ConfigLoader::new()
            .with_env_prefix("APP")
            .with_config_path(jail.directory().join("absent.toml"));
        assert!(!load(&loader)?.manager.scan_linked);
        Ok(())
    });
}

#[test]
fn test_component_declarations_are_parsed() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "lumber.toml",
            r#"
            [[components]]
            type = "Console"
            attributes = { name = "stdout", target = "SYSTEM_ERR" }

            [[components.children]]
            type = "XMLLayout"
            attributes = { complete = true, locationInfo = false }
            "#,
        )?;

        let config = load(&ConfigLoader::new())?;
        assert_eq!(config.components.len(), 1);
        let console = &config.components[0];
        assert_eq!(console.type_name, "Console");
        assert_eq!(console.attribute("target"), Some("SYSTEM_ERR"));
        assert_eq!(console.children.len(), 1);
        assert_eq!(console.children[0].attribute("complete"), Some("true"));
        assert_eq!(console.children[0].attribute("locationinfo"), Some("false"));
        Ok(())
    });
}

#[test]
fn test_empty_override_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("LUMBER_MANAGER__LOGGER_CONTEXT_FACTORY", "  ");
        let result = ConfigLoader::new()
            .with_config_path(jail.directory().join("absent.toml"))
            .load();
        let message = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.contains("logger_context_factory cannot be empty"), "{message}");
        Ok(())
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("bad-level.toml", "[logging]\nlevel = \"loud\"\n")?;
        jail.create_file("bad-fallback.toml", "[manager]\nfallback_level = \"severe\"\n")?;
        jail.create_file("bad-component.toml", "[[components]]\ntype = \"\"\n")?;

        for file in ["bad-level.toml", "bad-fallback.toml", "bad-component.toml"] {
            let result = ConfigLoader::new().with_config_path(file).load();
            assert!(result.is_err(), "{file} should not load");
        }
        Ok(())
    });
}

#[test]
fn test_builder_validates() {
    let config = ConfigBuilder::new()
        .with_override("lumber.providers.StandardContextFactory")
        .with_search_path("/opt/lumber/providers")
        .with_linked_providers(false)
        .with_fallback_level(Level::Info)
        .with_logging(LoggingConfig {
            level: "info".to_string(),
            json_format: true,
        })
        .with_component(ComponentDeclaration::new("Memory").with_attribute("name", "buffer"))
        .build();
    let config = config.expect("valid configuration");
    assert!(!config.manager.scan_linked);
    assert_eq!(config.components.len(), 1);

    assert!(ConfigBuilder::new().with_override("").build().is_err());
    assert!(
        ConfigBuilder::new()
            .with_component(ComponentDeclaration::new("Console").with_child(ComponentDeclaration::new(" ")))
            .build()
            .is_err()
    );
}

#[test]
fn test_render_loads_back() {
    Jail::expect_with(|jail| {
        let config = ConfigBuilder::new()
            .with_override("test.Rendered")
            .with_component(ComponentDeclaration::new("Memory").with_attribute("name", "buffer"))
            .build()
            .map_err(|e| e.to_string())?;
        let rendered = ConfigLoader::render(&config).map_err(|e| e.to_string())?;
        jail.create_file("rendered.toml", &rendered)?;

        let loaded = load(&ConfigLoader::new().with_config_path("rendered.toml"))?;
        assert_eq!(loaded.manager.logger_context_factory.as_deref(), Some("test.Rendered"));
        assert_eq!(loaded.components, config.components);
        Ok(())
    });
}
