//! Property-based tests for configuration resolution.

use super::configuration::Configuration;
use super::resolver::{ConfigResolver, TOOL_NAME};
use super::schema::Schema;
use super::validator::SchemaValidator;
use super::ConfigDiscovery;
use crate::ErrorKind;
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Strategy for extra fields the schema does not constrain; the `k`/`v`
// prefixes keep keys and strings from reading as YAML scalars of another type
fn extra_fields_strategy() -> impl Strategy<Value = Map<String, Value>> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "v[a-z0-9]{0,10}".prop_map(Value::from),
        Just(Value::Null),
    ];
    prop::collection::btree_map("k[a-z]{0,7}", leaf, 0..6)
        .prop_map(|fields| fields.into_iter().collect())
}

fn config_strategy() -> impl Strategy<Value = Value> {
    (any::<i64>(), extra_fields_strategy()).prop_map(|(port, mut fields)| {
        fields.insert("port".to_string(), Value::from(port));
        Value::Object(fields)
    })
}

fn resolver(dir: &Path) -> ConfigResolver {
    ConfigResolver::new()
        .with_working_dir(dir)
        .with_discovery(ConfigDiscovery::new(TOOL_NAME).with_stop_dir(dir))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // Every integer port passes the built-in schema
    #[test]
    fn integer_port_always_validates(port in any::<i64>()) {
        let report = SchemaValidator::validate(&Schema::builtin(), &json!({ "port": port }));
        prop_assert!(report.is_empty());
    }

    // A string port never validates, whatever it spells
    #[test]
    fn string_port_never_validates(port in ".*") {
        let report = SchemaValidator::validate(&Schema::builtin(), &json!({ "port": port }));
        prop_assert_eq!(report.len(), 1);
        prop_assert_eq!(report.violations()[0].path.as_str(), "/port");
    }

    // Fractional ports are not integers
    #[test]
    fn fractional_port_never_validates(whole in -1_000_000i64..1_000_000, frac in 0.01f64..0.99) {
        #[allow(clippy::cast_precision_loss)]
        let port = whole as f64 + frac;
        let report = SchemaValidator::validate(&Schema::builtin(), &json!({ "port": port }));
        prop_assert!(!report.is_empty());
    }

    // Writing a valid configuration and resolving it yields the same document
    #[test]
    fn json_file_round_trip(value in config_strategy()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();

        let config = resolver(temp_dir.path()).resolve(Some(path.as_path())).unwrap();
        prop_assert_eq!(config.into_value(), value);
    }

    // YAML sources resolve to the same document as JSON ones
    #[test]
    fn yaml_file_round_trip(value in config_strategy()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, serde_yaml::to_string(&value).unwrap()).unwrap();

        let config = resolver(temp_dir.path()).resolve(Some(path.as_path())).unwrap();
        prop_assert_eq!(config.into_value(), value);
    }

    // Unknown extensions are always refused, regardless of content
    #[test]
    fn unknown_extension_always_unsupported(ext in "(txt|toml|ini|cfg|conf)", body in ".*") {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(format!("config.{ext}"));
        fs::write(&path, body).unwrap();

        let err = resolver(temp_dir.path()).resolve(Some(path.as_path())).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    // Without a source the default is returned verbatim
    #[test]
    fn default_is_stable(_seed in any::<u8>()) {
        let temp_dir = TempDir::new().unwrap();
        let config = resolver(temp_dir.path()).resolve(None).unwrap();
        prop_assert_eq!(config, Configuration::default());
    }
}
