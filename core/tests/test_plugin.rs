// Host contract: capability advertisement and dispatch by name.

#[cfg(test)]
mod tests {
    use payload_core::assembler::assemble;
    use payload_core::config::{ConfigError, PayloadConfig};
    use payload_core::plugin::{
        resolve, GadgetPlugin, HelperFunction, HelperPlugin, PluginError, Request, Scalar,
    };
    use payload_core::types::PayloadError;

    fn plugin() -> GadgetPlugin {
        GadgetPlugin::new(&PayloadConfig::default()).unwrap()
    }

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    }

// # 1. Capability descriptor

    #[test]
    fn info_lists_one_capability() {
        let caps = plugin().info();
        assert_eq!(caps.len(), 1);
        assert_eq!(caps[0].name, "common_collection_5");
        assert_eq!(caps[0].arity, 1);
    }

    #[test]
    fn resolve_known_and_unknown() {
        assert_eq!(resolve("common_collection_5").unwrap(), HelperFunction::CommonsCollections5);
        assert_eq!(
            resolve("common_collection_6").unwrap_err(),
            PluginError::UnknownFunction { name: "common_collection_6".into() }
        );
    }

    #[test]
    fn zero_cap_is_rejected_at_construction() {
        let err = GadgetPlugin::new(&PayloadConfig { max_command_len: 0 }).unwrap_err();
        assert_eq!(
            err,
            PayloadError::Config(ConfigError::InvalidMaxCommandLen { have: 0, max: 65_535 })
        );
    }

    #[test]
    fn oversized_cap_is_rejected_at_construction() {
        assert!(matches!(
            GadgetPlugin::new(&PayloadConfig { max_command_len: 65_536 }),
            Err(PayloadError::Config(ConfigError::InvalidMaxCommandLen { have: 65_536, .. }))
        ));
    }

// # 2. Dispatch

    #[test]
    fn execute_returns_payload_bytes() {
        init_logging();
        let req = Request::new("common_collection_5", vec![Scalar::String("id".into())]);
        let resp = plugin().execute(&req).unwrap();
        assert_eq!(resp.result, Scalar::Bytes(assemble("id").unwrap().into_vec()));
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let req = Request::new(
            "common_collection_5",
            vec![Scalar::String("id".into()), Scalar::Int(7)],
        );
        assert!(plugin().execute(&req).is_ok());
    }

    #[test]
    fn empty_args_fail_with_count() {
        init_logging();
        let req = Request::new("common_collection_5", vec![]);
        assert_eq!(
            plugin().execute(&req).unwrap_err(),
            PluginError::InvalidArgumentCount { have: 0, need: 1 }
        );
    }

    #[test]
    fn count_is_checked_before_name() {
        let req = Request::new("nope", vec![]);
        assert!(matches!(
            plugin().execute(&req).unwrap_err(),
            PluginError::InvalidArgumentCount { .. }
        ));
    }

    #[test]
    fn unknown_name_fails() {
        let req = Request::new("nope", vec![Scalar::String("id".into())]);
        assert_eq!(
            plugin().execute(&req).unwrap_err(),
            PluginError::UnknownFunction { name: "nope".into() }
        );
    }

    #[test]
    fn non_string_argument_fails() {
        let req = Request::new("common_collection_5", vec![Scalar::Bool(true)]);
        assert_eq!(
            plugin().execute(&req).unwrap_err(),
            PluginError::InvalidArgumentType { index: 0, expected: "string", have: "bool" }
        );
    }

    #[test]
    fn too_large_propagates() {
        let req = Request::new("common_collection_5", vec![Scalar::String("a".repeat(65_536))]);
        assert_eq!(
            plugin().execute(&req).unwrap_err(),
            PluginError::Payload(PayloadError::PayloadTooLarge { have: 65_536, max: 65_535 })
        );
    }

// # 3. Wire shape

    #[test]
    fn request_from_json() {
        let req: Request = serde_json::from_str(
            r#"{"name":"common_collection_5","args":[{"type":"string","value":"id"}]}"#,
        )
        .unwrap();
        assert_eq!(req, Request::new("common_collection_5", vec![Scalar::String("id".into())]));
    }

    #[test]
    fn capability_to_json() {
        let json = serde_json::to_string(&plugin().info()).unwrap();
        assert_eq!(json, r#"[{"name":"common_collection_5","arity":1}]"#);
    }

    #[test]
    fn plugin_is_usable_as_trait_object() {
        let p: Box<dyn HelperPlugin> = Box::new(plugin());
        let req = Request::new("common_collection_5", vec![Scalar::String("whoami".into())]);
        let resp = p.execute(&req).unwrap();
        assert!(resp.result.as_bytes().unwrap().starts_with(&[0xAC, 0xED, 0x00, 0x05]));
    }
}
