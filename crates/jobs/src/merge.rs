//! Recursive last-wins merge of YAML documents.
//!
//! Maps merge key-wise with the overlay winning on conflicts; every other
//! value kind (scalars, sequences) is replaced wholesale. Applied as
//! `deep_merge(defaults, caller)` so caller values win.

use serde_yaml::Value;

pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(mut base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => {
                        let prev = std::mem::replace(existing, Value::Null);
                        *existing = deep_merge(prev, value);
                    }
                    None => {
                        base.insert(key, value);
                    }
                }
            }
            Value::Mapping(base)
        }
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_scalar_wins() {
        let merged = deep_merge(yaml("killTimeout: 30"), yaml("killTimeout: 5"));
        assert_eq!(merged, yaml("killTimeout: 5"));
    }

    #[test]
    fn nested_maps_merge_key_wise() {
        let base = yaml(
            "defaults:\n  captureStdout: true\n  killTimeout: 30\n",
        );
        let overlay = yaml("defaults:\n  killTimeout: 5\n");
        let merged = deep_merge(base, overlay);
        assert_eq!(merged["defaults"]["captureStdout"], yaml("true"));
        assert_eq!(merged["defaults"]["killTimeout"], yaml("5"));
    }

    #[test]
    fn overlay_only_keys_survive() {
        let merged = deep_merge(
            yaml("defaults:\n  killTimeout: 30\n"),
            yaml("jobs:\n  - name: nightly\n"),
        );
        assert_eq!(merged["defaults"]["killTimeout"], yaml("30"));
        assert_eq!(merged["jobs"][0]["name"], yaml("nightly"));
    }

    #[test]
    fn sequences_are_replaced_not_concatenated() {
        let merged = deep_merge(
            yaml("web:\n  listen:\n    - http://127.0.0.1:2600\n"),
            yaml("web:\n  listen:\n    - http://0.0.0.0:9000\n"),
        );
        let listen = merged["web"]["listen"].as_sequence().unwrap();
        assert_eq!(listen.len(), 1);
        assert_eq!(listen[0], yaml("http://0.0.0.0:9000"));
    }

    #[test]
    fn map_replaces_scalar_wholesale() {
        let merged = deep_merge(yaml("web: disabled"), yaml("web:\n  listen: []\n"));
        assert!(merged["web"].is_mapping());
    }
}
