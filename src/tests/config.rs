use crate::{BlockingQueue, Config, ConfigError};

#[test]
fn default_test(){
    let config = Config::default();
    assert_eq!(config, Config::unbounded());
    assert!(!config.is_bounded());
    assert_eq!(config.initial_allocation(), 0);
}

#[test]
fn preallocate_clamped_test(){
    let config = Config::bounded(4).with_preallocate(1000);
    assert!(config.is_bounded());
    assert_eq!(config.initial_allocation(), 4);

    let config = Config::bounded(1000).with_preallocate(16);
    assert_eq!(config.initial_allocation(), 16);
}

#[test]
fn zero_capacity_rejected_test(){
    assert_eq!(Config::bounded(0).validate(), Err(ConfigError::ZeroCapacity));
    assert_eq!(Config::bounded(1).validate(), Ok(()));
    assert_eq!(Config::unbounded().validate(), Ok(()));

    let err = BlockingQueue::<usize>::try_from_config(&Config::bounded(0)).unwrap_err();
    assert_eq!(err, ConfigError::ZeroCapacity);

    let queue = BlockingQueue::<usize>::try_from_config(&Config::bounded(3)).unwrap();
    assert_eq!(queue.capacity(), 3);
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_test(){
    let config: Config = serde_json::from_str(r#"{"capacity": 64}"#).unwrap();
    assert_eq!(config, Config::bounded(64));

    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());

    let json = serde_json::to_string(&Config::bounded(2).with_preallocate(2)).unwrap();
    assert_eq!(json, r#"{"capacity":2,"preallocate":2}"#);
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_zero_capacity_test(){
    let err = serde_json::from_str::<Config>(r#"{"capacity": 0}"#).unwrap_err();
    assert!(err.to_string().contains("capacity must be greater than zero"));

    let err = serde_json::from_str::<Config>(r#"{"capacity": 0, "preallocate": 8}"#).unwrap_err();
    assert!(err.is_data());
}
