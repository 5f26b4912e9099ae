use std::fmt::Debug;

use assert_json_diff::assert_json_eq;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Checks `got` serializes to `expected_value` and that `expected_value`
/// deserializes back to `got`.
#[track_caller]
pub fn assert_serde_json<T>(got: &T, expected_value: Value)
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let got_value = serde_json::to_value(got).unwrap();
    assert_json_eq!(got_value, expected_value.clone());

    let expected: T = serde_json::from_value(expected_value).unwrap();
    assert_eq!(got, &expected);
}

/// Parses `json` into `T` and checks it is written back out unchanged
#[track_caller]
pub fn assert_round_trip<T>(json: &str)
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let expected_value: Value = serde_json::from_str(json).unwrap();
    let got: T = serde_json::from_value(expected_value.clone()).unwrap();

    assert_serde_json(&got, expected_value);
}
