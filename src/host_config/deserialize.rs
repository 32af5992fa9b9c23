// ABOUTME: Custom serde deserializers for host config fields.
// ABOUTME: Decoded lists get the same duplicate removal as builder setters.

use super::builder::copy_without_duplicates;
use serde::{Deserialize, Deserializer};

pub(super) fn deserialize_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + PartialEq,
{
    let opt: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(opt.map(copy_without_duplicates))
}
