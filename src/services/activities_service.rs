use std::collections::BTreeMap;

use crate::models::Activity;
use crate::store::ActivityDirectory;

// Full listing keyed by activity name. The directory map is name-ordered, so
// the serialized body is stable across calls.
pub fn build_activities_listing(directory: &ActivityDirectory) -> BTreeMap<String, Activity> {
    directory.snapshot()
}
