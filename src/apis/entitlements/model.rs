use crate::{apis::features::PrivilegeValueType, envelope::resource};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A feature granted by a plan, with the value of each of its privileges.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entitlement {
    pub code: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub privileges: Vec<EntitlementPrivilege>,
}

resource!(Entitlement, "entitlement", "entitlements");

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EntitlementPrivilege {
    pub code: String,
    pub name: Option<String>,
    pub value_type: PrivilegeValueType,
    /// Granted value, typed according to `value_type`.
    pub value: Value,
    #[serde(default)]
    pub config: Value,
}

/// Entitlements to set on a plan: feature code mapped to privilege code mapped to value.
///
/// A feature without privileges is granted with an empty map.
pub type EntitlementsInput = BTreeMap<String, BTreeMap<String, Value>>;
