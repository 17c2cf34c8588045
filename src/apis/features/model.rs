use crate::{
    envelope::resource,
    query::{ListInput, QueryParams, ToQuery},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Feature {
    pub code: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub privileges: Vec<Privilege>,
    pub created_at: DateTime<Utc>,
}

resource!(Feature, "feature", "features");

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Privilege {
    pub code: String,
    pub name: Option<String>,
    pub value_type: PrivilegeValueType,
    #[serde(default)]
    pub config: PrivilegeConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PrivilegeValueType {
    Integer,
    String,
    Boolean,
    Select,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PrivilegeConfig {
    /// Accepted values of a `select` privilege.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub select_options: Vec<String>,
}

/// Attributes of a feature to create or update.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FeatureInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileges: Option<Vec<PrivilegeInput>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PrivilegeInput {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<PrivilegeValueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PrivilegeConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureListInput {
    pub pagination: ListInput,
    pub search_term: Option<String>,
}

impl ToQuery for FeatureListInput {
    fn to_query(&self) -> QueryParams {
        let mut query = self.pagination.to_query();
        query.push_opt("search_term", self.search_term.as_deref());
        query
    }
}
