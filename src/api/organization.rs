use serde::{Deserialize, Serialize};

/// A customer organization and its departments.
///
/// # Example JSON
///
/// ```json
/// {
///   "id": 1,
///   "name": "Org1",
///   "departments": [
///     { "id": 11, "name": "Dept1", "parentName": "Org1" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub departments: Vec<Department>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub parent_name: Option<String>,
}
