use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CompanyConfig {
    pub name: String,
    pub organizational_unit: String,
    pub country: String,
    pub province: String,
    pub locality: String,
}
