use crate::config::structs::company_config::CompanyConfig;

impl Default for CompanyConfig {
    fn default() -> Self {
        CompanyConfig {
            name: String::from("Certkeeper"),
            organizational_unit: String::from("Platform"),
            country: String::from("NL"),
            province: String::new(),
            locality: String::from("Amsterdam"),
        }
    }
}
