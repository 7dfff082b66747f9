/// Constants used throughout the svckeys codebase
// Environment variable names
pub const API_KEY_ENV_VAR: &str = "IC_API_KEY";
pub const LOG_ENV_VAR: &str = "SVCKEYS_LOG";
pub const IAM_ENDPOINT_ENV_VAR: &str = "IBMCLOUD_IAM_API_ENDPOINT";
pub const RESOURCE_CONTROLLER_ENDPOINT_ENV_VAR: &str = "IBMCLOUD_RESOURCE_CONTROLLER_API_ENDPOINT";
pub const RESOURCE_MANAGER_ENDPOINT_ENV_VAR: &str = "IBMCLOUD_RESOURCE_MANAGER_API_ENDPOINT";

// Default endpoints
pub const DEFAULT_IAM_ENDPOINT: &str = "https://iam.cloud.ibm.com";
pub const DEFAULT_RESOURCE_CONTROLLER_ENDPOINT: &str = "https://resource-controller.cloud.ibm.com";
pub const DEFAULT_RESOURCE_MANAGER_ENDPOINT: &str = "https://resource-controller.cloud.ibm.com";

// CLI defaults
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".json";
pub const DEFAULT_PARSER_GROUP: &str = "compliance";
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Secret document
pub const SECRET_API_VERSION: &str = "v1";
pub const SECRET_KIND: &str = "Secret";
