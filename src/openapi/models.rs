// =============================================================================
// Constants
// =============================================================================

/// Route serving the API description
pub const OPENAPI_PATH: &str = "/openapi.json";
/// OpenAPI revision the document follows
pub const OPENAPI_VERSION: &str = "3.1.0";
/// Title advertised in the document's `info` block
pub const API_TITLE: &str = "Fruit Store";
