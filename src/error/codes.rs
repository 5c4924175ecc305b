/// Error code registry for basis
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 7000-7999: Invalid argument errors
/// - 8000-8999: Runtime failures
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_INVALID_YAML: u16 = 1002;

    // Invalid argument errors (7000-7999)
    pub const ARG_NULL_OBJECT: u16 = 7001;
    pub const ARG_NULL_KEYS: u16 = 7002;
    pub const ARG_INVALID_TYPE: u16 = 7003;
    pub const ARG_NOT_SERIALIZABLE: u16 = 7004;
    pub const ARG_CYCLIC_DELEGATION: u16 = 7005;
    pub const ARG_UNKNOWN_CAPABILITY: u16 = 7006;

    // Runtime failures (8000-8999)
    pub const RUNTIME_PANIC: u16 = 8001;
    pub const RUNTIME_NO_EXECUTOR: u16 = 8002;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1000 => "Generic configuration error",
        1002 => "Invalid YAML syntax in configuration",

        // Invalid argument errors
        7001 => "A mapping was required but null was supplied",
        7002 => "A key list was required but null was supplied",
        7003 => "Argument has the wrong type",
        7004 => "Value cannot be represented as JSON",
        7005 => "Delegation link would create a cycle",
        7006 => "Capability not found on type or its parents",

        // Runtime failures
        8001 => "Callback panicked",
        8002 => "No async runtime available to schedule work",

        _ => "Unknown error code",
    }
}
