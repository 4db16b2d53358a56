/// Exit code: success.
pub const SUCCESS: i32 = 0;

/// Exit code: runtime error (child could not be waited on, output failed, etc.).
pub const RUNTIME_ERROR: i32 = 1;

/// Exit code: usage / input error (unparseable status, invalid format, etc.).
pub const USAGE_ERROR: i32 = 2;

/// Exit code: the program given to `wstatus run` could not be started.
pub const PREREQ_NOT_FOUND: i32 = 127;

/// Exit code: interrupted by a second Ctrl+C.
pub const INTERRUPTED: i32 = 130;
