//! Decode the status word written by `wait()`/`waitpid()` into prose.
//!
//! ```
//! use wstatus::decode;
//!
//! // `exit(2)` is reported as 2 << 8 on Linux and the BSDs.
//! assert_eq!(decode(2 << 8), "exited with code 2");
//! ```

pub mod wait_status;

pub use wait_status::{WaitStatus, decode};
