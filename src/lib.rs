//! Find runs of integers that climb or fall by a fixed step.
//!
//! ```
//! use alerun::find_consecutive_runs;
//!
//! let sequence = [1, 2, 3, 5, 10, 9, 8, 9, 10, 11, 7, 8, 7];
//! let runs = find_consecutive_runs(&sequence, 1, 3).unwrap();
//!
//! assert_eq!(runs, Some(vec![0, 4, 6, 7]));
//! ```

pub mod error;
pub mod input;
pub mod runs;
pub mod windows;

pub use error::{InvalidArgument, RunResult};
pub use runs::{find_consecutive_runs, is_uniform_step, RunQuery};
