//! One-to-one arrangement of drivers onto destinations.
//!
//! Every (driver, destination) pair gets a suitability [`score`]; the scores
//! form a dense [`ScoreMatrix`], and [`hungarian_max`] picks the assignment
//! with the largest total. [`greedy`] is available as an explicitly
//! approximate alternative.
//!
//! ```
//! let result = driver_arrangement::arrange(&["aaaa", "abca", "efgh"], &["aaaa", "bbb"])?;
//! assert_eq!(result.total_score, 12.0);
//! # Ok::<(), driver_arrangement::MatchError>(())
//! ```

pub mod arrangement;
pub mod assemble;
pub mod error;
pub mod greedy;
pub mod hungarian;
pub mod input;
pub mod logging;
pub mod matrix;
pub mod score;

pub use arrangement::{arrange, solve, Arrangement, Strategy};
pub use assemble::{assemble, MatchResult, Pairing};
pub use error::{Collection, MatchError};
pub use greedy::greedy;
pub use hungarian::{hungarian, hungarian_max, Allocation, Allocations};
pub use input::{read_entities, InputFormat};
pub use matrix::ScoreMatrix;
pub use score::score;
