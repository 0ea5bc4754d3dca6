//! Natural ("alphanumeric") ordering of strings: numbers embedded in text
//! compare by value, everything else through a pluggable [`Collate`].
//!
//! ```
//! use alphanum_core::{AlphanumericComparator, CodePointOrder};
//!
//! let comparator = AlphanumericComparator::new(CodePointOrder);
//! let mut files = vec!["file12", "file2", "file1"];
//! comparator.sort(&mut files);
//! assert_eq!(files, ["file1", "file2", "file12"]);
//! ```

pub mod collate;
pub mod cursor;
pub mod digit;
pub mod natural_cmp;
pub mod numeric;
pub mod ordered;
pub mod text;

pub use collate::{CaseInsensitive, CodePointOrder, Collate};
pub use natural_cmp::{AlphanumericComparator, natural_cmp};
pub use ordered::NaturalString;
