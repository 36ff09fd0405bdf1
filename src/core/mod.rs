// Core algorithm exports
pub mod assembler;
pub mod availability;
pub mod dates;
pub mod evaluator;
pub mod pricing;
pub mod proximity;

pub use assembler::assemble_response;
pub use availability::is_available;
pub use dates::{parse_date, DateError};
pub use evaluator::SearchEvaluator;
pub use pricing::{calculate_price, days_between, days_stayed};
pub use proximity::{is_within_bounding_box, DEFAULT_RADIUS};
