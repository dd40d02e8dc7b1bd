// NOTE: Engine Design Rationale
//
// Why pure functions (no I/O, no error type)?
// - Every derived structure is a function of the session slice it is given;
//   recomputing on fresh data is always safe and always cheap (single pass)
// - Malformed numerics are a filtering concern, not an error: rows with an
//   unparseable condition still count toward success/fail totals, they just
//   drop out of that condition's numeric aggregates
// - "Nothing to aggregate" is Option::None, never a zeroed-out struct, so
//   callers are forced to branch before rendering an empty chart
//
// Why Option instead of Result?
// - After boundary filtering there is no failure left to report; the only
//   remaining case is the empty input, and None states it precisely

mod histogram;
mod report;
mod summary;

pub use histogram::{DEFAULT_BIN_COUNT, HistogramBin, SplitHistogram, split_histogram};
pub use report::{
    ConditionGroup, DogRanking, DogReport, DogTally, Distribution, GlobalCounts, Report,
    ScentTally,
};
pub use summary::{NumericSummary, numeric_summary};
