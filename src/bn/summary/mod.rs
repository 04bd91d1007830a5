pub mod describe;

pub use describe::{
    conditional_frequencies, describe, describe_values, grouped_describe, value_counts,
    ColumnStats, GroupStats,
};
