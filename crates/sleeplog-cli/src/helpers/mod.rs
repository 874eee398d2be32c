//! Argument parsing helpers shared by commands.

mod parsing;

pub use parsing::{
    parse_date, parse_output_format, parse_quality, parse_time, parse_window, window_start,
};
