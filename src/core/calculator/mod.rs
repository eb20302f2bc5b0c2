pub mod idle;
pub mod man_day;
pub mod rollup;
