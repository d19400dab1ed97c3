pub mod ddr_definition;
pub mod distribution_utils;
pub mod error;
pub mod grade;
pub mod ranking_utils;
pub mod safe_parse;
pub mod score_utils;
pub mod sheet_parser;
