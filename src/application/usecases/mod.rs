//! 애플리케이션 유스케이스 모음.

pub mod calculate;
pub mod inspect_config;
pub mod sample_usage;
