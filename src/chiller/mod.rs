//! 칠러 구성 탐색 관련 모듈.

pub mod catalog;
pub mod sizing;

pub use catalog::{filter_by_strategy, standard_catalog, ChillerSpec, ChillerStrategy};
pub use sizing::{
    search_configurations, ChillerOption, ChillerSizingError, ChillerSizingInput, RedundancyModel,
};
