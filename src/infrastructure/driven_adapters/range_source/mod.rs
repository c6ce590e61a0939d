//! Trusted Range Source Adapters

pub mod github_meta;

pub use github_meta::GithubMetaRangeSource;
