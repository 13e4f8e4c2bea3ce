//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain and provides layered config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use regform_kernel::config::load_config;
//! use regform_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("regform.toml")).unwrap_or_default();
//! ```

pub mod config;

pub use regform_domain as domain;
