//! # Routine Quest Shared Library
//!
//! Data contracts shared by the Routine Quest client, API service and AI
//! service. Nothing in here performs I/O on the request path: the crate
//! defines entity shapes, tier constants, a handful of pure scoring and
//! time helpers, and the error kinds the services exchange.
//!
//! ## Key Components
//!
//! - [`models`]: User, Routine, Step, Session, CheckIn and Reward entities
//! - [`APP_CONFIG`]: Gameplay and tier parameters fixed at build time
//! - [`calculate_xp`], [`is_within_pbt`], [`format_duration`]: Scoring and time utilities
//! - [`AppError`]: Error taxonomy with machine-readable codes and HTTP statuses
//! - [`ApiResponse`]: Response envelope used between services
//! - [`Settings`]: Local client preferences persisted as TOML

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod scoring;
pub mod settings;
pub mod time;

pub use api::ApiResponse;
pub use config::{
    check_routine_quota, check_step_quota, AiCredits, AppConfig, TierLimits, APP_CONFIG,
};
pub use error::{AppError, ConfigError, ErrorBody, Result};
pub use models::{
    CheckIn, CheckInStatus, PbtTime, Reward, RewardPayload, RewardType, Routine, Session, Step,
    StepType, User, UserTier,
};
pub use scoring::{calculate_step_xp, calculate_xp, session_xp};
pub use settings::Settings;
pub use time::{format_duration, is_within_pbt};
