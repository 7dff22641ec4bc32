//! Core library for the Cadence workout scheduling wizard.
//!
//! This crate provides the wizard state machine that collects a workout name,
//! an optional preferred workout count, a set of dates and per-date time
//! slots, together with the HTTP client that hands the collected data to an
//! external scheduling service.
//!
//! # Architecture
//!
//! - **Inputs** ([`dates`], [`slots`]): Date normalization and per-day time
//!   slot collection
//! - **State machine** ([`wizard`]): Forward-only steps with validation and
//!   notifications
//! - **Wire** ([`models`], [`client`]): Request/response payloads and the
//!   single POST to the backend
//! - **Presentation** ([`display`], [`notification`]): Markdown views and
//!   self-expiring status messages
//! - **Settings** ([`config`]): Defaults, TOML file, environment, overrides
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cadence_core::{ConfigBuilder, ScheduleClient, ScheduleView, WizardBuilder};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigBuilder::new().build()?;
//! let client = ScheduleClient::from_config(&config)?;
//! let mut wizard = WizardBuilder::from_config(&config).build();
//!
//! wizard.submit_name("Morning run")?;
//! wizard.submit_dates(vec![date(2024, 6, 1)])?;
//! wizard.confirm_times(vec!["07:00".to_string()])?;
//! wizard.submit(&client).await?;
//!
//! println!("{}", ScheduleView::from_wizard(&wizard));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod dates;
pub mod display;
pub mod error;
pub mod models;
pub mod notification;
pub mod slots;
pub mod wizard;

// Re-export commonly used types
pub use client::ScheduleClient;
pub use config::{Config, ConfigBuilder};
pub use display::{ConfirmedTimes, NotificationLine, ScheduleView};
pub use error::{Result, SchedulerError};
pub use models::{ScheduleRequest, ScheduleResponse, SolutionEntry};
pub use notification::{Notification, NotificationChannel};
pub use slots::{SlotMode, TimeSlotCollector};
pub use wizard::{Wizard, WizardBuilder, WizardState, WizardStep};
