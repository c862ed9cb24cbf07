//! Settings-menu addressing and time control parsing for a chess UI.
//!
//! The [`domain`] layer is pure: a menu is an ordered tree of [`domain::Node`]s addressed by
//! single-digit index paths, and time control tags parse into [`domain::TimePeriod`]s.
//! [`application`] and [`config`] load menus and settings from files; [`cli`] drives the
//! `chessmenu` binary.
//!
//! ```
//! use chessmenu::domain::{menu, resolve, time_control, TimePeriod};
//!
//! let tree = menu().unwrap();
//! let blitz = resolve(tree, &[3, 8, 0]).unwrap();
//! let tag = blitz.as_leaf().unwrap().as_text().unwrap();
//! assert_eq!(time_control::parse(tag).unwrap(), vec![TimePeriod::new(180, 2, 0)]);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
