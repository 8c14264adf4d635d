//! src/lib.rs
//!
//! Fish It (Roblox) 稀有鱼概率计算器。
//! 根据基础掉率 1:X、Total Luck 与已尝试次数，计算单次概率、累计概率和 respawn 建议。

pub mod calculator;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod report;
pub mod session;
pub mod utils;

pub use calculator::{compute, compute_batch};
pub use error::{AppError, Result};
pub use messages::Messages;
pub use models::{CalcResult, Field, Language, RawInput};
pub use session::Session;
