//! Heuristic decision policy for owned pacs
//!
//! Architecture: pure per-pac selection over a borrowed context
//! - `zones` splits believed pellets between pacs by column band
//! - `action_select` turns one pac's context into one `Decision`
//! - `command` holds the wire-level command and its intent

pub mod action_select;
pub mod command;
pub mod zones;

pub use action_select::{flee_target, select_action, SelectionContext};
pub use command::{Command, CommandBatch, Decision, Intent};
pub use zones::{bucketize, partition, rank_candidates, zone_bounds};
