pub mod breathe;
pub mod chat;
pub mod entries;
pub mod goal;
pub mod maintenance;
pub mod misc;
pub mod recommend;
pub mod stats;
pub mod tips;
