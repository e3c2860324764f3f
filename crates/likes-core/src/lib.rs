//! Core types for the Like subsystem: entity models, id newtypes,
//! transfer views, and the store contracts backends implement.

pub mod entity;
pub mod like;
pub mod store;
pub mod view;
