//! Flutter bridge for the taskboard core.

pub mod api;
