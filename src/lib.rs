//! Coddie MCP server.
//!
//! Exposes the Coddie project-management API as MCP tools. Each tool issues a
//! single authenticated `GET`, unwraps the response envelope and returns a
//! reduced ("lean") view of the entities.

pub mod client;
pub mod config;
pub mod envelope;
pub mod lean;
pub mod mcp;
pub mod models;
