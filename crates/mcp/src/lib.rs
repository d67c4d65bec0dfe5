// MCP (Model Context Protocol) server exposing Market Fiyatı product search
// as tools to agent clients (Claude Desktop, IDE assistants, etc.)

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
