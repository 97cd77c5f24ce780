pub mod mcp9808;
