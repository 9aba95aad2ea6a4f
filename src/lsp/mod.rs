// LSP protocol layer
// - server.rs: stdio transport setup
// - backend.rs: LanguageServer trait implementation
pub mod backend;
pub mod server;
