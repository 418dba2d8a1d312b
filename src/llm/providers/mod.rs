/// Cohere API client implementation.
///
/// Provides integration with Cohere's chat models through their REST API.
/// Supports:
/// - Text completion via the chat endpoint
/// - Request timeouts and error mapping
pub mod cohere;

pub use cohere::CohereProvider;
