//! Chatlabs-lib is a library behind the chatlabs teaching scripts.
//! It models a chat thread as an ordered list of role-tagged turns,
//! declares tools/functions the model may call, and sends the thread
//! to an OpenAI-style chat completion endpoint.
//!
//! ### Features
//!
//!  - closed set of chat turn kinds, checked at construction
//!  - stateless completion client: the thread is the whole context
//!  - tool declarations with JSON Schema shaped parameters
//!  - per-call token usage reporting
//!
//! ### Providers
//!
//! - OpenAI (GPT models)
//! - OpenRouter (OpenAI-compatible wire format)
//!
//! ### Examples
//!
//! ```rust no_run
//! use chatlabs_lib::llm::{get_completion, ChatTurn};
//! use chatlabs_lib::tools::ToolChoice;
//! use chatlabs_lib::request::get_reqwest_client;
//! use chatlabs_lib::ModelProvider;
//! use chatlabs_lib::Config;
//!
//! let config = Config::new(ModelProvider::OpenAI, "gpt-4o-mini".into(), "<api-key>".into(), "https://api.openai.com/v1/chat/completions".into());
//!
//! let reqwest_client = get_reqwest_client().expect("transport created");
//!
//! let completion = get_completion(config, reqwest_client).expect("client created");
//!
//! let thread = vec![
//!     ChatTurn::system("You are a helpful assistant."),
//!     ChatTurn::user("Hi assistant!"),
//! ];
//!
//! let reply = completion.complete(&thread, &[], ToolChoice::None).expect("LLM response");
//!
//! println!("{}", reply.turn.text());
//! println!("usage: {}", reply.usage);
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod error;
mod config;
pub mod llm;
pub mod tools;
pub mod request;

pub use error::Error;
pub use config::Config;
pub use config::ModelProvider;
