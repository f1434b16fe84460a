#![forbid(unsafe_code)]
#![doc = r#"
Souschef

Generate structured cooking recipes and cooking-step images by proxying two upstream services: an OpenAI-compatible completion API and an image-generation API.

Crate highlights
- HTTP server (in `server`): `GET /`, `POST /generate`, `POST /generate-image`.
- Prompting: a fixed recipe template embedding the expected JSON schema, with the ingredient list substituted in two places (`prompt`).
- Relay contract: recipe JSON is re-emitted with upstream key order preserved and 4-space indentation; image JSON is relayed verbatim.

Modules
- `config`: environment-sourced process configuration.
- `error`: error taxonomy and its HTTP mapping.
- `models`: transient request/response data structures.
- `prompt`: ingredient splitting and prompt rendering.
- `server`: Axum router/handlers.
- `upstream`: the two outbound calls.
- `util`: shared helpers (tracing, env, JSON formatting).

Note: the recipe response is only checked to be syntactically valid JSON; field presence and types are trusted to the upstream model's adherence to the prompt.
"#]

pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod server;
pub mod upstream;
pub mod util;

// Re-export the pieces needed to embed or test the service.
pub use crate::config::AppConfig;
pub use crate::error::ApiError;
pub use crate::prompt::{render_recipe_prompt, split_ingredients};
pub use crate::server::build_router;
pub use crate::util::AppState;
