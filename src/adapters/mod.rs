// Adapters layer: concrete implementations for external systems (job boards, http, output).

pub mod headhunter;
pub mod http;
pub mod render;
pub mod superjob;
