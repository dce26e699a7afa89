// Infrastructure layer module
// Contains external service integrations
// Follows Hexagonal Architecture

pub mod repositories;
